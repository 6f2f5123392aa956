//! Color registry and the string colorizer

use colored::Colorize;
use serde_json::Value;

/// The fixed set of colors the colorizer recognizes.
///
/// Escape sequences follow the `colored` crate's convention: an SGR
/// start code and a `\x1b[0m` reset. [`Color::Gray`] maps to bright
/// black (`\x1b[90m`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl Color {
    /// All recognized colors, in registry order.
    pub const ALL: [Color; 9] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Gray,
    ];

    /// Parse a color name. Surrounding whitespace is ignored, matching is
    /// case-insensitive, and "grey" is accepted for [`Color::Gray`].
    /// Empty or unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "black" => Some(Self::Black),
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "blue" => Some(Self::Blue),
            "magenta" => Some(Self::Magenta),
            "cyan" => Some(Self::Cyan),
            "white" => Some(Self::White),
            "gray" | "grey" => Some(Self::Gray),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Gray => "gray",
        }
    }

    /// Wrap `s` in this color's escape sequence and the reset sequence.
    ///
    /// Whether escapes are actually emitted is governed by the `colored`
    /// crate's global controls (tty detection, `NO_COLOR`,
    /// `colored::control::set_override`).
    pub fn paint(&self, s: &str) -> String {
        match self {
            Self::Black => s.black(),
            Self::Red => s.red(),
            Self::Green => s.green(),
            Self::Yellow => s.yellow(),
            Self::Blue => s.blue(),
            Self::Magenta => s.magenta(),
            Self::Cyan => s.cyan(),
            Self::White => s.white(),
            Self::Gray => s.bright_black(),
        }
        .to_string()
    }
}

/// Apply the color named `color_name` to every string found in `value`,
/// preserving the value's shape.
///
/// - a string is returned transformed;
/// - a sequence keeps its length and order, with string elements
///   transformed and everything else untouched (one level only; nested
///   containers pass through whole);
/// - a mapping keeps its keys, with string values transformed and
///   everything else untouched;
/// - numbers, booleans, and null pass through unchanged.
///
/// An empty or unrecognized color name returns `value` unchanged,
/// whatever its shape.
pub fn colorize(value: Value, color_name: &str) -> Value {
    let Some(color) = Color::parse(color_name) else {
        return value;
    };

    match value {
        Value::String(s) => Value::String(color.paint(&s)),
        Value::Array(items) => Value::Array(colorize_items(items, color)),
        Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, item)| match item {
                    Value::String(s) => (key, Value::String(color.paint(&s))),
                    other => (key, other),
                })
                .collect(),
        ),
        other => other,
    }
}

/// Sequence branch of [`colorize`], shared with the dispatch path where
/// the argument list is already a `Vec`.
pub(crate) fn colorize_items(items: Vec<Value>, color: Color) -> Vec<Value> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Value::String(color.paint(&s)),
            other => other,
        })
        .collect()
}
