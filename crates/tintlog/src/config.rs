//! Logging configuration types (method name -> method options)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::color::Color;

/// Options for a single logging method.
///
/// Every field is optional on the wire; absent fields default to
/// false/empty/none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MethodConfig {
    /// Emit only when the logger's `verbose` option is set.
    pub verbose: bool,

    /// Token prepended ahead of the call arguments. Ignored when it
    /// trims to empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,

    /// Name of the color transform applied to string output (see
    /// [`Color::parse`]). Unrecognized names leave output uncolored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Prepend a `[timestamp]` token ahead of prefix and arguments.
    pub stamp: bool,

    /// Escalate every call into an error after the output is emitted.
    pub throws: bool,
}

impl MethodConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the color from the fixed registry.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color.as_str().to_string());
        self
    }

    /// Set the color by name, recognized or not. Useful when the name
    /// comes from user input and should degrade to uncolored output.
    pub fn with_color_name(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_stamp(mut self, stamp: bool) -> Self {
        self.stamp = stamp;
        self
    }

    pub fn with_throws(mut self, throws: bool) -> Self {
        self.throws = throws;
        self
    }
}

/// Mapping from method name to its options.
///
/// Deserializes from the plain JSON object shape:
///
/// ```json
/// {
///   "warn": { "stamp": true, "prefix": "WARN:", "color": "yellow" },
///   "debug": { "verbose": true, "color": "cyan" }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoggingConfig {
    pub methods: HashMap<String, MethodConfig>,
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one method entry.
    pub fn with_method(mut self, name: impl Into<String>, config: MethodConfig) -> Self {
        self.methods.insert(name.into(), config);
        self
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
