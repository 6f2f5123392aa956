//! Console sink abstraction
//!
//! A logging method resolves to one of a fixed set of sink kinds, with a
//! generic fallback standing in for a console that has no function of
//! that name. The [`Console`] trait is the seam: [`StdConsole`] prints to
//! the process streams, [`MemoryConsole`] records calls for inspection.

use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

/// The fixed set of console sinks a logging method can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Log,
    Warn,
    Error,
    Debug,
    /// Fallback for method names with no console function of their own.
    /// Behaves like [`SinkKind::Log`].
    Generic,
}

impl SinkKind {
    /// Resolve a method name to its sink. Names outside the known set
    /// fall back to [`SinkKind::Generic`].
    pub fn resolve(name: &str) -> Self {
        match name {
            "log" => Self::Log,
            "warn" => Self::Warn,
            "error" => Self::Error,
            "debug" => Self::Debug,
            _ => Self::Generic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Debug => "debug",
            Self::Generic => "generic",
        }
    }

    /// Whether this sink writes to stderr rather than stdout. Debug
    /// writes to stdout like Log does.
    pub fn is_stderr(&self) -> bool {
        matches!(self, Self::Warn | Self::Error)
    }
}

/// A destination for formatted log output.
///
/// Implementations receive the sink kind and the already-rendered
/// argument list, one call per logging invocation.
pub trait Console: Send + Sync {
    fn write(&self, sink: SinkKind, parts: &[String]);
}

/// Console that prints to the process streams: arguments joined with
/// single spaces, one line per call, warn/error routed to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write(&self, sink: SinkKind, parts: &[String]) {
        let line = parts.join(" ");
        if sink.is_stderr() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

/// One recorded console call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleRecord {
    pub sink: SinkKind,
    pub parts: Vec<String>,
}

/// In-memory console for tests and capture scenarios.
///
/// Clones share the same buffer, so a handle kept by the test keeps
/// seeing calls after another clone moves into a logger.
#[derive(Debug, Default, Clone)]
pub struct MemoryConsole {
    records: Arc<Mutex<Vec<ConsoleRecord>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every call recorded so far.
    pub fn records(&self) -> Vec<ConsoleRecord> {
        self.records.lock().clone()
    }

    /// Drain the recorded calls, leaving the buffer empty.
    pub fn take(&self) -> Vec<ConsoleRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Console for MemoryConsole {
    fn write(&self, sink: SinkKind, parts: &[String]) {
        self.records.lock().push(ConsoleRecord {
            sink,
            parts: parts.to_vec(),
        });
    }
}

/// Render a single argument the way the console shows it: strings bare,
/// everything else as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
