//! Error types for logger registration and dispatch

use serde_json::Value;
use thiserror::Error;

use crate::console::render_value;

/// Errors surfaced by [`Logger`](crate::Logger) operations.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// A config key collides with a built-in operation or an
    /// already-installed logging method. Raised at registration time;
    /// entries handled before the colliding key stay installed.
    #[error("cannot install logging method '{name}': it already exists")]
    MethodCollision { name: String },

    /// Deliberate log-and-escalate: a method configured with `throws`
    /// produced this after its output was emitted. Carries the original
    /// call arguments.
    #[error("forced log error: {}", render_args(.args))]
    ForcedLog { args: Vec<Value> },

    /// Dispatch was attempted on a name that was never installed.
    #[error("no logging method named '{name}' is installed")]
    UnknownMethod { name: String },

    /// A per-method entry in a JSON config did not parse as method
    /// options.
    #[error("invalid configuration for logging method '{name}': {source}")]
    InvalidMethodConfig {
        name: String,
        source: serde_json::Error,
    },
}

fn render_args(args: &[Value]) -> String {
    args.iter()
        .map(render_value)
        .collect::<Vec<_>>()
        .join(", ")
}
