//! # Tintlog
//!
//! Config-driven colorized console logging.
//!
//! A [`Logger`] starts with no logging methods at all. Feeding it a
//! [`LoggingConfig`] installs one named method per config entry, each with
//! its own prefix, color, timestamp, verbosity gate, and escalation
//! behavior. Calls are dispatched by name through [`Logger::invoke`].
//!
//! ## Modules
//!
//! - `color` - Color registry and the string colorizer
//! - `config` - Logging configuration (method name -> method options)
//! - `console` - Console sink abstraction and implementations
//! - `error` - Error types
//! - `logger` - The `Logger` registry and dispatch
//! - `settings` - Instance-wide settings

pub mod color;
pub mod config;
pub mod console;
pub mod error;
pub mod logger;
pub mod settings;

// Re-export commonly used types
pub use color::{colorize, Color};
pub use config::{LoggingConfig, MethodConfig};
pub use console::{Console, ConsoleRecord, MemoryConsole, SinkKind, StdConsole};
pub use error::LoggerError;
pub use logger::{Logger, MethodHandle};
pub use settings::LoggerSettings;
