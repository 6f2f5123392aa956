//! Shared test utilities and fixtures for Tintlog integration tests.

pub use tintlog::{
    Color, Logger, LoggerError, LoggerSettings, LoggingConfig, MemoryConsole, MethodConfig,
    SinkKind,
};

/// Build a logger wired to a memory console, returning both so the test
/// can drive the logger and inspect what it emitted.
pub fn capture_logger(settings: LoggerSettings) -> (Logger, MemoryConsole) {
    let console = MemoryConsole::new();
    let logger = Logger::with_console(settings, Box::new(console.clone()));
    (logger, console)
}

/// The five-method configuration exercised across the integration tests.
pub fn standard_config() -> LoggingConfig {
    LoggingConfig::new()
        .with_method(
            "log",
            MethodConfig::new().with_stamp(true).with_color(Color::White),
        )
        .with_method(
            "warn",
            MethodConfig::new()
                .with_stamp(true)
                .with_prefix("WARN:")
                .with_color(Color::Yellow),
        )
        .with_method(
            "error",
            MethodConfig::new()
                .with_stamp(true)
                .with_throws(true)
                .with_prefix("ERROR:")
                .with_color(Color::Red),
        )
        .with_method(
            "debug",
            MethodConfig::new()
                .with_stamp(true)
                .with_verbose(true)
                .with_prefix("DEBUG:")
                .with_color(Color::Cyan),
        )
        .with_method(
            "success",
            MethodConfig::new()
                .with_stamp(true)
                .with_prefix("SUCCESS:")
                .with_color(Color::Green),
        )
}

/// Force ANSI output on so escape-sequence assertions hold when the test
/// run is not attached to a terminal.
pub fn force_colors() {
    colored::control::set_override(true);
}

/// Subscriber for tests that want to see the library's own tracing
/// output under `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
