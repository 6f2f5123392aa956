//! Gating, sink resolution, and output assembly

use pretty_assertions::assert_eq;
use serde_json::json;
use tests::*;

#[test]
fn verbose_method_is_silent_without_verbose_option() {
    let (mut logger, console) = capture_logger(LoggerSettings::default());
    logger.enable_logging(standard_config()).unwrap();

    logger.invoke("debug", &[json!("x")]).unwrap();
    assert!(console.is_empty());
}

#[test]
fn verbose_method_emits_exactly_once_with_verbose_option() {
    let (mut logger, console) = capture_logger(LoggerSettings::new().with_verbose(true));
    logger.enable_logging(standard_config()).unwrap();

    logger.invoke("debug", &[json!("x")]).unwrap();
    assert_eq!(console.len(), 1);
    assert_eq!(console.records()[0].sink, SinkKind::Debug);
}

#[test]
fn quiet_gates_every_method() {
    let settings = LoggerSettings::new().with_verbose(true).with_quiet(true);
    let (mut logger, console) = capture_logger(settings);
    logger.enable_logging(standard_config()).unwrap();

    logger.invoke("log", &[json!("a")]).unwrap();
    logger.invoke("warn", &[json!("b")]).unwrap();
    logger.invoke("success", &[json!("c")]).unwrap();
    assert!(console.is_empty());
}

#[test]
fn each_method_routes_to_its_named_sink() {
    let settings = LoggerSettings::new()
        .with_verbose(true)
        .with_allow_force_no_throw(true)
        .with_force(true);
    let (mut logger, console) = capture_logger(settings);
    logger.enable_logging(standard_config()).unwrap();

    for name in ["log", "warn", "error", "debug", "success"] {
        logger.invoke(name, &[json!(name)]).unwrap();
    }

    let sinks: Vec<SinkKind> = console.records().iter().map(|r| r.sink).collect();
    assert_eq!(
        sinks,
        vec![
            SinkKind::Log,
            SinkKind::Warn,
            SinkKind::Error,
            SinkKind::Debug,
            SinkKind::Generic,
        ]
    );
}

#[test]
fn warn_end_to_end_orders_stamp_prefix_args() {
    force_colors();
    let (mut logger, console) = capture_logger(LoggerSettings::new().with_verbose(true));
    logger
        .enable_logging(
            LoggingConfig::new().with_method(
                "warn",
                MethodConfig::new()
                    .with_stamp(true)
                    .with_prefix("WARN:")
                    .with_color(Color::Yellow),
            ),
        )
        .unwrap();

    logger.invoke("warn", &[json!("disk low")]).unwrap();

    let records = console.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].sink, SinkKind::Warn);

    let parts = &records[0].parts;
    assert_eq!(parts.len(), 3);

    // Colored "[M/D/YYYY h:mm:ss AM/PM]" token; structure only, never
    // the exact text.
    assert!(parts[0].starts_with("\u{1b}[33m["));
    assert!(parts[0].ends_with("]\u{1b}[0m"));
    assert!(parts[0].contains('/') && parts[0].contains(':'));

    assert_eq!(parts[1], Color::Yellow.paint("WARN:"));
    assert_eq!(parts[2], Color::Yellow.paint("disk low"));
}

#[test]
fn uncolored_method_emits_plain_parts() {
    let (mut logger, console) = capture_logger(LoggerSettings::default());
    logger
        .enable_logging(
            LoggingConfig::new()
                .with_method("plain", MethodConfig::new().with_prefix("P:")),
        )
        .unwrap();

    logger.invoke("plain", &[json!("one"), json!(2)]).unwrap();
    assert_eq!(console.records()[0].parts, vec!["P:", "one", "2"]);
}

#[test]
fn non_string_arguments_render_as_json() {
    let (mut logger, console) = capture_logger(LoggerSettings::default());
    logger
        .enable_logging(LoggingConfig::new().with_method("log", MethodConfig::new()))
        .unwrap();

    logger
        .invoke("log", &[json!({"disk": "low"}), json!([1, 2]), json!(false)])
        .unwrap();

    assert_eq!(
        console.records()[0].parts,
        vec![r#"{"disk":"low"}"#, "[1,2]", "false"]
    );
}

#[test]
fn method_handle_dispatches_like_invoke() {
    let (mut logger, console) = capture_logger(LoggerSettings::default());
    logger.enable_logging(standard_config()).unwrap();

    let warn = logger.method("warn").unwrap();
    warn.call(&[json!("via handle")]).unwrap();
    warn.call(&[json!("again")]).unwrap();

    assert_eq!(console.len(), 2);
    assert!(logger.method("nope").is_none());
}
