//! Integration tests for the logger pipeline
//!
//! These tests verify:
//! - Level filtering before any output or handler call
//! - Exact logfmt rendering and field order
//! - Handler fan-out order and failure isolation
//! - Option ordering
//! - Messages used as error values

mod common;

use common::{without_timestamp, RecordingHandler, SharedBuffer};
use logfmt_logger::prelude::*;
use logfmt_logger::MessageOption;
use parking_lot::Mutex;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn logger_with_buffer(level: Level) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let logger = Logger::builder()
        .min_level(level)
        .output_writer(buffer.clone())
        .build();
    (logger, buffer)
}

#[test]
fn test_debug_filtered_at_info() {
    let (logger, buffer) = logger_with_buffer(Level::Info);
    let recorder = Arc::new(RecordingHandler::default());
    logger.add_handler(Arc::clone(&recorder));

    let m = logger.debug("cache miss", [with_value("key", "user:1")]);

    assert_eq!(m.text(), "cache miss");
    assert!(buffer.contents().is_empty());
    assert!(recorder.messages.lock().is_empty());
}

#[test]
fn test_each_level_passes_threshold() {
    let (logger, buffer) = logger_with_buffer(Level::Warning);

    logger.debug("d", []);
    logger.info("i", []);
    logger.warn("w", []);
    logger.error("e", []);

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(without_timestamp(&lines[0]), "warn msg=w");
    assert_eq!(without_timestamp(&lines[1]), "error msg=e");
}

#[test]
fn test_full_field_order() {
    let (logger, buffer) = logger_with_buffer(Level::Info);
    let ctx = LogContext::new().with_value("c", 3);
    let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");

    logger.error_ctx(
        &ctx,
        "lookup failed",
        [
            with_error(cause),
            with_value("a", 1),
            with_value("b", 2),
            with_code("E1"),
            with_status_code(404),
        ],
    );

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(
        without_timestamp(&lines[0]),
        "error msg=\"lookup failed\" error=\"not found\" a=1 b=2 c=3 code=E1 status=404"
    );
}

#[test]
fn test_timestamp_prefix_shape() {
    let (logger, buffer) = logger_with_buffer(Level::Info);
    logger.info("tick", []);

    let line = buffer.lines().remove(0);
    let (ts, _) = line.split_once(' ').unwrap();
    // 2025-01-08T10:30:45.123456+0000
    assert_eq!(ts.len(), 31);
    assert_eq!(&ts[10..11], "T");
    assert_eq!(&ts[19..20], ".");
    assert!(matches!(&ts[26..27], "+" | "-"));
    assert!(chrono::DateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.6f%z").is_ok());
}

#[test]
fn test_quoting_rules_end_to_end() {
    let (logger, buffer) = logger_with_buffer(Level::Info);
    logger.info(
        "quoting",
        [
            with_value("plain", "hello"),
            with_value("spaced", "hello world"),
            with_value("quoted", "a=\"b\""),
            with_value("path", "C:\\path"),
        ],
    );

    let line = buffer.lines().remove(0);
    assert!(line.ends_with(
        " plain=hello spaced=\"hello world\" quoted=\"a=\\\"b\\\"\" path=C:\\path"
    ));
}

#[test]
fn test_duplicate_parameters_all_emitted() {
    let (logger, buffer) = logger_with_buffer(Level::Info);
    logger.info("dup", [with_value("k", 1), with_value("k", 2)]);

    assert!(buffer.contents().contains(" msg=dup k=1 k=2"));
}

#[test]
fn test_handler_fan_out_with_failure() {
    let (logger, _buffer) = logger_with_buffer(Level::Info);
    let calls = Arc::new(Mutex::new(Vec::new()));

    for (idx, fails) in [(1, false), (2, true), (3, false)] {
        let calls = Arc::clone(&calls);
        logger.add_handler(handler_fn(format!("h{}", idx), move |_m| {
            calls.lock().push(idx);
            if fails {
                Err(LoggerError::handler(format!("h{}", idx), "refused"))
            } else {
                Ok(())
            }
        }));
    }

    let m = logger.warn("fan out", [with_value("n", 1)]);
    assert_eq!(m.text(), "fan out");
    assert_eq!(m.parameters().len(), 1);
    assert_eq!(*calls.lock(), vec![1, 2, 3]);

    logger.info("again", []);
    assert_eq!(*calls.lock(), vec![1, 2, 3, 1, 2, 3]);
    assert_eq!(logger.metrics().handler_failures(), 2);
}

#[test]
fn test_handler_sees_complete_message() {
    let (logger, _buffer) = logger_with_buffer(Level::Info);
    let recorder = Arc::new(RecordingHandler::default());
    logger.add_handler(Arc::clone(&recorder));

    let ctx = LogContext::new().with_value("tenant", "acme");
    logger.info_ctx(&ctx, "provisioned", [with_value("seats", 25), with_code("OK")]);

    let messages = recorder.messages.lock();
    assert_eq!(messages.len(), 1);
    let m = &messages[0];
    assert_eq!(m.level(), Level::Info);
    assert_eq!(m.parameters()[0].name, "seats");
    assert_eq!(m.context()[0].name, "tenant");
    assert_eq!(m.code(), Some("OK"));
}

#[test]
fn test_options_apply_left_to_right() {
    let (logger, _buffer) = logger_with_buffer(Level::Info);
    let m = logger.error("conflict", [with_code("FIRST"), with_code("LAST")]);
    assert_eq!(m.code(), Some("LAST"));

    let m = logger.error("status", [with_status_code(500), with_status_code(409)]);
    assert_eq!(m.status_code(), Some(409));
}

#[test]
fn test_custom_option_reads_previous_state() {
    let (logger, buffer) = logger_with_buffer(Level::Info);
    let status_from_code = MessageOption::new(|m: &mut Message| {
        if m.code() == Some("NOT_FOUND") {
            m.set_status_code(404);
        }
    });

    let m = logger.warn("missing", [with_code("NOT_FOUND"), status_from_code]);

    assert_eq!(m.status_code(), Some(404));
    assert!(buffer.contents().contains(" code=NOT_FOUND status=404"));
}

#[test]
fn test_context_attached_after_explicit_options() {
    let (logger, buffer) = logger_with_buffer(Level::Debug);
    let ctx = LogContext::new().with_value("request_id", "r-1");

    logger.debug_ctx(&ctx, "step", [with_value("n", 1), with_context(&ctx)]);

    assert!(buffer
        .contents()
        .contains(" msg=step n=1 request_id=r-1 request_id=r-1"));
}

#[test]
fn test_error_ctx_err_equivalence() {
    let (logger, buffer) = logger_with_buffer(Level::Info);
    let ctx = LogContext::new().with_value("op", "sync");

    logger.error_ctx_err(
        &ctx,
        std::io::Error::new(std::io::ErrorKind::Other, "remote closed"),
        "sync failed",
        [with_value("attempt", 3)],
    );
    logger.error(
        "sync failed",
        [
            with_value("attempt", 3),
            with_context(&ctx),
            with_error(std::io::Error::new(std::io::ErrorKind::Other, "remote closed")),
        ],
    );

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(without_timestamp(&lines[0]), without_timestamp(&lines[1]));
}

#[test]
fn test_message_as_error_value() {
    fn connect(logger: &Logger) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        Err(logger
            .error("cannot connect", [with_error(cause), with_value("port", 5432)])
            .into())
    }

    let (logger, _buffer) = logger_with_buffer(Level::Info);
    let err = connect(&logger).unwrap_err();

    assert_eq!(err.to_string(), "cannot connect");
    assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("refused"));

    let message = err.downcast_ref::<Message>().expect("a Message");
    assert_eq!(message.parameters()[0].name, "port");
}

#[test]
fn test_logged_message_as_cause() {
    let (logger, buffer) = logger_with_buffer(Level::Info);
    let inner = logger.warn("token expired", [with_value("user", "bob")]);
    logger.error("request rejected", [with_error(inner)]);

    let lines = buffer.lines();
    assert!(lines[1].ends_with("msg=\"request rejected\" error=\"token expired\""));
}

#[test]
fn test_file_and_json_handlers() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");
    let json_file = temp_dir.path().join("app.jsonl");

    let logger = Logger::builder()
        .discard_output()
        .handler(FileHandler::new(&log_file).expect("file handler"))
        .handler(JsonHandler::create(&json_file).expect("json handler"))
        .build();

    logger.info("job finished", [with_value("duration", std::time::Duration::from_millis(250))]);
    logger.debug("filtered", []);

    let text = fs::read_to_string(&log_file).expect("read log file");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" info msg=\"job finished\" duration=250ms"));

    let json_text = fs::read_to_string(&json_file).expect("read json file");
    let parsed: serde_json::Value = serde_json::from_str(json_text.trim_end()).expect("valid json");
    assert_eq!(parsed["msg"], "job finished");
    assert_eq!(parsed["duration"], "250ms");
}

#[test]
fn test_logger_from_json_config() {
    let config = LoggerConfig::from_json(r#"{"min_level": "ERROR", "output": "discard"}"#)
        .expect("valid config");
    let logger = Logger::from_config(&config);
    let recorder = Arc::new(RecordingHandler::default());
    logger.add_handler(Arc::clone(&recorder));

    logger.warn("below threshold", []);
    logger.error("at threshold", []);

    assert_eq!(recorder.texts(), vec!["at threshold".to_string()]);
}
