//! Unit tests for log.rs
//!
//! Tests LogSeverity, LogEntry formatting and DefaultLogger.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, format_entry, format_timestamp};
use std::time::{Duration, SystemTime};

fn entry(severity: LogSeverity, message: &str) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "xref::RenderTarget".to_string(),
        message: message.to_string(),
        file: None,
        line: None,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5, "{:?}", severity);
    }
    assert_eq!(LogSeverity::Warn.label(), "WARN ");
}

// ============================================================================
// FORMATTING TESTS
// ============================================================================

#[test]
fn test_format_entry_without_location() {
    let line = format_entry(&entry(LogSeverity::Info, "internal RT 960x540"));
    assert!(line.contains("[INFO ]"));
    assert!(line.contains("[xref::RenderTarget]"));
    assert!(line.ends_with("internal RT 960x540"));
}

#[test]
fn test_format_entry_with_location() {
    let mut e = entry(LogSeverity::Error, "size 9000 exceeds hardware limits");
    e.file = Some("draw.rs");
    e.line = Some(42);

    let line = format_entry(&e);
    assert!(line.contains("[ERROR]"));
    assert!(line.ends_with("(draw.rs:42)"));
}

#[test]
fn test_format_entry_ignores_partial_location() {
    let mut e = entry(LogSeverity::Warn, "no line");
    e.file = Some("draw.rs");

    let line = format_entry(&e);
    assert!(!line.contains("draw.rs"));
}

#[test]
fn test_format_timestamp_shape() {
    let stamp = format_timestamp(SystemTime::now());
    // YYYY-MM-DD HH:MM:SS.mmm
    assert_eq!(stamp.len(), 23);
    assert_eq!(&stamp[4..5], "-");
    assert_eq!(&stamp[10..11], " ");
    assert_eq!(&stamp[19..20], ".");
}

#[test]
fn test_log_entry_timestamps_are_ordered() {
    let first = entry(LogSeverity::Info, "first");
    std::thread::sleep(Duration::from_millis(5));
    let second = entry(LogSeverity::Info, "second");
    assert!(second.timestamp > first.timestamp);
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        logger.log(&entry(severity, "message"));
    }
}

#[test]
fn test_default_logger_with_file_line() {
    let mut e = entry(LogSeverity::Error, "Critical GL error");
    e.file = Some("gl_context.rs");
    e.line = Some(123);
    DefaultLogger.log(&e);
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
}
