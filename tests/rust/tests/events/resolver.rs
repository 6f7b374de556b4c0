//! Tests for event logger resolution
//!
//! Validates the three accepted configuration shapes: instance
//! (identity-preserving), factory (deprecated, warns once), and backend
//! name (unknown names rejected at resolution time).

use std::sync::Arc;

use dashly_core::{resolve_event_logger, ConfigError, EventLogger, EventLoggerSetting};
use tests::mocks::{CaptureLogger, WarningCounter};

#[test]
fn instance_resolves_to_identical_object() {
    let logger: Arc<dyn EventLogger> = Arc::new(CaptureLogger::new());

    let (warnings, resolved) = WarningCounter::count_warnings(|| {
        resolve_event_logger(EventLoggerSetting::Instance(logger.clone()))
    });
    let handle = resolved.unwrap();

    // Same allocation, not just an equivalent logger.
    assert!(Arc::ptr_eq(handle.backend(), &logger));
    assert_eq!(warnings, 0);
}

#[test]
fn factory_warns_once_and_instantiates() {
    let (warnings, resolved) = WarningCounter::count_warnings(|| {
        resolve_event_logger(EventLoggerSetting::factory(CaptureLogger::new))
    });
    let handle = resolved.unwrap();

    assert_eq!(warnings, 1);
    assert_eq!(handle.backend().name(), "capture");
}

#[test]
fn factory_built_logger_is_usable() {
    let capture = CaptureLogger::new();
    let probe = capture.clone();

    let (warnings, resolved) = WarningCounter::count_warnings(|| {
        resolve_event_logger(EventLoggerSetting::factory(move || capture.clone()))
    });
    let handle = resolved.unwrap();
    assert_eq!(warnings, 1);

    handle.log(dashly_core::EventPayload::single(
        dashly_core::CallRecord::new().with("path", "/"),
        3,
    ));
    assert_eq!(probe.len(), 1);
}

#[test]
fn unknown_backend_name_fails_resolution() {
    let err = resolve_event_logger(EventLoggerSetting::named("db")).unwrap_err();

    assert!(matches!(err, ConfigError::NotAnEventLogger { .. }));
    assert!(err.to_string().contains("db"));
}

#[test]
fn default_setting_uses_tracing_backend() {
    let handle = resolve_event_logger(EventLoggerSetting::default()).unwrap();
    assert_eq!(handle.backend().name(), "tracing");
}
