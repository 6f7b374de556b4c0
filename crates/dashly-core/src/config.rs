//! The `event_logger` configuration slot
//!
//! The host application configures its event logger once at startup and
//! resolves the value before serving traffic, so a bad value fails fast
//! instead of surfacing on the first instrumented call.

use std::sync::Arc;

use tracing::warn;

use crate::error::ConfigError;
use crate::logger::{EventLogger, LoggerHandle, TracingEventLogger};

/// Factory shape of the configuration value: a no-argument constructor
/// the resolver instantiates. Deprecated in favor of passing an
/// instance.
pub type LoggerFactory = Box<dyn Fn() -> Arc<dyn EventLogger> + Send + Sync>;

/// Value accepted by the `event_logger` configuration slot.
pub enum EventLoggerSetting {
    /// A ready logger instance, used as-is.
    Instance(Arc<dyn EventLogger>),
    /// Deprecated: a factory instantiated with no arguments during
    /// resolution. Configure an [`Instance`](Self::Instance) instead.
    Factory(LoggerFactory),
    /// A backend selected by name, as written in config files.
    Named(String),
}

impl EventLoggerSetting {
    /// Configure an owned logger instance.
    pub fn instance(logger: impl EventLogger) -> Self {
        Self::Instance(Arc::new(logger))
    }

    /// Configure a logger constructor (deprecated shape).
    pub fn factory<L, F>(make: F) -> Self
    where
        L: EventLogger,
        F: Fn() -> L + Send + Sync + 'static,
    {
        Self::Factory(Box::new(move || Arc::new(make())))
    }

    /// Configure a backend by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl Default for EventLoggerSetting {
    fn default() -> Self {
        Self::Named("tracing".to_string())
    }
}

/// Resolve the configured value into a usable logger handle.
///
/// * An instance is returned unchanged: the handle shares the same
///   allocation, no copy.
/// * A factory still works, but resolution emits one deprecation
///   warning and instantiates it with no arguments.
/// * A name resolves against the bundled backends; an unknown name is
///   a configuration error.
pub fn resolve_event_logger(setting: EventLoggerSetting) -> Result<LoggerHandle, ConfigError> {
    match setting {
        EventLoggerSetting::Instance(inner) => Ok(LoggerHandle::new(inner)),
        EventLoggerSetting::Factory(make) => {
            let logger = make();
            warn!(
                backend = logger.name(),
                "configuring event_logger with a factory is deprecated; pass an instance instead"
            );
            Ok(LoggerHandle::new(logger))
        }
        EventLoggerSetting::Named(name) => match name.as_str() {
            "tracing" => Ok(LoggerHandle::from_logger(TracingEventLogger::new())),
            other => Err(ConfigError::NotAnEventLogger {
                kind: other.to_string(),
            }),
        },
    }
}
