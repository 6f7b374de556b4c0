//! Configuration errors

use thiserror::Error;

/// Errors raised while resolving the `event_logger` configuration slot.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured value satisfies no accepted shape: not an
    /// instance, not a factory, and not the name of a bundled backend.
    #[error(
        "event_logger must be an EventLogger instance, a logger factory, \
         or a known backend name; got `{kind}`"
    )]
    NotAnEventLogger { kind: String },
}
