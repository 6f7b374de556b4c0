//! # Dashly Core Library
//!
//! Event instrumentation for Dashly: structured call records, the event
//! logger contract, and the wrappers that capture invocation metadata.
//!
//! ## Modules
//!
//! - `domain` - Core types (CallRecord, EventPayload, RequestContext)
//! - `logger` - The EventLogger trait and bundled backends
//! - `config` - The `event_logger` configuration slot and its resolver
//! - `instrument` - Higher-order wrappers recording call metadata
//! - `error` - Configuration errors

pub mod config;
pub mod domain;
pub mod error;
pub mod instrument;
pub mod logger;

// Re-export commonly used types
pub use config::{resolve_event_logger, EventLoggerSetting, LoggerFactory};
pub use domain::*;
pub use error::ConfigError;
pub use instrument::{wrap, wrap_with_payload, ExtraPayload};
pub use logger::{EventLogger, LoggerHandle, TracingEventLogger};
