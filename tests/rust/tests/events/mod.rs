//! Event instrumentation integration tests
//!
//! Covers resolution of the `event_logger` configuration slot and the
//! instrumented-call wrappers.

mod resolver;
