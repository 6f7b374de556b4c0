//! Gateway integration tests
//!
//! Drives real routers through `tower::ServiceExt::oneshot` to cover
//! the instrumentation middleware, the context extractor, and tracing
//! initialization.

mod logging;
