//! # Dashly Gateway
//!
//! Host-framework adapter for Dashly's event instrumentation:
//! - Request context extraction (axum request state → explicit
//!   `RequestContext`)
//! - Per-request event-logging middleware
//! - Request correlation trace IDs
//! - Tracing subscriber initialization

pub mod context;
pub mod logging;
pub mod middleware;
pub mod trace;

pub use context::{context_from_parts, request_context, ExtractRequestContext};
pub use logging::{init_tracing, init_tracing_with_file};
pub use middleware::event_logging_middleware;
pub use trace::{next_trace_id, RequestTrace};
