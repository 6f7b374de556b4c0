//! Domain types for event instrumentation
//!
//! - Value objects captured per invocation (CallRecord, EventPayload)
//! - Explicit request state handed to the wrappers (RequestContext)

mod context;
mod record;

pub use context::RequestContext;
pub use record::{CallRecord, EventPayload, RESERVED_KEYS};
