//! Event logger contract and bundled backends
//!
//! Backends implement [`EventLogger`] without caring how records were
//! captured; the wrappers hand every backend the same
//! [`EventPayload`] shape. The resolved backend is shared process-wide
//! behind a [`LoggerHandle`].

mod tracing_logger;

pub use tracing_logger::TracingEventLogger;

use std::sync::Arc;

use crate::domain::{CallRecord, EventPayload, RequestContext};
use crate::instrument::{self, ExtraPayload};

/// Capability contract for event logging backends.
///
/// `log` may be called concurrently from any number of in-flight
/// requests; implementations must be append-only or otherwise
/// internally synchronized. Delivery failures stay inside the backend
/// (report via `tracing`): logging must never fail the wrapped call,
/// so `log` is infallible at this boundary.
pub trait EventLogger: Send + Sync + 'static {
    /// Backend name used in diagnostics and configuration.
    fn name(&self) -> &'static str;

    /// Record one payload of call metadata.
    fn log(&self, payload: EventPayload);
}

/// Cloneable handle to the resolved process-wide event logger.
///
/// Obtained from [`resolve_event_logger`](crate::config::resolve_event_logger).
/// Carries the instrumentation entry points; cloning shares the same
/// backend allocation.
#[derive(Clone)]
pub struct LoggerHandle {
    inner: Arc<dyn EventLogger>,
}

impl LoggerHandle {
    /// Wrap an already-shared backend.
    pub fn new(inner: Arc<dyn EventLogger>) -> Self {
        Self { inner }
    }

    /// Wrap an owned backend.
    pub fn from_logger(logger: impl EventLogger) -> Self {
        Self::new(Arc::new(logger))
    }

    /// Forward one payload to the backend.
    pub fn log(&self, payload: EventPayload) {
        self.inner.log(payload);
    }

    /// The shared backend. Exposed so callers can check identity or
    /// downcast-free metadata like [`EventLogger::name`].
    pub fn backend(&self) -> &Arc<dyn EventLogger> {
        &self.inner
    }

    /// Instrument `f`: the returned function takes the optional request
    /// context, positional arguments `A`, and named arguments to
    /// record, and emits one record per call. See
    /// [`instrument::wrap`].
    pub fn wrap<A, R, F>(
        &self,
        object_ref: impl Into<String>,
        f: F,
    ) -> impl Fn(Option<&RequestContext>, A, CallRecord) -> R
    where
        F: Fn(A, &CallRecord) -> R,
    {
        instrument::wrap(self.clone(), object_ref, f)
    }

    /// Like [`wrap`](Self::wrap), but `f` also receives an
    /// [`ExtraPayload`] handle for reporting fields discoverable only
    /// during its own execution. See [`instrument::wrap_with_payload`].
    pub fn wrap_with_payload<A, R, F>(
        &self,
        object_ref: impl Into<String>,
        f: F,
    ) -> impl Fn(Option<&RequestContext>, A, CallRecord) -> R
    where
        F: Fn(A, &CallRecord, &ExtraPayload) -> R,
    {
        instrument::wrap_with_payload(self.clone(), object_ref, f)
    }
}

impl std::fmt::Debug for LoggerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerHandle")
            .field("backend", &self.inner.name())
            .finish()
    }
}
