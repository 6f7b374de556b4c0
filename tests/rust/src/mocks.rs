//! Mock logger implementations and tracing capture helpers

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use dashly_core::{EventLogger, EventPayload};

/// Event logger that captures payloads in memory for assertions.
///
/// Clones share the same buffer, so tests can keep a probe while the
/// logger itself is moved into a handle or router.
#[derive(Clone, Default)]
pub struct CaptureLogger {
    payloads: Arc<Mutex<Vec<EventPayload>>>,
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured payloads.
    pub fn payloads(&self) -> Vec<EventPayload> {
        self.payloads.lock().clone()
    }

    /// Most recent payload, if any.
    pub fn last(&self) -> Option<EventPayload> {
        self.payloads.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.payloads.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.lock().is_empty()
    }
}

impl EventLogger for CaptureLogger {
    fn name(&self) -> &'static str {
        "capture"
    }

    fn log(&self, payload: EventPayload) {
        self.payloads.lock().push(payload);
    }
}

/// Layer counting events at WARN or above, for asserting deprecation
/// diagnostics.
#[derive(Clone, Default)]
pub struct WarningCounter {
    warnings: Arc<AtomicUsize>,
}

impl WarningCounter {
    pub fn count(&self) -> usize {
        self.warnings.load(Ordering::SeqCst)
    }

    /// Run `f` with a thread-default subscriber counting warnings and
    /// return the number observed alongside `f`'s result.
    pub fn count_warnings<R>(f: impl FnOnce() -> R) -> (usize, R) {
        let counter = WarningCounter::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        let result = tracing::subscriber::with_default(subscriber, f);
        (counter.count(), result)
    }
}

impl<S: Subscriber> Layer<S> for WarningCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() <= Level::WARN {
            self.warnings.fetch_add(1, Ordering::SeqCst);
        }
    }
}
