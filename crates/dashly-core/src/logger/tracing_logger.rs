//! Event logger backed by the `tracing` pipeline

use tracing::{info, warn};

use super::EventLogger;
use crate::domain::EventPayload;

/// Forwards call records to the process-wide `tracing` subscriber as
/// structured INFO events under the `dashly::events` target.
///
/// This is the default backend: anything consuming tracing output
/// (console, rolling files, OTLP forwarders) receives event payloads
/// without further wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventLogger;

impl TracingEventLogger {
    pub fn new() -> Self {
        Self
    }
}

impl EventLogger for TracingEventLogger {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn log(&self, payload: EventPayload) {
        match serde_json::to_string(&payload.records) {
            Ok(records) => info!(
                target: "dashly::events",
                duration_ms = payload.duration_ms,
                records = %records,
                "event"
            ),
            Err(e) => warn!(
                target: "dashly::events",
                "failed to serialize event records: {e}"
            ),
        }
    }
}
