//! Request correlation
//!
//! Short trace IDs tie an instrumentation payload to the surrounding
//! log lines for one request.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use tracing::{info, info_span, Span};

/// Process-wide counter feeding trace ID generation.
static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a short trace ID for one request: 6 hex chars from the
/// request counter mixed with the current timestamp.
pub fn next_trace_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0);

    format!("{:06x}", counter.wrapping_add(timestamp) & 0xFF_FFFF)
}

/// Correlation data for a single request.
#[derive(Debug, Clone)]
pub struct RequestTrace {
    /// Unique trace ID (6 hex chars).
    pub trace_id: String,
    method: String,
    path: String,
    started_at: Instant,
}

impl RequestTrace {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            trace_id: next_trace_id(),
            method: method.to_string(),
            path: path.to_string(),
            started_at: Instant::now(),
        }
    }

    /// Span carrying the trace ID into all child log lines.
    pub fn span(&self) -> Span {
        info_span!(
            "request",
            trace_id = %self.trace_id,
            method = %self.method,
            path = %self.path,
        )
    }

    /// Elapsed time since the trace was created.
    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Single consolidated exit line.
    pub fn log_exit(&self, status: u16) {
        info!(
            trace_id = %self.trace_id,
            "← {} {} {} ({}ms)",
            status,
            self.method,
            self.path,
            self.elapsed_ms()
        );
    }
}
