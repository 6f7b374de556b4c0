//! HTTP request instrumentation middleware
//!
//! Instruments a whole request the way the core wrappers instrument a
//! function: build one call record from the request, time the handler,
//! emit one payload through the resolved logger.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

use dashly_core::{CallRecord, EventPayload, LoggerHandle};

use crate::context::request_context;
use crate::trace::RequestTrace;

/// Mount with `axum::middleware::from_fn_with_state(handle, event_logging_middleware)`
/// as a layer on the router, after routes are declared, so the matched
/// route pattern is available as `url_rule`.
///
/// Each request produces one record: query parameters, `method`,
/// `path`, `url_rule` (omitted when no route matched), and the
/// response `status`, with elapsed `duration_ms`.
pub async fn event_logging_middleware(
    State(logger): State<LoggerHandle>,
    request: Request,
    next: Next,
) -> Response {
    let context = request_context(&request);
    let method = request.method().to_string();
    let trace = RequestTrace::new(&method, context.path());
    let span = trace.span();

    async move {
        let response = next.run(request).await;
        let status = response.status().as_u16();
        let duration_ms = trace.elapsed_ms();

        let mut record = CallRecord::new();
        for (key, value) in context.query() {
            record.insert(key.clone(), value.clone());
        }
        record.insert("method", method);
        record.insert("path", context.path());
        if let Some(rule) = context.url_rule() {
            record.insert("url_rule", rule);
        }
        record.insert("status", status);
        logger.log(EventPayload::single(record, duration_ms));

        trace.log_exit(status);
        response
    }
    .instrument(span)
    .await
}
