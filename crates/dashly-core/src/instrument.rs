//! Higher-order wrappers that record call metadata
//!
//! Wrapping a function yields a new function with the same calling
//! convention plus two leading instrumentation inputs: the optional
//! request context and a [`CallRecord`] of named arguments. Positional
//! arguments travel through the generic `A` parameter and are not
//! recorded; named arguments are both passed to the target and merged
//! into the record.
//!
//! Each invocation is timed with a monotonic clock and produces exactly
//! one record. The record is emitted for every call that returns,
//! `Err` values included; a panicking target emits nothing and the
//! panic propagates.

use std::time::Instant;

use parking_lot::Mutex;

use crate::domain::{CallRecord, EventPayload, RequestContext};
use crate::logger::LoggerHandle;

/// Expands to the qualified name of an item in the enclosing module,
/// for use as the `object_ref` of a wrapped function.
#[macro_export]
macro_rules! object_ref {
    ($name:expr) => {
        concat!(module_path!(), "::", $name)
    };
}

/// Collects key/value pairs a wrapped function reports mid-call.
///
/// Handed to targets wrapped via [`wrap_with_payload`]. Fields merge
/// into the final record after the caller's named arguments; on key
/// collision the last write wins. Reserved keys are ignored when the
/// record is assembled.
#[derive(Debug, Default)]
pub struct ExtraPayload {
    fields: Mutex<CallRecord>,
}

impl ExtraPayload {
    fn new() -> Self {
        Self::default()
    }

    /// Merge one key/value pair into the record for this call.
    pub fn add(&self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.fields.lock().insert(key, value);
    }

    fn into_record(self) -> CallRecord {
        self.fields.into_inner()
    }
}

/// Wrap `f`, recording context metadata, named arguments, and
/// wall-clock duration around each call.
///
/// Also available as [`LoggerHandle::wrap`].
pub fn wrap<A, R, F>(
    logger: LoggerHandle,
    object_ref: impl Into<String>,
    f: F,
) -> impl Fn(Option<&RequestContext>, A, CallRecord) -> R
where
    F: Fn(A, &CallRecord) -> R,
{
    let object_ref = object_ref.into();
    move |context: Option<&RequestContext>, args: A, named: CallRecord| {
        let started = Instant::now();
        let result = f(args, &named);
        let duration_ms = elapsed_ms(started);

        let record = assemble_record(&object_ref, context, named, None);
        logger.log(EventPayload::single(record, duration_ms));
        result
    }
}

/// Like [`wrap`], but `f` also receives an [`ExtraPayload`] handle it
/// may use zero or more times during execution to report fields
/// discoverable only inside the call (e.g. a resolved identifier).
///
/// Also available as [`LoggerHandle::wrap_with_payload`].
pub fn wrap_with_payload<A, R, F>(
    logger: LoggerHandle,
    object_ref: impl Into<String>,
    f: F,
) -> impl Fn(Option<&RequestContext>, A, CallRecord) -> R
where
    F: Fn(A, &CallRecord, &ExtraPayload) -> R,
{
    let object_ref = object_ref.into();
    move |context: Option<&RequestContext>, args: A, named: CallRecord| {
        let extra = ExtraPayload::new();
        let started = Instant::now();
        let result = f(args, &named, &extra);
        let duration_ms = elapsed_ms(started);

        let record = assemble_record(&object_ref, context, named, Some(extra.into_record()));
        logger.log(EventPayload::single(record, duration_ms));
        result
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

/// Assemble the final record. Merge order: named arguments, extra
/// payload fields, query parameters, then `path`/`url_rule`/`object_ref`.
/// Later writes win, so wrapper-owned keys cannot be displaced by
/// arguments. Context-derived keys are omitted when no context is
/// supplied.
fn assemble_record(
    object_ref: &str,
    context: Option<&RequestContext>,
    named: CallRecord,
    extra: Option<CallRecord>,
) -> CallRecord {
    let mut record = CallRecord::new();
    record.merge_unreserved(named);
    if let Some(extra) = extra {
        record.merge_unreserved(extra);
    }
    if let Some(ctx) = context {
        for (key, value) in ctx.query() {
            record.insert(key.clone(), value.clone());
        }
        record.insert("path", ctx.path());
        if let Some(rule) = ctx.url_rule() {
            record.insert("url_rule", rule);
        }
    }
    record.insert("object_ref", object_ref);
    record
}
