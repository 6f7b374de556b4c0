//! Per-invocation call records and the payload handed to loggers

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Record keys owned by the instrumentation wrapper. Caller-supplied
/// arguments and extra-payload fields never displace these.
pub const RESERVED_KEYS: &[&str] = &["path", "url_rule", "object_ref"];

/// Structured metadata captured for one instrumented invocation.
///
/// A thin wrapper over an ordered JSON map. Keys keep insertion order,
/// so emitted payloads are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallRecord(Map<String, Value>);

impl CallRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair. An existing key keeps its position and
    /// takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Merge another record into this one. Last write wins on key
    /// collision.
    pub fn merge(&mut self, other: CallRecord) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    /// Merge another record, skipping [`RESERVED_KEYS`].
    pub fn merge_unreserved(&mut self, other: CallRecord) {
        for (key, value) in other.0 {
            if !RESERVED_KEYS.contains(&key.as_str()) {
                self.0.insert(key, value);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for CallRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for CallRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for CallRecord {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Payload handed to [`EventLogger::log`](crate::logger::EventLogger::log)
/// after an instrumented call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    /// Captured records. The wrappers emit exactly one element per
    /// invocation; batching is a backend concern.
    pub records: Vec<CallRecord>,
    /// Wall-clock duration of the wrapped call in milliseconds.
    pub duration_ms: u64,
}

impl EventPayload {
    /// Payload for a single invocation.
    pub fn single(record: CallRecord, duration_ms: u64) -> Self {
        Self {
            records: vec![record],
            duration_ms,
        }
    }
}
