//! Explicit request state for instrumentation
//!
//! The host framework owns per-request state (path, matched route,
//! query string). The wrappers take it as an explicit argument instead
//! of reading task-local storage, so instrumented functions stay
//! testable outside a running server.

use url::form_urlencoded;

/// Per-request state the host framework exposes to instrumentation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    path: String,
    url_rule: Option<String>,
    query: Vec<(String, String)>,
}

impl RequestContext {
    /// Context for a bare path with no matched rule or query.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url_rule: None,
            query: Vec::new(),
        }
    }

    /// Parse a request target like `/dashboard/1/?myparam=foo` into
    /// path and query parameters.
    pub fn from_target(target: &str) -> Self {
        match target.split_once('?') {
            Some((path, query)) => {
                let query = form_urlencoded::parse(query.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect();
                Self {
                    path: path.to_string(),
                    url_rule: None,
                    query,
                }
            }
            None => Self::new(target),
        }
    }

    /// Set the route pattern the router matched, spelled exactly as the
    /// router spells it (e.g. `/dashboard/{dashboard_id_or_slug}/`).
    pub fn with_url_rule(mut self, rule: impl Into<String>) -> Self {
        self.url_rule = Some(rule.into());
        self
    }

    /// Append one query parameter.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn url_rule(&self) -> Option<&str> {
        self.url_rule.as_deref()
    }

    /// Query parameters in request order.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }
}
