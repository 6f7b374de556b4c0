//! Request context extraction
//!
//! Bridges axum request state into the explicit [`RequestContext`] the
//! core wrappers take, instead of reading ambient task-local state.
//! The matched route pattern comes from axum's `MatchedPath` extension,
//! present once the router has matched a route.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, MatchedPath};
use axum::http::request::Parts;
use axum::http::{Extensions, Request, Uri};

use dashly_core::RequestContext;

fn build_context(uri: &Uri, extensions: &Extensions) -> RequestContext {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let context = RequestContext::from_target(target);
    match extensions.get::<MatchedPath>() {
        Some(matched) => context.with_url_rule(matched.as_str()),
        None => context,
    }
}

/// Build a [`RequestContext`] from request parts: URI path, query
/// string, and the matched route pattern when the router has one.
pub fn context_from_parts(parts: &Parts) -> RequestContext {
    build_context(&parts.uri, &parts.extensions)
}

/// Same, from a full request. Used by the middleware before the
/// request is handed on.
pub fn request_context<B>(request: &Request<B>) -> RequestContext {
    build_context(request.uri(), request.extensions())
}

/// Extractor form, for handlers that invoke the wrappers themselves.
#[derive(Debug, Clone)]
pub struct ExtractRequestContext(pub RequestContext);

impl<S> FromRequestParts<S> for ExtractRequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(context_from_parts(parts)))
    }
}
