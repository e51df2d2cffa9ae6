//! Per-request sort state extraction
//!
//! Every handler that renders a sortable listing takes a [`SortContext`].
//! It is built from the request URI alone, so each request starts with its
//! own empty allow-list.

use std::{convert::Infallible, future::ready};

use axum::{extract::FromRequestParts, http::request::Parts};
use tablesort_core::RenderContext;

/// Fresh [`RenderContext`] for the current request.
#[derive(Debug)]
pub struct SortContext(pub RenderContext);

impl<S> FromRequestParts<S> for SortContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let ctx = RenderContext::from_uri_parts(parts.uri.path(), parts.uri.query());
        tracing::trace!(
            path = ctx.path(),
            field = ctx.field(),
            "resolved sort request"
        );
        ready(Ok(SortContext(ctx)))
    }
}
