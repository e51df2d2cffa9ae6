//! Per-request render state

use super::{params::QueryParams, request::SortRequest};

/// State for a single render pass of a single request.
///
/// Built fresh per request and threaded by `&mut` through anchor rendering,
/// then by `&` into auto-sort. Never shared between requests.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    path: String,
    params: QueryParams,
    request: SortRequest,
    field: String,
    valid_fields: Option<Vec<String>>,
}

impl RenderContext {
    /// Context for `path` with already-parsed query parameters.
    pub fn new(path: impl Into<String>, params: QueryParams) -> Self {
        let request = SortRequest::from_params(&params);
        let field = request.resolved_field();
        Self {
            path: path.into(),
            params,
            request,
            field,
            valid_fields: None,
        }
    }

    /// Context straight from a request URI's path and raw query.
    pub fn from_uri_parts(path: &str, query: Option<&str>) -> Self {
        Self::new(path, query.map(QueryParams::parse).unwrap_or_default())
    }

    /// Request path used as the base of generated links.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Incoming query parameters.
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Sort key and direction requested by the URL.
    pub fn sort_request(&self) -> &SortRequest {
        &self.request
    }

    /// Resolved order field for auto-sort (`-` prefix means descending).
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Override the order field, e.g. when a handler picks a default.
    pub fn set_field(&mut self, field: impl Into<String>) {
        self.field = field.into();
    }

    /// Append every comma-separated component of `field` to the allow-list,
    /// creating the list on first use. Duplicates are kept.
    pub fn register_fields(&mut self, field: &str) {
        self.valid_fields
            .get_or_insert_with(Vec::new)
            .extend(field.split(',').map(str::to_string));
    }

    /// Fields registered so far, empty before any anchor renders.
    pub fn allow_list(&self) -> &[String] {
        self.valid_fields.as_deref().unwrap_or(&[])
    }

}
