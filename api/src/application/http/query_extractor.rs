use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use std::collections::HashMap;

use super::query_params::ViewQuery;

/// Extractor for the dashboard view settings carried on a request
///
/// Usage:
/// ```rust
/// async fn handler(
///     ViewQueryExtractor(view_query): ViewQueryExtractor,
/// ) -> Result<Response, ApiError> {
///     // Use view_query.mode, view_query.filter, view_query.search, view_query.sort
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ViewQueryExtractor(pub ViewQuery);

impl<S> FromRequestParts<S> for ViewQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(ViewQueryExtractor(ViewQuery::from_query_map(&query_map)))
    }
}
