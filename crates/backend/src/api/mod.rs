pub mod identities;
pub mod stats;
pub mod tenants;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::error::ErrorBody;

use crate::shared::upstream::{UpstreamError, UpstreamResponse};

/// Convert an upstream result into the response the proxy returns.
///
/// Upstream status and JSON body pass through verbatim, including error
/// bodies; transport-level failures collapse into a generic 500.
pub(crate) fn proxy_response(result: Result<UpstreamResponse, UpstreamError>) -> Response {
    match result {
        Ok(upstream) => match upstream.body {
            Some(body) => (upstream.status, Json(body)).into_response(),
            None => upstream.status.into_response(),
        },
        Err(e) => {
            tracing::error!("upstream API error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("Internal server error")),
            )
                .into_response()
        }
    }
}

/// Escape a caller-supplied id for use in an upstream path segment
pub(crate) fn path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
