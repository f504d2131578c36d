use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use contracts::error::ErrorBody;

use crate::state::AppState;

/// Middleware that requires a valid session token.
///
/// Gates every proxy route: without an established session the request is
/// refused with 401 before anything reaches the upstream API.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(unauthorized)?;

    let claims =
        super::jwt::validate_token(&state.jwt_secret, token).map_err(|_| unauthorized())?;

    // Make claims available to handlers through the CurrentAdmin extractor
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorBody::new("Unauthorized")),
    )
        .into_response()
}
