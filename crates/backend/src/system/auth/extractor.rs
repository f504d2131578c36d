use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use contracts::auth::TokenClaims;

/// Extractor for the authenticated admin session.
/// Usage in handlers: `async fn handler(CurrentAdmin(claims): CurrentAdmin) -> Response`
pub struct CurrentAdmin(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentAdmin
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Claims are inserted into request extensions by require_auth
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(CurrentAdmin)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
