use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use contracts::auth::{
    LoginRequest, LoginResponse, UserInfo, VerifyAdminRequest, VerifyAdminResponse,
};
use contracts::error::ErrorBody;

use crate::state::AppState;
use crate::system::auth::{extractor::CurrentAdmin, jwt};

type AuthError = (StatusCode, Json<ErrorBody>);

/// Login handler
///
/// Checks the locally configured admin credentials first, then falls back to
/// the upstream /admin/verify endpoint.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let admin = &state.config.admin;

    let verified = if request.email == admin.email && request.password == admin.password {
        Some(("admin".to_string(), admin.email.clone(), "Admin".to_string()))
    } else {
        verify_against_upstream(&state, &request).await
    };

    let (id, email, name) = verified.ok_or_else(|| {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody::new("Invalid credentials")),
        )
    })?;

    let access_token =
        jwt::generate_access_token(&state.jwt_secret, &id, &email, &name).map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("Internal server error")),
            )
        })?;

    Ok(Json(LoginResponse {
        access_token,
        user: UserInfo { email, name },
    }))
}

/// Get current session handler (protected by middleware)
pub async fn me(CurrentAdmin(claims): CurrentAdmin) -> Json<UserInfo> {
    Json(UserInfo {
        email: claims.email,
        name: claims.name,
    })
}

async fn verify_against_upstream(
    state: &AppState,
    request: &LoginRequest,
) -> Option<(String, String, String)> {
    let body = serde_json::to_value(VerifyAdminRequest {
        email: request.email.clone(),
        password: request.password.clone(),
    })
    .ok()?;

    let response = match state.upstream.post("/admin/verify", Some(&body)).await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("admin verify error: {e}");
            return None;
        }
    };

    if !response.status.is_success() {
        return None;
    }

    let verify: VerifyAdminResponse = serde_json::from_value(response.body?).ok()?;
    if !verify.valid {
        return None;
    }

    let user = verify.user?;
    Some((
        user.id.unwrap_or_else(|| "admin".to_string()),
        user.email,
        user.name.unwrap_or_else(|| "Admin".to_string()),
    ))
}
