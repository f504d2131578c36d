use axum::extract::{Path, RawQuery, State};
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use super::{path_segment, proxy_response};
use crate::state::AppState;

/// GET /api/admin/identities
pub async fn list(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    proxy_response(
        state
            .upstream
            .get("/admin/identities", query.as_deref())
            .await,
    )
}

/// GET /api/admin/identities/:id
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let path = format!("/admin/identities/{}", path_segment(&id));
    proxy_response(state.upstream.get(&path, None).await)
}

/// POST /api/admin/identities
pub async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    proxy_response(state.upstream.post("/admin/identities", Some(&body)).await)
}

/// PUT /api/admin/identities/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let path = format!("/admin/identities/{}", path_segment(&id));
    proxy_response(state.upstream.put(&path, Some(&body)).await)
}

/// DELETE /api/admin/identities/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let path = format!("/admin/identities/{}", path_segment(&id));
    proxy_response(state.upstream.delete(&path).await)
}

/// POST /api/admin/identities/:id/unlock
pub async fn unlock(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let path = format!("/admin/identities/{}/unlock", path_segment(&id));
    proxy_response(state.upstream.post(&path, None).await)
}

/// POST /api/admin/identities/:id/password
pub async fn set_password(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let path = format!("/admin/identities/{}/password", path_segment(&id));
    proxy_response(state.upstream.post(&path, Some(&body)).await)
}
