use axum::extract::{Path, RawQuery, State};
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use super::{path_segment, proxy_response};
use crate::state::AppState;

/// GET /api/admin/tenants
pub async fn list(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    proxy_response(state.upstream.get("/admin/tenants", query.as_deref()).await)
}

/// GET /api/admin/tenants/:id
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let path = format!("/admin/tenants/{}", path_segment(&id));
    proxy_response(state.upstream.get(&path, None).await)
}

/// POST /api/admin/tenants
pub async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    proxy_response(state.upstream.post("/admin/tenants", Some(&body)).await)
}

/// PUT /api/admin/tenants/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let path = format!("/admin/tenants/{}", path_segment(&id));
    proxy_response(state.upstream.put(&path, Some(&body)).await)
}

/// DELETE /api/admin/tenants/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let path = format!("/admin/tenants/{}", path_segment(&id));
    proxy_response(state.upstream.delete(&path).await)
}
