use axum::extract::State;
use axum::response::Response;

use super::proxy_response;
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn get_stats(State(state): State<AppState>) -> Response {
    proxy_response(state.upstream.get("/admin/stats", None).await)
}
