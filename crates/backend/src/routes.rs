use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;
use crate::{api, system};

/// Configure all application routes
pub fn configure_routes(state: AppState, static_dir: &str) -> Router {
    // ========================================
    // PROXY ROUTES (session required)
    // ========================================
    let protected = Router::new()
        .route("/api/session/me", get(system::handlers::auth::me))
        .route("/api/admin/stats", get(api::stats::get_stats))
        // Identities
        .route(
            "/api/admin/identities",
            get(api::identities::list).post(api::identities::create),
        )
        .route(
            "/api/admin/identities/:id",
            get(api::identities::get_by_id)
                .put(api::identities::update)
                .delete(api::identities::delete),
        )
        .route(
            "/api/admin/identities/:id/unlock",
            post(api::identities::unlock),
        )
        .route(
            "/api/admin/identities/:id/password",
            post(api::identities::set_password),
        )
        // Tenants
        .route(
            "/api/admin/tenants",
            get(api::tenants::list).post(api::tenants::create),
        )
        .route(
            "/api/admin/tenants/:id",
            get(api::tenants::get_by_id)
                .put(api::tenants::update)
                .delete(api::tenants::delete),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            system::auth::middleware::require_auth,
        ));

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_origin(Any);

    // The compiled frontend is served from static_dir; unknown paths fall
    // back to index.html so a reloaded page lands in the wasm app again.
    let index = format!("{}/index.html", static_dir.trim_end_matches('/'));
    let serve_frontend = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/session/login", post(system::handlers::auth::login))
        .merge(protected)
        .fallback_service(serve_frontend)
        .layer(cors)
        .layer(middleware::from_fn(
            system::request_logger::request_logger,
        ))
        .with_state(state)
}
