use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware logging every HTTP request: method, path, status, duration.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        tracing::error!("{} {} -> {} ({}ms)", method, path, status, duration.as_millis());
    } else {
        tracing::info!("{} {} -> {} ({}ms)", method, path, status, duration.as_millis());
    }

    response
}
