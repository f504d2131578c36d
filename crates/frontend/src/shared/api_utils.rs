//! API utilities for frontend-backend communication

/// Get the base URL for API requests
///
/// The backend serves the compiled frontend, so API calls are same-origin.
///
/// # Returns
/// - Origin like "http://localhost:3000" or "https://admin.example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Extract a user-facing message from a failed response, preferring the
/// structured error body the proxy passes through.
pub async fn response_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    response
        .json::<contracts::error::ErrorBody>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| format!("Request failed: {}", status))
}
