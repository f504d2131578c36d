use axum::http::StatusCode;
use reqwest::Method;
use serde_json::Value;

/// Path prefix of the upstream admin API
const API_PREFIX: &str = "/api/v1";

/// HTTP client for the upstream HiveAuth API.
///
/// Every request carries the shared x-app-secret header. Responses are
/// returned with the upstream status code and JSON body untouched so the
/// proxy routes can pass them through verbatim.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    app_secret: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned a non-JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Upstream status code plus the body to forward (None for empty, e.g. 204).
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            app_secret: app_secret.into(),
        }
    }

    fn endpoint(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}{}{}?{}", self.base_url, API_PREFIX, path, q),
            _ => format!("{}{}{}", self.base_url, API_PREFIX, path),
        }
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        body: Option<&Value>,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.endpoint(path, query);
        let mut builder = self
            .http
            .request(method, &url)
            .header("Content-Type", "application/json")
            .header("x-app-secret", &self.app_secret);

        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() {
            None
        } else {
            Some(serde_json::from_slice(&bytes)?)
        };

        Ok(UpstreamResponse { status, body })
    }

    pub async fn get(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<UpstreamResponse, UpstreamError> {
        self.request(Method::GET, path, query, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<UpstreamResponse, UpstreamError> {
        self.request(Method::POST, path, None, body).await
    }

    pub async fn put(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<UpstreamResponse, UpstreamError> {
        self.request(Method::PUT, path, None, body).await
    }

    pub async fn delete(&self, path: &str) -> Result<UpstreamResponse, UpstreamError> {
        self.request(Method::DELETE, path, None, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_prefix_and_query() {
        let client = UpstreamClient::new("https://hiveauth.example.com/", "secret");
        assert_eq!(
            client.endpoint("/admin/identities", Some("page=2&pageSize=10")),
            "https://hiveauth.example.com/api/v1/admin/identities?page=2&pageSize=10"
        );
        assert_eq!(
            client.endpoint("/admin/stats", None),
            "https://hiveauth.example.com/api/v1/admin/stats"
        );
        assert_eq!(
            client.endpoint("/admin/stats", Some("")),
            "https://hiveauth.example.com/api/v1/admin/stats"
        );
    }
}
