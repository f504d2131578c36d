use std::sync::Arc;

use crate::shared::config::Config;
use crate::shared::upstream::UpstreamClient;
use crate::system::auth::jwt;

/// Request-scoped application state, passed to handlers via axum State.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: UpstreamClient,
    pub jwt_secret: Arc<String>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let upstream = UpstreamClient::new(
            config.upstream.base_url.clone(),
            config.upstream.app_secret.clone(),
        );

        let jwt_secret = match &config.auth.jwt_secret {
            Some(secret) => secret.clone(),
            None => {
                tracing::warn!("JWT_SECRET not set, generating a random one");
                jwt::generate_jwt_secret()
            }
        };

        Ok(Self {
            config: Arc::new(config),
            upstream,
            jwt_secret: Arc::new(jwt_secret),
        })
    }
}
