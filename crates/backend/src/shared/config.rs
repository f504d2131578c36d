use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub admin: AdminConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the HiveAuth API, without the /api/v1 prefix
    pub base_url: String,
    /// Shared secret injected as the x-app-secret header
    pub app_secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthConfig {
    /// JWT signing secret. A random one is generated at startup when unset,
    /// which invalidates sessions across restarts.
    pub jwt_secret: Option<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
listen_addr = "0.0.0.0:3000"
static_dir = "crates/frontend/dist"

[upstream]
base_url = "https://hiveauth-api.onrender.com"
app_secret = ""

[admin]
email = "admin@hiveauth.local"
password = "admin"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Environment variables override the file in either case.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_env_overrides(&mut config);
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(v) = std::env::var("LISTEN_ADDR") {
        config.server.listen_addr = v;
    }
    if let Ok(v) = std::env::var("HIVEAUTH_API_URL") {
        config.upstream.base_url = v;
    }
    if let Ok(v) = std::env::var("HIVEAUTH_APP_SECRET") {
        config.upstream.app_secret = v;
    }
    if let Ok(v) = std::env::var("ADMIN_EMAIL") {
        config.admin.email = v;
    }
    if let Ok(v) = std::env::var("ADMIN_PASSWORD") {
        config.admin.password = v;
    }
    if let Ok(v) = std::env::var("JWT_SECRET") {
        config.auth.jwt_secret = Some(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.listen_addr, "0.0.0.0:3000");
        assert!(config.auth.jwt_secret.is_none());
    }
}
