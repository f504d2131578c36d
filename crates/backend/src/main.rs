pub mod api;
pub mod routes;
pub mod shared;
pub mod state;
pub mod system;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,reqwest=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = shared::config::load_config()?;
    let addr: std::net::SocketAddr = config.server.listen_addr.parse()?;
    let static_dir = config.server.static_dir.clone();

    let state = state::AppState::new(config)?;
    let app = routes::configure_routes(state, &static_dir);

    tracing::info!("HiveAuth admin listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
