//! viescheck server — VIES VAT validation with PDF check reports.

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use viescheck::server::{AppState, ServerConfig, router};
use viescheck::vies::ViesClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("viescheck=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let config = ServerConfig::from_env();
    let client = ViesClient::new(&config.vies_endpoint, config.vies_timeout)?;
    let state = Arc::new(AppState { client });
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting viescheck on http://{}", addr);
    info!("VIES endpoint: {}", config.vies_endpoint);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
