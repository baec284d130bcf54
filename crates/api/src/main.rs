use anyhow::Result;
use tracing::info;

use guardmap_api::{app, config::Config, middleware};
use state::StateStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging);

    info!("Starting GuardMap API v{}", env!("CARGO_PKG_VERSION"));

    // Install the Prometheus recorder before any request is served
    middleware::init_metrics();

    // Empty store; monitoring state arrives through the ingest endpoints
    let store = StateStore::new();

    // Build application
    let app = app::create_app(config.clone(), store);

    // Start server
    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
