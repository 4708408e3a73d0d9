//! Product Segment Engine HTTP Server
//!
//! Provides REST API for validating and evaluating segments.

use anyhow::Result;
use segment_server::{api, config::ServerConfig, engine};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!("Loaded configuration: {:?}", config);

    // Initialize segment engine
    let engine = engine::init_engine(&config).await?;
    info!("Segment engine initialized");

    let app = api::create_router(engine);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Validate: POST http://{}/v1/segments/validate", addr);
    info!("  Evaluate: POST http://{}/v1/segments/evaluate", addr);
    info!("  Products: GET http://{}/v1/products", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber; `RUST_LOG` overrides the configured level
fn init_tracing(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "segment_server={level},segment_sdk={level},segment_runtime={level},segment_repository={level},tower_http=debug"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
