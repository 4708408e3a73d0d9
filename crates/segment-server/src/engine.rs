//! Segment engine initialization
//!
//! Converts server configuration to SDK configuration.

use crate::config::ServerConfig;
use anyhow::Result;
use segment_sdk::{SegmentEngine, SegmentEngineBuilder};
use tracing::info;

/// Initialize the segment engine and load the catalog
pub async fn init_engine(config: &ServerConfig) -> Result<SegmentEngine> {
    let repo_config = config.catalog.to_repository_config();
    info!("Catalog source: {:?}", repo_config);

    let engine = SegmentEngineBuilder::new()
        .with_repository(repo_config)
        .strict_suggested_values(config.strict_suggested_values)
        .build()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize segment engine: {}", e))?;

    info!("Loaded {} products", engine.catalog().len());
    Ok(engine)
}
