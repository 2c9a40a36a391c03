//! ORCID Publications Server Binary
//!
//! Usage: `orcid-server [config.toml]`

use std::path::PathBuf;
use std::sync::Arc;

use orcid_server::{serve, AppState, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = ServerConfig::load(config_path.as_deref())?;

    let state = Arc::new(AppState::from_config(&config)?);

    serve(&config.addr, state).await
}
