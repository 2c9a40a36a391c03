//! ORCID Publications Server
//!
//! HTTP entry point for the publications block: renders HTML fragments,
//! publishes the block metadata and serves the stylesheet.

pub mod config;
pub mod http;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use orcid_core::{ConfigError, PublicationResolver};

pub use config::{ServerConfig, ServerConfigError};

/// Shared application state
pub struct AppState {
    pub resolver: PublicationResolver,
}

impl AppState {
    pub fn new(resolver: PublicationResolver) -> Self {
        Self { resolver }
    }

    /// Create with the real ORCID client and an in-memory cache
    pub fn from_config(config: &ServerConfig) -> Result<Self, ConfigError> {
        let resolver = PublicationResolver::from_config(&config.orcid)?;
        Ok(Self::new(resolver))
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Block endpoints
        .route("/render", get(http::render_query).post(http::render_json))
        .route("/block.json", get(http::get_block_metadata))
        .route("/assets/orcid-publications.css", get(http::get_stylesheet))
        // System endpoints
        .route("/status", get(http::get_status))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the server
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("ORCID publications server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
