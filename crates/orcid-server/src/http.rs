//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};

use orcid_core::{block_metadata, render_block, BlockAttributes, BlockMetadata, OrcidSource};

use crate::AppState;

/// Layout styles for the rendered fragment
pub const STYLESHEET: &str = include_str!("../assets/orcid-publications.css");

/// Render a block from query-string attributes
pub async fn render_query(
    State(state): State<Arc<AppState>>,
    attributes: Result<Query<BlockAttributes>, QueryRejection>,
) -> Result<Html<String>, (StatusCode, String)> {
    let Query(attributes) =
        attributes.map_err(|e| (StatusCode::BAD_REQUEST, e.body_text()))?;

    Ok(Html(render_block(&state.resolver, &attributes).await))
}

/// Render a block from a JSON attributes body
pub async fn render_json(
    State(state): State<Arc<AppState>>,
    attributes: Result<Json<BlockAttributes>, JsonRejection>,
) -> Result<Html<String>, (StatusCode, String)> {
    let Json(attributes) = attributes
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Invalid attributes: {}", e.body_text())))?;

    Ok(Html(render_block(&state.resolver, &attributes).await))
}

/// Block registration metadata
pub async fn get_block_metadata() -> Json<BlockMetadata> {
    Json(block_metadata())
}

pub async fn get_stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLESHEET,
    )
}

/// Get system status
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": orcid_core::version(),
        "source": OrcidSource::metadata(),
        "api_base_url": state.resolver.source().base_url(),
        "cache_ttl_secs": state.resolver.ttl().as_secs(),
        "cached_entries": state.resolver.cache().live_entries(),
    }))
}
