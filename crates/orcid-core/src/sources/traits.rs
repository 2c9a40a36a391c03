//! Common types for source plugins

use serde::Serialize;
use thiserror::Error;

/// A response arrived but could not be turned into publications
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Invalid JSON: {0}")]
    Parse(String),
    #[error("Response has no works group")]
    MissingGroup,
}

/// Metadata about a source
#[derive(Debug, Clone, Serialize)]
pub struct SourceMetadata {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_url: &'static str,
    pub requires_api_key: bool,
}
