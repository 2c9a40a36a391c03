//! Error types for orcid-core

use thiserror::Error;

use crate::http::HttpError;
use crate::sources::SourceError;

/// Why a publication list could not be produced.
///
/// Every variant is terminal for the request: nothing is retried and the
/// caller shows [`ResolveError::placeholder`] in place of the list.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The block was rendered without an ORCID iD
    #[error("No ORCID identifier provided")]
    InvalidInput,

    /// The ORCID API could not be reached or answered with a non-2xx status
    #[error("Failed to fetch works: {0}")]
    Fetch(#[from] HttpError),

    /// The ORCID API answered but the payload held no usable works list
    #[error("No usable works in response: {0}")]
    EmptyResult(#[from] SourceError),
}

pub const PLACEHOLDER_INVALID_INPUT: &str = "<p>Please provide an ORCID ID</p>";
pub const PLACEHOLDER_FETCH_ERROR: &str = "<p>Error fetching publications</p>";
pub const PLACEHOLDER_EMPTY_RESULT: &str = "<p>No publications found</p>";

impl ResolveError {
    /// Static inline markup shown to the visitor instead of the list
    pub fn placeholder(&self) -> &'static str {
        match self {
            ResolveError::InvalidInput => PLACEHOLDER_INVALID_INPUT,
            ResolveError::Fetch(_) => PLACEHOLDER_FETCH_ERROR,
            ResolveError::EmptyResult(_) => PLACEHOLDER_EMPTY_RESULT,
        }
    }
}

/// Configuration validation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Value out of range: {0}")]
    OutOfRange(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP client error: {0}")]
    Http(#[from] HttpError),
}
