//! Configuration for the ORCID resolver
//!
//! Upstream location, HTTP behavior and cache lifetime.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sources::ORCID_API_BASE;

pub const DEFAULT_USER_AGENT: &str = concat!("orcid-publications/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrcidConfig {
    /// Root of the ORCID public API, without trailing slash
    pub api_base_url: String,
    /// How long a fetched publication list stays cached
    pub cache_ttl_hours: u64,
    pub user_agent: String,
    /// Per-request timeout for the upstream call
    pub request_timeout_secs: u64,
}

impl Default for OrcidConfig {
    fn default() -> Self {
        Self {
            api_base_url: ORCID_API_BASE.to_string(),
            cache_ttl_hours: 12,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl OrcidConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_hours.saturating_mul(60 * 60))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_ttl_hours == 0 {
            return Err(ConfigError::OutOfRange(
                "cache_ttl_hours must be positive".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::OutOfRange(
                "request_timeout_secs must be positive".to_string(),
            ));
        }

        let url = url::Url::parse(&self.api_base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.api_base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                self.api_base_url
            )));
        }

        Ok(())
    }
}
