//! Server configuration
//!
//! Looked up in order: explicit path, `ORCID_PUBLICATIONS_CONFIG`,
//! `{config_dir}/orcid-publications/config.toml`, built-in defaults.
//! `ORCID_PUBLICATIONS_ADDR` overrides the listen address afterwards.
//!
//! ```toml
//! addr = "0.0.0.0:8080"
//!
//! [orcid]
//! api_base_url = "https://pub.orcid.org/v3.0"
//! cache_ttl_hours = 12
//! request_timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};

use orcid_core::{ConfigError, OrcidConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "ORCID_PUBLICATIONS_CONFIG";
pub const ADDR_ENV: &str = "ORCID_PUBLICATIONS_ADDR";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(#[from] ConfigError),
    #[error("Missing field: {0}")]
    MissingField(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address, `host:port`
    pub addr: String,
    pub orcid: OrcidConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            orcid: OrcidConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self, ServerConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn load_file(path: &Path) -> Result<Self, ServerConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ServerConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// `{config_dir}/orcid-publications/config.toml`, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("orcid-publications").join("config.toml"))
    }

    /// Load using the process environment for lookup and overrides
    pub fn load(explicit: Option<&Path>) -> Result<Self, ServerConfigError> {
        let env_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        let env_addr = std::env::var(ADDR_ENV).ok();
        Self::load_with(explicit, env_path, env_addr)
    }

    fn load_with(
        explicit: Option<&Path>,
        env_path: Option<PathBuf>,
        env_addr: Option<String>,
    ) -> Result<Self, ServerConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or(env_path)
            .or_else(|| Self::default_path().filter(|p| p.is_file()));

        let mut config = match path {
            Some(path) => {
                tracing::info!("Loading config from {:?}", path);
                Self::load_file(&path)?
            }
            None => Self::default(),
        };

        if let Some(addr) = env_addr.filter(|a| !a.trim().is_empty()) {
            config.addr = addr;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ServerConfigError> {
        if self.addr.trim().is_empty() {
            return Err(ServerConfigError::MissingField("addr".to_string()));
        }
        self.orcid.validate()?;
        Ok(())
    }
}
