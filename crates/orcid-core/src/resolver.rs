//! Cache-or-fetch resolution of an ORCID iD into publication records

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cache::{cache_key, PublicationCache, DEFAULT_CACHE_TTL};
use crate::domain::PublicationRecord;
use crate::error::ResolveError;
use crate::sources::OrcidSource;

/// Resolves ORCID iDs through the cache, falling back to one upstream fetch.
///
/// Only successful fetches are cached. A failed or unusable response is
/// returned as an error and the next call fetches again.
pub struct PublicationResolver {
    source: OrcidSource,
    cache: Arc<dyn PublicationCache>,
    ttl: Duration,
}

impl PublicationResolver {
    pub fn new(source: OrcidSource, cache: Arc<dyn PublicationCache>) -> Self {
        Self {
            source,
            cache,
            ttl: DEFAULT_CACHE_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Build a resolver that talks to the real API with an in-memory cache
    #[cfg(feature = "native")]
    pub fn from_config(config: &crate::config::OrcidConfig) -> Result<Self, crate::error::ConfigError> {
        config.validate()?;

        let client =
            crate::http::HttpClient::new(&config.user_agent, config.request_timeout())?;
        let source = OrcidSource::new(Arc::new(client)).with_base_url(&config.api_base_url);
        let cache = Arc::new(crate::cache::MemoryCache::new());

        Ok(Self::new(source, cache).with_ttl(config.cache_ttl()))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn cache(&self) -> &Arc<dyn PublicationCache> {
        &self.cache
    }

    pub fn source(&self) -> &OrcidSource {
        &self.source
    }

    /// Publication records for `orcid`, from cache when live
    pub async fn resolve(&self, orcid: &str) -> Result<Vec<PublicationRecord>, ResolveError> {
        let orcid = orcid.trim();
        if orcid.is_empty() {
            return Err(ResolveError::InvalidInput);
        }

        let key = cache_key(orcid);
        if let Some(records) = self.cache.get(&key) {
            debug!(orcid, count = records.len(), "Cache hit");
            return Ok(records);
        }
        debug!(orcid, "Cache miss");

        match self.source.fetch_works(orcid).await {
            Ok(records) => {
                self.cache.set(&key, records.clone(), self.ttl);
                Ok(records)
            }
            Err(e) => {
                warn!(orcid, error = %e, "Could not resolve publications");
                Err(e)
            }
        }
    }
}
