//! In-process cache backed by a hash map

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::{Clock, PublicationCache, SystemClock};
use crate::domain::PublicationRecord;

#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub records: Vec<PublicationRecord>,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicationCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Vec<PublicationRecord>> {
        let now = self.clock.now();
        {
            let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired(now) => return Some(entry.records.clone()),
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        // Re-check under the write lock; a concurrent set may have refreshed it
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
            debug!(key, "Evicted expired cache entry");
        }
        None
    }

    fn set(&self, key: &str, records: Vec<PublicationRecord>, ttl: Duration) {
        let now = self.clock.now();
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        if entries.len() < before {
            debug!(evicted = before - entries.len(), "Dropped expired cache entries");
        }
        entries.insert(
            key.to_string(),
            CacheEntry {
                records,
                expires_at,
            },
        );
    }

    fn live_entries(&self) -> usize {
        let now = self.clock.now();
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.values().filter(|e| !e.is_expired(now)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    fn records() -> Vec<PublicationRecord> {
        vec![PublicationRecord::new("Paper", "2020", "journal-article", "")]
    }

    #[test]
    fn test_get_missing() {
        let cache = MemoryCache::new();
        assert!(cache.get("orcid_pubs_x").is_none());
    }

    #[test]
    fn test_set_then_get() {
        let cache = MemoryCache::new();
        cache.set("k", records(), Duration::from_secs(60));
        assert_eq!(cache.get("k"), Some(records()));
        assert_eq!(cache.live_entries(), 1);
    }

    #[test]
    fn test_entry_expires_at_ttl() {
        let clock = Arc::new(ManualClock::default());
        let cache = MemoryCache::with_clock(clock.clone());
        cache.set("k", records(), Duration::from_secs(60));

        clock.advance(Duration::from_secs(59));
        assert!(cache.get("k").is_some());

        clock.advance(Duration::from_secs(1));
        assert!(cache.get("k").is_none());
        assert_eq!(cache.live_entries(), 0);
    }

    #[test]
    fn test_overwrite_refreshes_expiry() {
        let clock = Arc::new(ManualClock::default());
        let cache = MemoryCache::with_clock(clock.clone());
        cache.set("k", vec![], Duration::from_secs(10));
        clock.advance(Duration::from_secs(5));
        cache.set("k", records(), Duration::from_secs(10));
        clock.advance(Duration::from_secs(7));
        assert_eq!(cache.get("k"), Some(records()));
    }

    #[test]
    fn test_set_drops_expired_entries_for_other_keys() {
        let clock = Arc::new(ManualClock::default());
        let cache = MemoryCache::with_clock(clock.clone());
        cache.set("orcid_pubs_a", records(), Duration::from_secs(10));
        cache.set("orcid_pubs_b", records(), Duration::from_secs(100));

        clock.advance(Duration::from_secs(20));
        cache.set("orcid_pubs_c", records(), Duration::from_secs(10));

        let entries = cache.entries.read().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(!entries.contains_key("orcid_pubs_a"));
        assert!(entries.contains_key("orcid_pubs_b"));
        assert!(entries.contains_key("orcid_pubs_c"));
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let cache = MemoryCache::new();
        cache.set("k", records(), Duration::from_secs(u64::MAX));
        assert!(cache.get("k").is_some());
    }
}
