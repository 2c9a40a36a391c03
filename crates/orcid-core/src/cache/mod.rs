//! Key-value cache for resolved publication lists
//!
//! Entries expire lazily: an expired entry is dropped when it is read or
//! when any other entry is written. There is no background eviction.

pub mod memory;

pub use memory::MemoryCache;

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::domain::PublicationRecord;

pub const CACHE_KEY_PREFIX: &str = "orcid_pubs_";

/// Twelve hours
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Cache key for an ORCID iD
pub fn cache_key(orcid: &str) -> String {
    format!("{}{}", CACHE_KEY_PREFIX, orcid)
}

/// Store of publication lists with per-entry expiry
pub trait PublicationCache: Send + Sync {
    /// Live entry for `key`, or `None` when absent or expired
    fn get(&self, key: &str) -> Option<Vec<PublicationRecord>>;

    /// Insert or overwrite `key`, valid for `ttl` from now
    fn set(&self, key: &str, records: Vec<PublicationRecord>, ttl: Duration);

    /// Number of entries that have not expired yet
    fn live_entries(&self) -> usize;
}

/// Source of the current time for expiry checks
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        if let Ok(delta) = chrono::Duration::from_std(by) {
            *now = now.checked_add_signed(delta).unwrap_or(DateTime::<Utc>::MAX_UTC);
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}
