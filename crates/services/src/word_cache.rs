use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use vocab_core::WordEntry;

/// Default lifetime of a loaded word list: ten minutes.
pub const DEFAULT_CACHE_TTL_SECS: i64 = 600;

#[derive(Debug, Clone)]
struct CachedWords {
    words: Vec<WordEntry>,
    fetched_at: DateTime<Utc>,
}

/// Keeps the last loaded word list for a fixed time-to-live so that restarting
/// a quiz does not hit the source again.
#[derive(Debug)]
pub struct WordCache {
    ttl: Duration,
    slot: Mutex<Option<CachedWords>>,
}

impl WordCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached words if they were fetched less than `ttl` before `now`.
    #[must_use]
    pub fn get(&self, now: DateTime<Utc>) -> Option<Vec<WordEntry>> {
        let guard = self.lock();
        let cached = guard.as_ref()?;
        let age = now.signed_duration_since(cached.fetched_at);
        (age < self.ttl).then(|| cached.words.clone())
    }

    pub fn store(&self, words: Vec<WordEntry>, now: DateTime<Utc>) {
        *self.lock() = Some(CachedWords {
            words,
            fetched_at: now,
        });
    }

    pub fn invalidate(&self) {
        *self.lock() = None;
    }

    // A panic while holding the lock cannot leave the slot half-written.
    fn lock(&self) -> MutexGuard<'_, Option<CachedWords>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for WordCache {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_CACHE_TTL_SECS))
    }
}
