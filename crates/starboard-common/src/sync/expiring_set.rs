//! TTL-expiring membership set
//!
//! A set whose entries disappear a fixed duration after insertion.
//! Expiry is lazy: deadlines are checked on lookup and expired entries
//! pruned on insert, so no background timers accumulate and no caller
//! has to trigger a sweep. Deadlines use `tokio::time::Instant`, which
//! follows the paused test clock.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;
use tokio::time::Instant;

/// Membership set with per-entry expiry
#[derive(Debug)]
pub struct ExpiringSet<K>
where
    K: Eq + Hash,
{
    ttl: Duration,
    entries: Mutex<HashMap<K, Instant>>,
}

impl<K> ExpiringSet<K>
where
    K: Eq + Hash,
{
    /// Create a set whose entries live for `ttl` after insertion
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The configured entry lifetime
    #[inline]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Check membership, dropping the entry if it has expired
    pub fn has(&self, key: &K) -> bool {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(deadline) if *deadline > now => true,
            Some(_) => {
                entries.remove(key);
                false
            }
            None => false,
        }
    }

    /// Insert (or refresh) an entry with a fresh deadline
    ///
    /// Re-insertion after expiry is permitted and starts a new window.
    /// Expired entries are pruned here so the map stays bounded by the
    /// number of keys touched within one TTL window.
    pub fn insert(&self, key: K) {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        entries.retain(|_, deadline| *deadline > now);
        entries.insert(key, now + self.ttl);
    }

    /// Number of unexpired entries
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.lock().values().filter(|d| **d > now).count()
    }

    /// Check whether no unexpired entries exist
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
