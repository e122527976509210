//! Per-key asynchronous mutual exclusion
//!
//! A map of async mutexes keyed by an arbitrary id. At most one holder
//! per key; a second caller for the same key suspends until the holder
//! releases (tokio mutexes queue waiters fairly). Callers for distinct
//! keys never block each other. Acquisition cannot fail, only delay.
//!
//! Lock entries are created lazily on first use and removed on release
//! once no holder or waiter remains, so the map does not grow with the
//! total number of keys ever seen. Waiters keep the mutex alive through
//! their own `Arc`, which is exactly the condition the cleanup checks.

use dashmap::DashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// A set of asynchronous mutexes, one per key
#[derive(Debug)]
pub struct KeyedMutexSet<K>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
{
    locks: Arc<DashMap<K, Arc<Mutex<()>>>>,
}

impl<K> KeyedMutexSet<K>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
{
    /// Create an empty lock set
    pub fn new() -> Self {
        Self {
            locks: Arc::new(DashMap::new()),
        }
    }

    /// Acquire the lock for `key`, suspending while another task holds it
    ///
    /// The returned guard releases on drop, on every exit path.
    pub async fn lock(&self, key: K) -> KeyedMutexGuard<K> {
        let mutex = self
            .locks
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        // The map shard is unlocked here; only the Arc is held across await.
        let guard = mutex.lock_owned().await;
        KeyedMutexGuard {
            locks: Arc::clone(&self.locks),
            key,
            guard: Some(guard),
        }
    }

    /// Number of keys currently holding a live lock entry
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Check whether no lock entries exist
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

impl<K> Default for KeyedMutexSet<K>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped lock handle for one key
#[must_use = "the critical section ends when the guard is dropped"]
pub struct KeyedMutexGuard<K>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
{
    locks: Arc<DashMap<K, Arc<Mutex<()>>>>,
    key: K,
    guard: Option<OwnedMutexGuard<()>>,
}

impl<K> Drop for KeyedMutexGuard<K>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
{
    fn drop(&mut self) {
        // Release the mutex first, then retire the entry if nobody else
        // (holder or waiter) still references it. A strong count of one
        // means only the map itself holds the mutex.
        self.guard.take();
        self.locks
            .remove_if(&self.key, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}
