//! In-memory key-value store
//!
//! Backs tests and ephemeral deployments. `flush` is a no-op unless the
//! store has been told to fail, which tests use to exercise the
//! persistence-failure path.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use starboard_core::{KeyValueStore, StoreError, StoreResult};

/// Key-value store held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, serde_json::Value>>,
    flushes: AtomicUsize,
    fail_flushes: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful flushes so far
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }

    /// Make subsequent flushes fail (or succeed again)
    pub fn set_fail_flushes(&self, fail: bool) {
        self.fail_flushes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.records.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: serde_json::Value) {
        self.records.write().insert(key.to_string(), value);
    }

    async fn flush(&self) -> StoreResult<()> {
        if self.fail_flushes.load(Ordering::SeqCst) {
            return Err(StoreError::Io("simulated flush failure".to_string()));
        }
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
