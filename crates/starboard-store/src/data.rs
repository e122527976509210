//! Data handle - authoritative in-memory document with write-through
//!
//! Owns the live `StarboardDocument` and exposes atomic read and
//! read-modify-write plus an explicit `persist`. The engine performs all
//! mutations inside its per-message critical section and persists after
//! releasing the lock; a failed durable write leaves the in-memory state
//! correct, so a later successful persist reconciles.

use parking_lot::RwLock;
use std::sync::Arc;

use tracing::info;

use starboard_core::{KeyValueStore, StoreResult};

use crate::document::{StarboardDocument, RECORD_KEY};

/// Shared handle to the bot's persisted state
#[derive(Clone)]
pub struct StarboardData {
    inner: Arc<Inner>,
}

struct Inner {
    document: RwLock<StarboardDocument>,
    store: Arc<dyn KeyValueStore>,
}

impl StarboardData {
    /// Load the named record from the store, or start fresh if absent
    pub fn load(store: Arc<dyn KeyValueStore>) -> StoreResult<Self> {
        let document = match store.get(RECORD_KEY) {
            Some(value) => serde_json::from_value(value)?,
            None => StarboardDocument::new(),
        };
        info!(
            entries = document.starboard.len(),
            "Loaded starboard record"
        );
        Ok(Self {
            inner: Arc::new(Inner {
                document: RwLock::new(document),
                store,
            }),
        })
    }

    /// Read the document under the state lock
    pub fn read<R>(&self, f: impl FnOnce(&StarboardDocument) -> R) -> R {
        f(&self.inner.document.read())
    }

    /// Mutate the document atomically (in memory only)
    pub fn mutate<R>(&self, f: impl FnOnce(&mut StarboardDocument) -> R) -> R {
        f(&mut self.inner.document.write())
    }

    /// Rewrite the full record into the store and flush it to durability
    pub async fn persist(&self) -> StoreResult<()> {
        let value = {
            let document = self.inner.document.read();
            serde_json::to_value(&*document)?
        };
        self.inner.store.set(RECORD_KEY, value);
        self.inner.store.flush().await
    }
}

impl std::fmt::Debug for StarboardData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StarboardData")
            .field("entries", &self.read(|doc| doc.starboard.len()))
            .finish()
    }
}
