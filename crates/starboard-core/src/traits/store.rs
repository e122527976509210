//! Persistence port - named-record key-value storage
//!
//! The bot persists its whole state as a single named record, rewritten
//! in full on every mutation. `get`/`set` work against the authoritative
//! in-memory view and cannot fail; `flush` performs the durable write.

use async_trait::async_trait;

use crate::error::StoreResult;

/// Key-value persistence used for the bot's named records
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a record, `None` when absent
    fn get(&self, key: &str) -> Option<serde_json::Value>;

    /// Write a record into the in-memory view
    fn set(&self, key: &str, value: serde_json::Value);

    /// Check whether a record exists
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Write the in-memory view through to durable storage
    async fn flush(&self) -> StoreResult<()>;
}
