//! JSON-file-backed key-value store
//!
//! All records live in one JSON object on disk. Reads are served from the
//! in-memory view; `flush` rewrites the whole file using the
//! write-to-temp-then-rename pattern so a crash mid-write leaves either
//! the old file or the new one, never a partial write.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use starboard_core::{KeyValueStore, StoreError, StoreResult};

/// Key-value store persisted as a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: RwLock<HashMap<String, serde_json::Value>>,
}

impl JsonFileStore {
    /// Open a store, loading the file at `path` if it exists
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let records = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };
        debug!(path = %path.display(), "Opened record store");
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// The file this store writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.records.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: serde_json::Value) {
        self.records.write().insert(key.to_string(), value);
    }

    async fn flush(&self) -> StoreResult<()> {
        let bytes = {
            let records = self.records.read();
            serde_json::to_vec_pretty(&*records)?
        };

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &bytes)
            .await
            .map_err(|err| StoreError::Io(err.to_string()))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|err| StoreError::Io(err.to_string()))?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Flushed record store");
        Ok(())
    }
}
