//! # starboard-store
//!
//! Persistence layer: the persisted document (taxonomy + starboard
//! ledger), key-value store implementations, and the shared data handle
//! the engine mutates and persists through.

mod data;
mod document;
mod json_store;
mod memory_store;

pub use data::StarboardData;
pub use document::{StarboardDocument, RECORD_KEY};
pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
