//! Concurrency primitives shared across the bot

mod expiring_set;
mod keyed_mutex;

pub use expiring_set::ExpiringSet;
pub use keyed_mutex::{KeyedMutexGuard, KeyedMutexSet};
