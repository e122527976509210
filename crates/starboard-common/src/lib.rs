//! # starboard-common
//!
//! Shared utilities: configuration, telemetry, and the concurrency
//! primitives the aggregation engine builds on (per-key async mutual
//! exclusion and a TTL-expiring membership set).

pub mod config;
pub mod sync;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{AppSettings, BotConfig, ConfigError, Environment, GuildConfig, StorageConfig};
pub use sync::{ExpiringSet, KeyedMutexGuard, KeyedMutexSet};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
