//! # starboard-engine
//!
//! Application layer of the starboard moderation-signal core: the
//! aggregation engine driving the ledger and the auto-delete cascade, and
//! the operator command surface. Collaborators (platform client, quote
//! renderer, persistence backend) are injected through the ports defined
//! in `starboard-core`.

pub mod services;

pub use services::{
    CommandActor, EngineContext, EngineError, EngineResult, StarboardService, TaxonomyCommands,
};
