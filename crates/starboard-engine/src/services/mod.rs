//! Engine services
//!
//! The aggregation engine, the auto-delete cascade, and the operator
//! command surface, all sharing one dependency context.

mod autodelete;
pub mod commands;
pub mod context;
pub mod error;
pub mod starboard;

// Re-export all services for convenience
pub use commands::{CommandActor, TaxonomyCommands};
pub use context::EngineContext;
pub use error::{EngineError, EngineResult};
pub use starboard::StarboardService;
