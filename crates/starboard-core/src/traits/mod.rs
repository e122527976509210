//! Ports - interfaces to the bot's external collaborators
//!
//! The domain layer defines what it needs; infrastructure and test
//! doubles provide the implementations.

mod client;
mod renderer;
mod store;

pub use client::{ChatClient, OutgoingMessage};
pub use renderer::QuoteRenderer;
pub use store::KeyValueStore;
