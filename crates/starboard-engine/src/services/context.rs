//! Engine context - dependency container for engine services
//!
//! Holds the collaborator ports, the data handle, and the guild
//! configuration. Cheap to clone; everything inside is shared.

use std::sync::Arc;

use starboard_common::GuildConfig;
use starboard_core::{ChatClient, QuoteRenderer, ThresholdPolicy};
use starboard_store::StarboardData;

/// Engine context containing all dependencies
///
/// Passed to every engine service. It provides access to:
/// - The platform client port
/// - The quote renderer port
/// - The persisted data handle (taxonomy + ledger)
/// - Guild configuration and the derived threshold policy
#[derive(Clone)]
pub struct EngineContext {
    client: Arc<dyn ChatClient>,
    renderer: Arc<dyn QuoteRenderer>,
    data: StarboardData,
    config: Arc<GuildConfig>,
    policy: ThresholdPolicy,
}

impl EngineContext {
    /// Create a new engine context
    pub fn new(
        client: Arc<dyn ChatClient>,
        renderer: Arc<dyn QuoteRenderer>,
        data: StarboardData,
        config: GuildConfig,
    ) -> Self {
        let policy = ThresholdPolicy::new(config.high_traffic_channel_id);
        Self {
            client,
            renderer,
            data,
            config: Arc::new(config),
            policy,
        }
    }

    /// Get the platform client
    pub fn client(&self) -> &dyn ChatClient {
        self.client.as_ref()
    }

    /// Get the quote renderer
    pub fn renderer(&self) -> &dyn QuoteRenderer {
        self.renderer.as_ref()
    }

    /// Get the persisted data handle
    pub fn data(&self) -> &StarboardData {
        &self.data
    }

    /// Get the guild configuration
    pub fn config(&self) -> &GuildConfig {
        &self.config
    }

    /// Get the threshold policy
    pub fn policy(&self) -> &ThresholdPolicy {
        &self.policy
    }
}

impl std::fmt::Debug for EngineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineContext")
            .field("guild_id", &self.config.guild_id)
            .field("data", &self.data)
            .finish()
    }
}
