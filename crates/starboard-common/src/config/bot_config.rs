//! Bot configuration structs
//!
//! Loads configuration from environment variables (with an optional .env
//! file). Channel designations and the admin roster are deployment
//! concerns; thresholds are policy constants and stay in code.

use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::time::Duration;

use starboard_core::Snowflake;

/// Main bot configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    pub app: AppSettings,
    pub guild: GuildConfig,
    pub storage: StorageConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Guild-level channel designations and the admin roster
#[derive(Debug, Clone, Deserialize)]
pub struct GuildConfig {
    /// The guild the bot operates in
    pub guild_id: Snowflake,
    /// Feed channel curated entries are posted to
    pub starboard_channel_id: Snowflake,
    /// High-traffic channel with elevated promotion thresholds
    pub high_traffic_channel_id: Snowflake,
    /// Channel where the auto-delete cascade may fire
    pub moderated_channel_id: Snowflake,
    /// Moderation log channel for threshold and deletion records
    pub action_log_channel_id: Snowflake,
    /// Channels the engine never tracks
    #[serde(default)]
    pub excluded_channel_ids: HashSet<Snowflake>,
    /// Users exempt from auto-delete and allowed to run operator commands
    #[serde(default)]
    pub admin_user_ids: HashSet<Snowflake>,
    /// Suppression window for repeated threshold notifications (seconds)
    #[serde(default = "default_notify_ttl_secs")]
    pub notify_ttl_secs: u64,
}

impl GuildConfig {
    /// Check whether a user is an authorized administrator
    #[inline]
    pub fn is_admin(&self, user_id: Snowflake) -> bool {
        self.admin_user_ids.contains(&user_id)
    }

    /// Check whether a channel is excluded from tracking
    #[inline]
    pub fn is_excluded(&self, channel_id: Snowflake) -> bool {
        self.excluded_channel_ids.contains(&channel_id)
    }

    /// Notification suppression window
    #[inline]
    pub fn notify_ttl(&self) -> Duration {
        Duration::from_secs(self.notify_ttl_secs)
    }
}

/// Durable storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_path")]
    pub data_path: String,
}

// Default value functions
fn default_app_name() -> String {
    "starboard".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_notify_ttl_secs() -> u64 {
    86_400 // 24 hours
}

fn default_data_path() -> String {
    "./starboard.json".to_string()
}

impl BotConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            guild: GuildConfig {
                guild_id: required_snowflake("GUILD_ID")?,
                starboard_channel_id: required_snowflake("STARBOARD_CHANNEL_ID")?,
                high_traffic_channel_id: required_snowflake("HIGH_TRAFFIC_CHANNEL_ID")?,
                moderated_channel_id: required_snowflake("MODERATED_CHANNEL_ID")?,
                action_log_channel_id: required_snowflake("ACTION_LOG_CHANNEL_ID")?,
                excluded_channel_ids: snowflake_list("EXCLUDED_CHANNEL_IDS")?,
                admin_user_ids: snowflake_list("ADMIN_USER_IDS")?,
                notify_ttl_secs: env::var("NOTIFY_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_notify_ttl_secs),
            },
            storage: StorageConfig {
                data_path: env::var("DATA_PATH").unwrap_or_else(|_| default_data_path()),
            },
        })
    }
}

fn required_snowflake(var: &'static str) -> Result<Snowflake, ConfigError> {
    let raw = env::var(var).map_err(|_| ConfigError::MissingVar(var))?;
    Snowflake::parse(raw.trim()).map_err(|_| ConfigError::InvalidValue(var, raw))
}

fn snowflake_list(var: &'static str) -> Result<HashSet<Snowflake>, ConfigError> {
    let Ok(raw) = env::var(var) else {
        return Ok(HashSet::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Snowflake::parse(s).map_err(|_| ConfigError::InvalidValue(var, s.to_string())))
        .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
