//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use siege_common::{LoggingConfig, Platform, SiegeError};
use std::path::PathBuf;

/// Main configuration structure for SiegeBot.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Tracker Network API configuration.
    pub tracker: TrackerConfig,
    /// Operator image configuration.
    pub operators: OperatorsConfig,
    /// Linked account configuration.
    pub accounts: AccountsConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Register slash commands in this guild only; global registration when absent.
    pub guild_id: Option<u64>,
}

/// Tracker Network stats API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// API key sent as the `TRN-Api-Key` header.
    pub api_key: Option<String>,
    /// API base URL.
    pub base_url: String,
    /// Game segment of the profile path.
    pub game: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Platform used when a command does not name one.
    pub default_platform: Platform,
    /// Serve canned demonstration data when the API is unavailable.
    pub demo_mode: bool,
}

impl TrackerConfig {
    /// The API key, ignoring blank values.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Operator image configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorsConfig {
    /// Base URL the operator asset file names are appended to.
    pub image_base_url: String,
}

/// Linked account configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AccountsConfig {
    /// JSON file mapping Discord user IDs to player handles.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SiegeError> {
        crate::validator::ConfigValidator::validate(self)
    }
}
