//! Default values for every configuration section.

use crate::schema::{DiscordConfig, OperatorsConfig, TrackerConfig};
use siege_common::Platform;

/// Tracker Network public API base URL.
pub const DEFAULT_TRACKER_BASE_URL: &str = "https://public-api.tracker.gg/v2";

/// Game segment of the Tracker Network profile path.
pub const DEFAULT_TRACKER_GAME: &str = "r6siege";

/// Upstream request timeout in seconds.
pub const DEFAULT_TRACKER_TIMEOUT_SECS: u64 = 15;

/// Where operator images are hosted.
pub const DEFAULT_OPERATOR_IMAGE_BASE_URL: &str =
    "https://raw.githubusercontent.com/kmart93-creator/r6-operator-images/main";

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Linked account files tried, in order, when none is configured.
pub const DEFAULT_ACCOUNT_FILES: [&str; 2] = ["users.json", "user.json"];

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            guild_id: None,
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_TRACKER_BASE_URL.to_string(),
            game: DEFAULT_TRACKER_GAME.to_string(),
            timeout_secs: DEFAULT_TRACKER_TIMEOUT_SECS,
            default_platform: Platform::Psn,
            demo_mode: false,
        }
    }
}

impl Default for OperatorsConfig {
    fn default() -> Self {
        Self {
            image_base_url: DEFAULT_OPERATOR_IMAGE_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Config;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tracker.timeout_secs, 15);
        assert_eq!(config.tracker.game, "r6siege");
        assert_eq!(config.tracker.default_platform, siege_common::Platform::Psn);
        assert!(!config.tracker.demo_mode);
        assert!(config.tracker.credential().is_none());
        assert!(config.discord.guild_id.is_none());
        assert!(config.accounts.path.is_none());
    }
}
