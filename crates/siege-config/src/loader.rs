//! Configuration loading from TOML files with environment overrides.

use crate::defaults::DEFAULT_CONFIG_FILE;
use crate::schema::Config;
use siege_common::{Platform, Result, SiegeError};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SIEGEBOT_CONFIG_PATH";

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the environment and an optional TOML file.
    ///
    /// A `.env` file in the working directory is read first. The file is
    /// taken from `SIEGEBOT_CONFIG_PATH`, else `config.toml` when present,
    /// else built-in defaults are used. Environment variables override file
    /// values and the result is validated.
    pub fn load() -> Result<Config> {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        let mut config = match Self::config_path() {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::read_file(&path)?
            }
            None => {
                info!("No configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a specific file, with environment overrides.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let mut config = Self::read_file(path.as_ref())?;
        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text without overrides or validation.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    /// Apply process environment overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides read through `lookup`, which maps a variable name to its value.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Discord configuration overrides
        if let Some(token) = lookup("DISCORD_TOKEN") {
            config.discord.token = token;
        }

        if let Some(guild_id) = lookup("GUILD_ID").filter(|v| !v.trim().is_empty()) {
            config.discord.guild_id = Some(parse_var("GUILD_ID", &guild_id)?);
        }

        // Tracker configuration overrides
        if let Some(api_key) = lookup("TRN_API_KEY") {
            config.tracker.api_key = Some(api_key).filter(|key| !key.trim().is_empty());
        }

        if let Some(base_url) = lookup("TRN_BASE_URL") {
            config.tracker.base_url = base_url;
        }

        if let Some(timeout) = lookup("TRN_TIMEOUT_SECS") {
            config.tracker.timeout_secs = parse_var("TRN_TIMEOUT_SECS", &timeout)?;
        }

        if let Some(platform) = lookup("PLATFORM") {
            config.tracker.default_platform = platform.parse::<Platform>()?;
        }

        if let Some(demo) = lookup("DEMO_MODE") {
            config.tracker.demo_mode = parse_flag("DEMO_MODE", &demo)?;
        }

        // Operator image overrides
        if let Some(base_url) = lookup("OPERATOR_IMAGE_BASE_URL") {
            config.operators.image_base_url = base_url;
        }

        // Linked accounts
        if let Some(path) = lookup("USERS_FILE") {
            config.accounts.path = Some(PathBuf::from(path));
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        let default = Path::new(DEFAULT_CONFIG_FILE);
        default.exists().then(|| default.to_path_buf())
    }

    fn read_file(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SiegeError::config_with_source(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;
        Self::from_toml_str(&content)
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| {
        SiegeError::config_with_source(format!("Failed to parse environment variable '{var}'"), e)
    })
}

fn parse_flag(var: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(SiegeError::config(format!(
            "Environment variable '{var}' must be a boolean flag, got '{other}'"
        ))),
    }
}
