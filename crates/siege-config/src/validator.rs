//! Runtime validation of a loaded configuration.

use crate::schema::Config;
use siege_common::{Result, SiegeError};
use url::Url;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    ///
    /// A missing tracker API key is not a validation failure here; whether it
    /// is fatal depends on demo mode and is decided when the stats resolver
    /// is built.
    pub fn validate(config: &Config) -> Result<()> {
        if config.discord.token.trim().is_empty() {
            return Err(SiegeError::validation_field(
                "Discord token cannot be empty",
                "discord.token",
            ));
        }

        if config.tracker.timeout_secs == 0 {
            return Err(SiegeError::validation_field(
                "Tracker timeout must be greater than 0",
                "tracker.timeout_secs",
            ));
        }

        if config.tracker.game.trim().is_empty() {
            return Err(SiegeError::validation_field(
                "Tracker game cannot be empty",
                "tracker.game",
            ));
        }

        Self::validate_base_url(&config.tracker.base_url, "tracker.base_url")?;
        Self::validate_base_url(&config.operators.image_base_url, "operators.image_base_url")?;

        Ok(())
    }

    fn validate_base_url(raw: &str, field: &str) -> Result<()> {
        let url = Url::parse(raw).map_err(|e| {
            SiegeError::validation_field(format!("Invalid URL '{raw}': {e}"), field)
        })?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(SiegeError::validation_field(
                format!("URL '{raw}' must be an http(s) base URL"),
                field,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.discord.token = "test_token".to_string();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(ConfigValidator::validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.tracker.timeout_secs = 0;
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_bad_urls_rejected() {
        let mut config = valid_config();
        config.tracker.base_url = "not a url".to_string();
        assert!(ConfigValidator::validate(&config).is_err());

        let mut config = valid_config();
        config.operators.image_base_url = "mailto:someone@example.com".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_missing_api_key_is_not_a_validation_error() {
        let config = valid_config();
        assert!(config.tracker.credential().is_none());
        assert!(config.validate().is_ok());
    }
}
