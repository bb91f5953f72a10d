//! Application-wide error types using thiserror.

use poise::serenity_prelude as serenity;
use siege_common::SiegeError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration error, including a missing API key outside demo mode.
    #[error("Configuration error: {0}")]
    Config(#[from] SiegeError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
