//! Poise framework setup and command registration logic.

use siege_config::{Config, LinkedAccounts};
use siege_stats::{ChallengeSource, OperatorCatalog, StatsResolver};
use std::sync::Arc;
use tracing::{error, warn};

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Player statistics lookup.
    pub resolver: Arc<StatsResolver>,
    /// Operator image lookup.
    pub operators: Arc<OperatorCatalog>,
    /// Weekly challenge source.
    pub challenges: Arc<dyn ChallengeSource>,
    /// Discord user to game handle links.
    pub accounts: Arc<LinkedAccounts>,
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Every command the bot registers.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        crate::stats::stats(),
        crate::challenges::challenges(),
        crate::about::about(),
    ]
}

/// Creates a new Poise framework builder with the bot's commands.
pub fn create_framework() -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: commands(),
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    })
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(command = %ctx.command().name, "Command failed: {}", error);
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                warn!("Error while handling framework error: {}", e);
            }
        }
    }
}
