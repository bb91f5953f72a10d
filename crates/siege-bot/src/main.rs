//! Main entry point for SiegeBot.

use siege_bot::{BotResult, SiegeBot};
use siege_common::{bootstrap_subscriber, init_logging};
use siege_config::ConfigLoader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> BotResult<()> {
    // Config decides the real subscriber; log the loading itself through a
    // temporary one.
    let config = tracing::subscriber::with_default(bootstrap_subscriber(), ConfigLoader::load)?;
    let _log_guard = init_logging(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        platform = %config.tracker.default_platform,
        demo_mode = config.tracker.demo_mode,
        "Starting SiegeBot"
    );

    let bot = SiegeBot::new(config);

    if let Err(e) = bot.start().await {
        error!("Bot stopped with an error: {}", e);
        return Err(e);
    }

    Ok(())
}
