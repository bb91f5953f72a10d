//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use poise::serenity_prelude as serenity;
use siege_commands::{create_framework, Data};
use siege_config::{Config, LinkedAccounts};
use siege_stats::{NoChallengeSource, OperatorCatalog, StatsResolver};
use std::sync::Arc;
use tracing::{info, warn};

/// Main bot structure.
pub struct SiegeBot {
    config: Arc<Config>,
}

impl SiegeBot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Starts the bot and runs until the gateway connection ends.
    pub async fn start(&self) -> BotResult<()> {
        // Built before connecting so a missing API key stops startup.
        let data = build_data(Arc::clone(&self.config))?;
        let guild_id = self.config.discord.guild_id;

        let framework = create_framework()
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!("Logged in as {}", ready.user.name);
                    let commands = &framework.options().commands;
                    if let Some(guild_id) = guild_id {
                        poise::builtins::register_in_guild(ctx, commands, serenity::GuildId::new(guild_id))
                            .await?;
                        info!(guild_id, "Registered slash commands in guild");
                    } else {
                        poise::builtins::register_globally(ctx, commands).await?;
                        info!("Registered slash commands globally");
                    }
                    Ok(data)
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(
            &self.config.discord.token,
            serenity::GatewayIntents::non_privileged(),
        )
        .framework(framework)
        .await?;

        client.start().await?;
        Ok(())
    }
}

/// Assemble the shared command state from configuration.
pub fn build_data(config: Arc<Config>) -> BotResult<Data> {
    let resolver = StatsResolver::new(&config.tracker)?;
    if resolver.demo_mode() {
        warn!("Demo mode is on; failed lookups answer with demo data");
    }

    let accounts = LinkedAccounts::load(config.accounts.path.as_deref());
    info!(linked = accounts.len(), "Loaded linked accounts");

    Ok(Data {
        resolver: Arc::new(resolver),
        operators: Arc::new(OperatorCatalog::from_config(&config.operators)),
        challenges: Arc::new(NoChallengeSource),
        accounts: Arc::new(accounts),
        config,
    })
}
