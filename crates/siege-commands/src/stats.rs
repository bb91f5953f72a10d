//! Player statistics command.

use crate::cards::{StatsCard, MISSING_NAME_MESSAGE, STATS_ERROR_MESSAGE};
use crate::choices::{PlatformChoice, PlaylistChoice};
use crate::framework::{Context, Error};
use siege_common::{Platform, Playlist, UserId};
use siege_config::LinkedAccounts;
use tracing::{error, info};

/// Look up Rainbow Six Siege stats (PSN / Xbox / PC).
#[poise::command(slash_command)]
pub async fn stats(
    ctx: Context<'_>,
    #[description = "Game mode / playlist"] playlist: PlaylistChoice,
    #[description = "Player name (PSN / XBL / Uplay)"] name: Option<String>,
    #[description = "Platform"] platform: Option<PlatformChoice>,
) -> Result<(), Error> {
    let data = ctx.data();
    let caller = UserId(ctx.author().id.get());

    let Some(handle) = resolve_handle(name.as_deref(), &data.accounts, caller) else {
        ctx.send(
            poise::CreateReply::default()
                .content(MISSING_NAME_MESSAGE)
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    };

    let platform = platform.map_or(data.config.tracker.default_platform, Platform::from);
    let playlist = Playlist::from(playlist);

    ctx.defer().await?;

    match data.resolver.fetch(&handle, platform, playlist).await {
        Ok(record) => {
            info!(handle = %handle, "Sending stats card");
            let card = StatsCard::new(&record, platform, playlist, &data.operators);
            ctx.send(poise::CreateReply::default().embed(card.into_embed()))
                .await?;
        }
        Err(e) => {
            error!(handle = %handle, "Stats lookup failed: {}", e);
            ctx.say(STATS_ERROR_MESSAGE).await?;
        }
    }

    Ok(())
}

/// Handle to look up: the explicit name, else the caller's linked account.
pub fn resolve_handle(name: Option<&str>, accounts: &LinkedAccounts, caller: UserId) -> Option<String> {
    name.map(str::trim)
        .filter(|name| !name.is_empty())
        .or_else(|| accounts.handle_for(caller))
        .map(str::to_string)
}
