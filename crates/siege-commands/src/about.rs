//! About command implementation using Poise's command macro.

use crate::framework::{Context, Error};

/// Text of the `/about` reply.
pub fn about_text() -> String {
    format!(
        "**SiegeBot v{}**\n\
         Rainbow Six Siege player statistics from Tracker Network.\n\
         Use `/stats` for a player card and `/challenges` for the weekly challenges.",
        env!("CARGO_PKG_VERSION")
    )
}

/// Shows information about the bot.
#[poise::command(slash_command)]
pub async fn about(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(about_text()).await?;
    Ok(())
}
