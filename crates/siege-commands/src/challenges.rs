//! Weekly challenges command.

use crate::cards::ChallengesCard;
use crate::framework::{Context, Error};
use tracing::debug;

/// Show this week's Rainbow Six Siege challenges.
#[poise::command(slash_command)]
pub async fn challenges(ctx: Context<'_>) -> Result<(), Error> {
    ctx.defer().await?;

    let source = &ctx.data().challenges;
    let list = source.list_challenges().await;
    debug!(source = source.name(), count = list.len(), "Listing challenges");

    let card = ChallengesCard::new(&list);
    ctx.send(poise::CreateReply::default().embed(card.into_embed()))
        .await?;
    Ok(())
}
