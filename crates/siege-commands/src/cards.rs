//! Embed layouts for command replies.
//!
//! Cards are built as plain data first so their layout can be checked
//! without a Discord connection, then turned into a [`CreateEmbed`].

use poise::serenity_prelude::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};
use siege_common::{format_thousands, truncate_string, ChallengeList, Platform, Playlist, StatsRecord};
use siege_stats::OperatorCatalog;

/// Accent colour shared by every card.
pub const CARD_COLOUR: u32 = 0xF0_B2_32;
/// Card author line.
pub const CARD_AUTHOR: &str = "SiegeBot";
/// Card footer text.
pub const CARD_FOOTER: &str = "r6TrackerBot";
/// Placeholder for absent values.
pub const MISSING_VALUE: &str = "N/A";
/// Zero-width space, used for spacer fields.
pub const SPACER: &str = "\u{200B}";

/// Reply sent when a stats lookup fails.
pub const STATS_ERROR_MESSAGE: &str =
    "❌ API error — check the API key, the username, the platform and the playlist.";
/// Ephemeral reply when no handle was given or linked.
pub const MISSING_NAME_MESSAGE: &str =
    "No name found. Use `/stats name:<username>` or link your account in the users file.";

const STATS_DESCRIPTION: &str = "Summary stats and top operators (attacker/defender).";
const CHALLENGES_TITLE: &str = "This Week's Challenges";
const NO_CHALLENGES: &str = "No weekly challenges found right now.";
const UNTITLED: &str = "Untitled";

// Discord rejects longer embed descriptions.
const MAX_DESCRIPTION_CHARS: usize = 4096;

/// One embed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: String,
    /// Whether the field shares a row.
    pub inline: bool,
}

impl CardField {
    fn inline(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline: true,
        }
    }

    fn block(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline: false,
        }
    }

    fn spacer() -> Self {
        Self::inline(SPACER, SPACER)
    }
}

/// Layout of the `/stats` reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCard {
    /// Card title.
    pub title: String,
    /// Card description.
    pub description: String,
    /// Fields in display order.
    pub fields: Vec<CardField>,
    /// Top attacker image.
    pub thumbnail: Option<String>,
    /// Top defender image.
    pub image: Option<String>,
}

impl StatsCard {
    /// Lay out a stats record.
    pub fn new(
        record: &StatsRecord,
        platform: Platform,
        playlist: Playlist,
        operators: &OperatorCatalog,
    ) -> Self {
        let title = format!(
            "R6 — {} ({} • {})",
            record.username,
            platform.tag(),
            playlist.label()
        );

        let mut fields = vec![
            CardField::inline("Username", record.username.clone()),
            CardField::inline("Time Played", or_missing(record.time_played.as_ref())),
            CardField::spacer(),
            CardField::inline("Kills", or_missing(record.kills.map(format_thousands).as_ref())),
            CardField::inline("Deaths", or_missing(record.deaths.map(format_thousands).as_ref())),
            CardField::inline("K/D Ratio", or_missing(record.kd.as_ref())),
        ];

        if let Some(rating) = record.visible_rating() {
            fields.push(CardField::inline("TRN Elo", format_thousands(rating)));
        }

        fields.extend([
            CardField::inline("W/L %", or_missing(record.win_loss_percent.as_ref())),
            CardField::spacer(),
            CardField::inline("Current Rank", or_missing(record.current_rank.as_ref())),
            CardField::inline("Peak Rank", or_missing(record.peak_rank.as_ref())),
        ]);

        if let Some(attacker) = &record.top_attacker {
            fields.push(CardField::block("Top Operator (Attacker)", attacker.display_line()));
        }
        if let Some(defender) = &record.top_defender {
            fields.push(CardField::block("Top Operator (Defender)", defender.display_line()));
        }

        Self {
            title,
            description: STATS_DESCRIPTION.to_string(),
            fields,
            thumbnail: operators.image_for(record.top_attacker.as_ref()),
            image: operators.image_for(record.top_defender.as_ref()),
        }
    }

    /// Field by name, for inspection.
    pub fn field(&self, name: &str) -> Option<&CardField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Render into a Discord embed.
    pub fn into_embed(self) -> CreateEmbed {
        let mut embed = base_embed()
            .author(CreateEmbedAuthor::new(CARD_AUTHOR))
            .title(self.title)
            .description(self.description)
            .fields(
                self.fields
                    .into_iter()
                    .map(|field| (field.name, field.value, field.inline)),
            );

        if let Some(url) = self.thumbnail {
            embed = embed.thumbnail(url);
        }
        if let Some(url) = self.image {
            embed = embed.image(url);
        }
        embed
    }
}

/// Layout of the `/challenges` reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengesCard {
    /// Card description listing every challenge.
    pub description: String,
}

impl ChallengesCard {
    /// Lay out a challenge list.
    pub fn new(list: &ChallengeList) -> Self {
        let description = if list.is_empty() {
            NO_CHALLENGES.to_string()
        } else {
            let body = list
                .items
                .iter()
                .map(|challenge| {
                    let title = challenge.title.trim();
                    let title = if title.is_empty() { UNTITLED } else { title };
                    format!("**{title}**\n{}", challenge.description)
                })
                .collect::<Vec<_>>()
                .join("\n\n");
            truncate_string(&body, MAX_DESCRIPTION_CHARS)
        };

        Self { description }
    }

    /// Render into a Discord embed.
    pub fn into_embed(self) -> CreateEmbed {
        base_embed()
            .title(CHALLENGES_TITLE)
            .description(self.description)
    }
}

fn base_embed() -> CreateEmbed {
    CreateEmbed::new()
        .colour(CARD_COLOUR)
        .footer(CreateEmbedFooter::new(CARD_FOOTER))
}

fn or_missing<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use siege_common::{Challenge, OperatorPick, RankInfo, StatValue};

    fn catalog() -> OperatorCatalog {
        OperatorCatalog::new("http://images.local")
    }

    fn names(card: &StatsCard) -> Vec<&str> {
        card.fields.iter().map(|field| field.name.as_str()).collect()
    }

    #[test]
    fn test_stats_card_full_layout() {
        let record = StatsRecord {
            time_played: Some("5d 20h 56m".to_string()),
            kills: Some(1833),
            deaths: Some(1773),
            kd: Some(StatValue::from("1.03")),
            win_loss_percent: Some(StatValue::from("52.8")),
            rating: Some(1337),
            current_rank: Some(RankInfo::new("Platinum I", 3444)),
            peak_rank: Some(RankInfo::new("Platinum I", 3460)),
            top_attacker: Some(OperatorPick::with_line("Ash", "Ash — Top 12%")),
            top_defender: Some(OperatorPick::with_line("Jäger", "Jäger — Top 9%")),
            ..StatsRecord::empty("Player")
        };

        let card = StatsCard::new(&record, Platform::Xbl, Playlist::SiegeCup, &catalog());

        assert_eq!(card.title, "R6 — Player (XBL • Siege Cup)");
        assert_eq!(
            names(&card),
            vec![
                "Username",
                "Time Played",
                SPACER,
                "Kills",
                "Deaths",
                "K/D Ratio",
                "TRN Elo",
                "W/L %",
                SPACER,
                "Current Rank",
                "Peak Rank",
                "Top Operator (Attacker)",
                "Top Operator (Defender)",
            ]
        );
        assert_eq!(card.field("Kills").unwrap().value, "1,833");
        assert_eq!(card.field("Current Rank").unwrap().value, "Platinum I — 3,444 RP");
        assert_eq!(card.field("Top Operator (Defender)").unwrap().value, "Jäger — Top 9%");
        assert!(!card.field("Top Operator (Attacker)").unwrap().inline);
        assert_eq!(card.thumbnail.as_deref(), Some("http://images.local/ash.png"));
        assert_eq!(card.image.as_deref(), Some("http://images.local/jager.png"));
    }

    #[test]
    fn test_stats_card_sparse_record() {
        let record = StatsRecord {
            rating: Some(0),
            ..StatsRecord::empty("Sparse")
        };

        let card = StatsCard::new(&record, Platform::Psn, Playlist::All, &catalog());

        assert_eq!(card.title, "R6 — Sparse (PSN • All Playlists)");
        assert!(card.field("TRN Elo").is_none());
        assert!(card.field("Top Operator (Attacker)").is_none());
        assert_eq!(card.field("Kills").unwrap().value, MISSING_VALUE);
        assert_eq!(card.field("Peak Rank").unwrap().value, MISSING_VALUE);
        assert!(card.thumbnail.is_none());
        assert!(card.image.is_none());
    }

    #[test]
    fn test_unknown_operator_has_no_image() {
        let record = StatsRecord {
            top_attacker: Some(OperatorPick::named("Mystery Op")),
            ..StatsRecord::empty("Player")
        };

        let card = StatsCard::new(&record, Platform::Uplay, Playlist::Ranked, &catalog());
        assert_eq!(card.field("Top Operator (Attacker)").unwrap().value, "Mystery Op");
        assert!(card.thumbnail.is_none());
    }

    #[test]
    fn test_challenges_card_empty() {
        let card = ChallengesCard::new(&ChallengeList::empty());
        assert_eq!(card.description, NO_CHALLENGES);
    }

    #[test]
    fn test_challenges_card_items() {
        let list = ChallengeList {
            items: vec![
                Challenge {
                    title: "Breacher".to_string(),
                    description: "Destroy 20 walls".to_string(),
                },
                Challenge {
                    title: "  ".to_string(),
                    description: "Win 3 rounds".to_string(),
                },
            ],
        };

        let card = ChallengesCard::new(&list);
        assert_eq!(
            card.description,
            "**Breacher**\nDestroy 20 walls\n\n**Untitled**\nWin 3 rounds"
        );
    }
}
