//! Slash command option choices.

use siege_common::{Platform, Playlist};

/// Platform option shown in the command menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum PlatformChoice {
    /// PlayStation Network.
    #[name = "PlayStation"]
    Psn,
    /// Xbox Live.
    #[name = "Xbox"]
    Xbl,
    /// Ubisoft Connect on PC.
    #[name = "PC (Uplay)"]
    Uplay,
}

impl From<PlatformChoice> for Platform {
    fn from(choice: PlatformChoice) -> Self {
        match choice {
            PlatformChoice::Psn => Self::Psn,
            PlatformChoice::Xbl => Self::Xbl,
            PlatformChoice::Uplay => Self::Uplay,
        }
    }
}

/// Playlist option shown in the command menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum PlaylistChoice {
    /// Aggregate over every playlist.
    #[name = "All Playlists"]
    All,
    /// Ranked matches.
    #[name = "Ranked"]
    Ranked,
    /// Unranked matches.
    #[name = "Unranked"]
    Unranked,
    /// Quick match.
    #[name = "Quick Match"]
    Quick,
    /// Dual Front mode.
    #[name = "Dual Front"]
    DualFront,
    /// Siege Cup.
    #[name = "Siege Cup"]
    SiegeCup,
    /// Arcade playlists.
    #[name = "Arcade"]
    Arcade,
}

impl From<PlaylistChoice> for Playlist {
    fn from(choice: PlaylistChoice) -> Self {
        match choice {
            PlaylistChoice::All => Self::All,
            PlaylistChoice::Ranked => Self::Ranked,
            PlaylistChoice::Unranked => Self::Unranked,
            PlaylistChoice::Quick => Self::Quick,
            PlaylistChoice::DualFront => Self::DualFront,
            PlaylistChoice::SiegeCup => Self::SiegeCup,
            PlaylistChoice::Arcade => Self::Arcade,
        }
    }
}
