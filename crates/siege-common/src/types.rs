//! Common type definitions and domain modeling for player statistics.

use crate::error::SiegeError;
use crate::utils::format_thousands;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operator shown as top attacker when the upstream has no operator breakdown.
pub const DEFAULT_TOP_ATTACKER: &str = "Ash";

/// Operator shown as top defender when the upstream has no operator breakdown.
pub const DEFAULT_TOP_DEFENDER: &str = "Jäger";

/// A Discord user ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gaming platform a player handle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// PlayStation Network.
    #[default]
    Psn,
    /// Xbox Live.
    Xbl,
    /// Ubisoft Connect on PC.
    Uplay,
}

impl Platform {
    /// Every supported platform, in menu order.
    pub const ALL: [Self; 3] = [Self::Psn, Self::Xbl, Self::Uplay];

    /// Wire code used in upstream request paths.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Psn => "psn",
            Self::Xbl => "xbl",
            Self::Uplay => "uplay",
        }
    }

    /// Human readable platform name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Psn => "PlayStation",
            Self::Xbl => "Xbox",
            Self::Uplay => "PC (Uplay)",
        }
    }

    /// Short uppercase tag used in card titles.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Psn => "PSN",
            Self::Xbl => "XBL",
            Self::Uplay => "UPLAY",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Platform {
    type Err = SiegeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|platform| platform.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                SiegeError::validation_field(format!("Unknown platform '{wanted}'"), "platform")
            })
    }
}

/// Game mode category. Only used to label output; it never changes which
/// upstream resource is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Playlist {
    /// Aggregate over every playlist.
    #[default]
    All,
    /// Ranked matches.
    Ranked,
    /// Unranked matches.
    Unranked,
    /// Quick match.
    Quick,
    /// Dual Front mode.
    #[serde(rename = "dualfront")]
    DualFront,
    /// Siege Cup.
    #[serde(rename = "siegecup")]
    SiegeCup,
    /// Arcade playlists.
    Arcade,
}

impl Playlist {
    /// Every playlist, in menu order.
    pub const ALL: [Self; 7] = [
        Self::All,
        Self::Ranked,
        Self::Unranked,
        Self::Quick,
        Self::DualFront,
        Self::SiegeCup,
        Self::Arcade,
    ];

    /// Lowercase identifier.
    pub const fn code(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Ranked => "ranked",
            Self::Unranked => "unranked",
            Self::Quick => "quick",
            Self::DualFront => "dualfront",
            Self::SiegeCup => "siegecup",
            Self::Arcade => "arcade",
        }
    }

    /// Display title.
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Playlists",
            Self::Ranked => "Ranked",
            Self::Unranked => "Unranked",
            Self::Quick => "Quick Match",
            Self::DualFront => "Dual Front",
            Self::SiegeCup => "Siege Cup",
            Self::Arcade => "Arcade",
        }
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Playlist {
    type Err = SiegeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|playlist| playlist.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                SiegeError::validation_field(format!("Unknown playlist '{wanted}'"), "playlist")
            })
    }
}

/// A stat that the upstream reports either as preformatted text or as a
/// raw number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    /// Human formatted value such as `"1.03"` or `"52.8%"`.
    Text(String),
    /// Raw numeric value.
    Number(f64),
}

impl StatValue {
    /// Interprets the value as a whole number, ignoring thousands separators.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Text(text) => crate::utils::parse_grouped_int(text),
            #[allow(clippy::cast_possible_truncation)]
            Self::Number(n) if n.is_finite() => Some(n.round() as i64),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{n:.0}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// A ranked standing: rank name plus rank points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankInfo {
    /// Rank name, e.g. `Platinum I`.
    pub name: String,
    /// Rank points.
    pub points: i64,
}

impl RankInfo {
    /// Creates a rank entry.
    pub fn new(name: impl Into<String>, points: i64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

impl fmt::Display for RankInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {} RP", self.name, format_thousands(self.points))
    }
}

/// A most-played operator for one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorPick {
    /// Operator display name.
    pub name: String,
    /// Optional descriptive line, e.g. `Ash — Top 12%`.
    pub line: Option<String>,
}

impl OperatorPick {
    /// Creates an operator pick without a descriptive line.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            line: None,
        }
    }

    /// Creates an operator pick with a descriptive line.
    pub fn with_line(name: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            line: Some(line.into()),
        }
    }

    /// Line to display, falling back to the operator name.
    pub fn display_line(&self) -> &str {
        self.line.as_deref().unwrap_or(&self.name)
    }
}

/// Normalized result of a player statistics lookup.
///
/// Every field except `username` is independently optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    /// Resolved display handle.
    pub username: String,
    /// Preformatted total play time.
    pub time_played: Option<String>,
    /// Total kills.
    pub kills: Option<i64>,
    /// Total deaths.
    pub deaths: Option<i64>,
    /// Kill/death ratio.
    pub kd: Option<StatValue>,
    /// Win percentage.
    pub win_loss_percent: Option<StatValue>,
    /// External rating score.
    pub rating: Option<i64>,
    /// Current ranked standing.
    pub current_rank: Option<RankInfo>,
    /// Highest ranked standing this season.
    pub peak_rank: Option<RankInfo>,
    /// Top attacking operator.
    pub top_attacker: Option<OperatorPick>,
    /// Top defending operator.
    pub top_defender: Option<OperatorPick>,
}

impl StatsRecord {
    /// A record with every optional field absent.
    pub fn empty(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            time_played: None,
            kills: None,
            deaths: None,
            kd: None,
            win_loss_percent: None,
            rating: None,
            current_rank: None,
            peak_rank: None,
            top_attacker: None,
            top_defender: None,
        }
    }

    /// Rating worth showing; zero counts as absent.
    pub fn visible_rating(&self) -> Option<i64> {
        self.rating.filter(|rating| *rating != 0)
    }
}

/// A weekly challenge entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Challenge {
    /// Challenge title.
    pub title: String,
    /// Challenge description.
    pub description: String,
}

/// Ordered list of challenges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChallengeList {
    /// Challenges in display order.
    pub items: Vec<Challenge>,
}

impl ChallengeList {
    /// An empty list.
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
