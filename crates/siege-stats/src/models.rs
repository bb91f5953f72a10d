//! Typed view of the Tracker Network profile response.
//!
//! Every field is optional and read leniently: a field of the wrong shape
//! becomes absent without affecting its siblings. Consumers read stats
//! through [`Segment::stat`] instead of chained lookups on raw JSON.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use siege_common::StatValue;
use std::collections::HashMap;

/// Stat keys read from the overview segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKey {
    /// Preformatted total play time.
    TimePlayed,
    /// Total kills.
    Kills,
    /// Total deaths.
    Deaths,
    /// Kill/death ratio.
    Kd,
    /// Kill/death ratio, alternate key.
    Kdr,
    /// Win percentage.
    WlPercentage,
    /// Win ratio, alternate key.
    WinLossRatio,
    /// Tracker Network rating.
    TrnRating,
    /// Current rank name.
    RankName,
    /// Current rank name, alternate key.
    Rank,
    /// Current rank points.
    Mmr,
    /// Peak rank name.
    MaxRankName,
    /// Peak rank name, alternate key.
    PeakRank,
    /// Peak rank points.
    MaxMmr,
    /// Most played attacker.
    TopAttacker,
    /// Most played defender.
    TopDefender,
}

impl StatKey {
    /// Key as it appears in the `stats` object.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TimePlayed => "timePlayed",
            Self::Kills => "kills",
            Self::Deaths => "deaths",
            Self::Kd => "kd",
            Self::Kdr => "kdr",
            Self::WlPercentage => "wlPercentage",
            Self::WinLossRatio => "winLossRatio",
            Self::TrnRating => "trnRating",
            Self::RankName => "rankName",
            Self::Rank => "rank",
            Self::Mmr => "mmr",
            Self::MaxRankName => "maxRankName",
            Self::PeakRank => "peakRank",
            Self::MaxMmr => "maxMmr",
            Self::TopAttacker => "topAttacker",
            Self::TopDefender => "topDefender",
        }
    }
}

/// Top-level response body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileEnvelope {
    /// Profile payload.
    #[serde(deserialize_with = "lenient")]
    pub data: Option<ProfileData>,
}

/// Profile payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileData {
    /// Platform account details.
    #[serde(deserialize_with = "lenient")]
    pub platform_info: Option<PlatformInfo>,
    /// Tracker Network account details.
    #[serde(deserialize_with = "lenient")]
    pub user_info: Option<UserInfo>,
    /// Stat segments; the overview segment aggregates every playlist.
    #[serde(deserialize_with = "lenient_list")]
    pub segments: Option<Vec<Segment>>,
}

/// Platform account details.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlatformInfo {
    /// Handle as shown on the platform.
    #[serde(deserialize_with = "lenient")]
    pub platform_user_handle: Option<String>,
}

/// Tracker Network account details.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    /// Tracker Network username.
    #[serde(deserialize_with = "lenient")]
    pub username: Option<String>,
}

/// A group of stats, e.g. the overview or one playlist.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Segment {
    /// Segment type such as `overview`.
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    /// Stats keyed by name.
    #[serde(deserialize_with = "lenient_map")]
    pub stats: Option<HashMap<String, StatEntry>>,
}

/// One stat: a raw value and a human formatted one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatEntry {
    /// Raw value, usually a number.
    pub value: Option<Value>,
    /// Human formatted value.
    pub display_value: Option<Value>,
}

impl ProfileEnvelope {
    /// The segment holding aggregate stats: the first one typed `overview`,
    /// else the first segment.
    pub fn overview(&self) -> Option<&Segment> {
        let segments = self.data.as_ref()?.segments.as_deref()?;
        segments
            .iter()
            .find(|segment| {
                segment
                    .kind
                    .as_deref()
                    .is_some_and(|kind| kind.eq_ignore_ascii_case("overview"))
            })
            .or_else(|| segments.first())
    }

    /// Display handle reported by the upstream, if any.
    pub fn handle(&self) -> Option<&str> {
        let data = self.data.as_ref()?;
        data.platform_info
            .as_ref()
            .and_then(|info| non_blank(info.platform_user_handle.as_deref()))
            .or_else(|| {
                data.user_info
                    .as_ref()
                    .and_then(|info| non_blank(info.username.as_deref()))
            })
    }
}

impl Segment {
    /// Reads a stat, preferring its display value over the raw value.
    pub fn stat(&self, key: StatKey) -> Option<StatValue> {
        self.entry(key).and_then(StatEntry::preferred)
    }

    /// Reads the first stat present among `keys`.
    pub fn first_stat(&self, keys: &[StatKey]) -> Option<StatValue> {
        keys.iter().find_map(|key| self.stat(*key))
    }

    /// Reads a stat as a whole number.
    pub fn integer(&self, key: StatKey) -> Option<i64> {
        self.entry(key).and_then(StatEntry::integer)
    }

    /// Reads a stat as text.
    pub fn text(&self, key: StatKey) -> Option<String> {
        self.stat(key).map(|value| value.to_string())
    }

    /// Reads the first textual stat present among `keys`.
    pub fn first_text(&self, keys: &[StatKey]) -> Option<String> {
        keys.iter().find_map(|key| self.text(*key))
    }

    fn entry(&self, key: StatKey) -> Option<&StatEntry> {
        self.stats.as_ref()?.get(key.as_str())
    }
}

impl StatEntry {
    /// Display value when usable, else the raw value.
    pub fn preferred(&self) -> Option<StatValue> {
        self.display_value
            .as_ref()
            .and_then(to_stat_value)
            .or_else(|| self.value.as_ref().and_then(to_stat_value))
    }

    /// Whole number from the display value, else from the raw value.
    pub fn integer(&self) -> Option<i64> {
        [&self.display_value, &self.value]
            .into_iter()
            .flatten()
            .filter_map(to_stat_value)
            .find_map(|value| value.as_integer())
    }
}

// A value of the wrong shape reads as the default instead of failing the
// enclosing object.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

// Per-element leniency: one malformed segment does not drop the others.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

// Per-entry leniency: a null or scalar stat reads as an empty entry.
fn lenient_map<'de, D, T>(deserializer: D) -> Result<Option<HashMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(entries) => Some(
            entries
                .into_iter()
                .map(|(key, entry)| (key, serde_json::from_value(entry).unwrap_or_default()))
                .collect(),
        ),
        _ => None,
    })
}

fn to_stat_value(value: &Value) -> Option<StatValue> {
    match value {
        Value::String(text) => non_blank(Some(text.as_str())).map(StatValue::from),
        Value::Number(number) => number.as_f64().map(StatValue::Number),
        _ => None,
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}
