//! Player statistics resolution: upstream lookup, normalization and the
//! demo-mode fallback.

use crate::client::TrackerClient;
use crate::demo::demo_record;
use crate::models::{ProfileEnvelope, Segment, StatKey};
use siege_common::{
    OperatorPick, Platform, Playlist, RankInfo, Result, SiegeError, StatsRecord,
    DEFAULT_TOP_ATTACKER, DEFAULT_TOP_DEFENDER,
};
use siege_config::TrackerConfig;
use tracing::{debug, info, instrument, warn};

const KD_KEYS: &[StatKey] = &[StatKey::Kd, StatKey::Kdr];
const WIN_LOSS_KEYS: &[StatKey] = &[StatKey::WlPercentage, StatKey::WinLossRatio];
const CURRENT_RANK_KEYS: &[StatKey] = &[StatKey::RankName, StatKey::Rank];
const PEAK_RANK_KEYS: &[StatKey] = &[StatKey::MaxRankName, StatKey::PeakRank];

/// Resolves a player handle into a normalized [`StatsRecord`].
#[derive(Debug, Clone)]
pub struct StatsResolver {
    client: TrackerClient,
    demo_mode: bool,
}

impl StatsResolver {
    /// Create a resolver from the tracker configuration.
    ///
    /// Without an API key the resolver only starts in demo mode, where every
    /// lookup is answered with demo data; otherwise this fails with a
    /// configuration error.
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        let client = TrackerClient::new(config)?;

        if !client.has_api_key() {
            if !config.demo_mode {
                return Err(SiegeError::config(
                    "Tracker API key is not configured and demo mode is off",
                ));
            }
            warn!("No tracker API key configured, serving demo data only");
        }

        Ok(Self {
            client,
            demo_mode: config.demo_mode,
        })
    }

    /// Whether failures fall back to demo data.
    pub const fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    /// Look up a player's statistics.
    ///
    /// `playlist` only labels the lookup: the upstream exposes a single
    /// aggregate overview, so every playlist reads the same resource.
    #[instrument(skip(self), fields(platform = %platform, playlist = %playlist))]
    pub async fn fetch(
        &self,
        handle: &str,
        platform: Platform,
        playlist: Playlist,
    ) -> Result<StatsRecord> {
        if self.demo_mode && !self.client.has_api_key() {
            debug!("No API key, answering with demo data");
            return Ok(demo_record(handle));
        }

        match self.client.fetch_profile(platform, handle).await {
            Ok(envelope) => {
                info!("Fetched profile");
                Ok(normalize(handle, &envelope))
            }
            Err(e) if self.demo_mode => {
                warn!("Upstream lookup failed, answering with demo data: {}", e);
                Ok(demo_record(handle))
            }
            Err(e) => Err(e),
        }
    }
}

/// Map an upstream profile onto a [`StatsRecord`].
///
/// Never fails: missing structure leaves the matching fields empty, and the
/// username falls back to `handle`.
pub fn normalize(handle: &str, envelope: &ProfileEnvelope) -> StatsRecord {
    let username = envelope.handle().unwrap_or(handle).to_string();

    let Some(overview) = envelope.overview() else {
        return StatsRecord {
            top_attacker: Some(operator_pick(DEFAULT_TOP_ATTACKER.to_string())),
            top_defender: Some(operator_pick(DEFAULT_TOP_DEFENDER.to_string())),
            ..StatsRecord::empty(username)
        };
    };

    StatsRecord {
        username,
        time_played: overview.text(StatKey::TimePlayed),
        kills: overview.integer(StatKey::Kills),
        deaths: overview.integer(StatKey::Deaths),
        kd: overview.first_stat(KD_KEYS),
        win_loss_percent: overview.first_stat(WIN_LOSS_KEYS),
        rating: overview.integer(StatKey::TrnRating).filter(|r| *r != 0),
        current_rank: rank(overview, CURRENT_RANK_KEYS, StatKey::Mmr),
        peak_rank: rank(overview, PEAK_RANK_KEYS, StatKey::MaxMmr),
        top_attacker: Some(top_operator(overview, StatKey::TopAttacker, DEFAULT_TOP_ATTACKER)),
        top_defender: Some(top_operator(overview, StatKey::TopDefender, DEFAULT_TOP_DEFENDER)),
    }
}

// Both halves must be present; a rank name without points is dropped.
fn rank(overview: &Segment, name_keys: &[StatKey], points_key: StatKey) -> Option<RankInfo> {
    let name = overview.first_text(name_keys)?;
    let points = overview.integer(points_key)?;
    Some(RankInfo::new(name, points))
}

fn top_operator(overview: &Segment, key: StatKey, fallback: &str) -> OperatorPick {
    operator_pick(overview.text(key).unwrap_or_else(|| fallback.to_string()))
}

// Live records carry no ranking detail, so the line is the name itself.
fn operator_pick(name: String) -> OperatorPick {
    OperatorPick {
        line: Some(name.clone()),
        name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use siege_common::test_utils::tracker_fixtures;
    use siege_common::StatValue;

    fn envelope(value: serde_json::Value) -> ProfileEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_normalize_full_profile() {
        let record = normalize("input", &envelope(tracker_fixtures::full_profile()));

        assert_eq!(record.username, "Beaulo.TSM");
        assert_eq!(record.time_played.as_deref(), Some("5d 20h 56m"));
        assert_eq!(record.kills, Some(2010));
        assert_eq!(record.deaths, Some(1500));
        assert_eq!(record.kd, Some(StatValue::from("1.34")));
        assert_eq!(record.win_loss_percent, Some(StatValue::from("55.1%")));
        assert_eq!(record.rating, Some(2450));
        assert_eq!(record.current_rank, Some(RankInfo::new("Diamond II", 4250)));
        assert_eq!(record.peak_rank, Some(RankInfo::new("Diamond I", 4520)));
        assert_eq!(record.top_attacker, Some(OperatorPick::with_line("Thermite", "Thermite")));
        assert_eq!(record.top_defender.unwrap().name, "Nøkk");
    }

    #[test]
    fn test_normalize_public_tier_uses_alternates_and_defaults() {
        let record = normalize("input", &envelope(tracker_fixtures::public_tier_profile()));

        assert_eq!(record.username, "PublicPlayer");
        assert_eq!(record.kills, Some(100));
        assert_eq!(record.kd, Some(StatValue::Number(1.25)));
        assert_eq!(record.win_loss_percent, Some(StatValue::from("0.51")));
        assert!(record.rating.is_none());
        assert!(record.current_rank.is_none());
        assert!(record.peak_rank.is_none());
        assert_eq!(record.top_attacker.unwrap().name, DEFAULT_TOP_ATTACKER);
        assert_eq!(record.top_defender.unwrap().name, DEFAULT_TOP_DEFENDER);
    }

    #[test]
    fn test_rank_never_partially_populated() {
        let record = normalize("input", &envelope(tracker_fixtures::rank_without_points_profile()));
        assert!(record.current_rank.is_none());
        assert!(record.peak_rank.is_none());
        assert_eq!(record.username, "input");
    }

    #[test]
    fn test_rank_name_alternate_key() {
        let record = normalize(
            "input",
            &envelope(json!({ "data": { "segments": [ { "type": "overview", "stats": {
                "rank": { "displayValue": "Copper V" },
                "mmr": { "value": 1000 },
                "peakRank": { "displayValue": "Bronze I" },
                "maxMmr": { "displayValue": "1,600" }
            }}]}})),
        );
        assert_eq!(record.current_rank, Some(RankInfo::new("Copper V", 1000)));
        assert_eq!(record.peak_rank, Some(RankInfo::new("Bronze I", 1600)));
    }

    #[test]
    fn test_zero_rating_is_absent() {
        let record = normalize(
            "input",
            &envelope(json!({ "data": { "segments": [ { "stats": {
                "trnRating": { "value": 0, "displayValue": "0" }
            }}]}})),
        );
        assert!(record.rating.is_none());
    }

    #[test]
    fn test_empty_payload_still_produces_record() {
        let record = normalize("fallback-handle", &ProfileEnvelope::default());
        assert_eq!(record.username, "fallback-handle");
        assert!(record.kills.is_none());
        assert!(record.current_rank.is_none());
        assert_eq!(
            record.top_attacker,
            Some(OperatorPick::with_line(DEFAULT_TOP_ATTACKER, DEFAULT_TOP_ATTACKER))
        );
    }

    #[test]
    fn test_default_operators_same_shape_with_or_without_segments() {
        let without = normalize("p", &ProfileEnvelope::default());
        let with = normalize(
            "p",
            &envelope(json!({ "data": { "segments": [ { "type": "overview", "stats": {} } ] } })),
        );
        assert_eq!(without.top_attacker, with.top_attacker);
        assert_eq!(without.top_defender, with.top_defender);
        assert_eq!(
            with.top_defender.as_ref().map(OperatorPick::display_line),
            Some(DEFAULT_TOP_DEFENDER)
        );
    }

    #[test]
    fn test_malformed_stat_keeps_rest_of_record() {
        let body = r#"{"data":{"platformInfo":{"platformUserHandle":"Real.Handle"},
            "segments":[{"type":"overview","stats":{
                "kills":{"value":2010,"displayValue":"2,010"},
                "deaths":null,
                "kd":1500}}]}}"#;

        let record = normalize("input", &TrackerClient::parse_profile(body));
        assert_eq!(record.username, "Real.Handle");
        assert_eq!(record.kills, Some(2010));
        assert!(record.deaths.is_none());
        assert!(record.kd.is_none());
    }

    #[test]
    fn test_missing_key_without_demo_mode_fails_fast() {
        let err = StatsResolver::new(&TrackerConfig::default()).unwrap_err();
        assert!(err.is_config());
    }

    #[tokio::test]
    async fn test_missing_key_in_demo_mode_short_circuits() {
        // Unroutable base URL: any network attempt would fail, demo or not.
        let resolver = StatsResolver::new(&TrackerConfig {
            base_url: "http://127.0.0.1:9/v2".to_string(),
            demo_mode: true,
            ..TrackerConfig::default()
        })
        .unwrap();

        let record = resolver
            .fetch("whoever", Platform::Xbl, Playlist::Arcade)
            .await
            .unwrap();
        assert_eq!(record, demo_record("whoever"));
    }
}
