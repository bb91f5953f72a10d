//! Test utilities and shared fixtures for SiegeBot.
//!
//! Available to other crates through the `testing` feature.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Discord-related test utilities.
pub mod discord_fixtures {
    use crate::UserId;

    /// Create a test user ID.
    pub fn test_user_id() -> UserId {
        UserId(987_654_321_098_765_432)
    }

    /// A user ID that is never linked to an account.
    pub fn unlinked_user_id() -> UserId {
        UserId(111_111_111_111_111_111)
    }
}

/// Upstream profile payloads shaped like the Tracker Network API.
pub mod tracker_fixtures {
    use serde_json::{json, Value};

    /// A full profile with an overview segment preceded by a playlist segment.
    pub fn full_profile() -> Value {
        json!({
            "data": {
                "platformInfo": { "platformUserHandle": "Beaulo.TSM" },
                "userInfo": { "username": "beaulo-user" },
                "segments": [
                    {
                        "type": "playlist",
                        "stats": {
                            "kills": { "value": 12, "displayValue": "12" }
                        }
                    },
                    {
                        "type": "overview",
                        "stats": {
                            "timePlayed": { "value": 507_360, "displayValue": "5d 20h 56m" },
                            "kills": { "value": 2010, "displayValue": "2,010" },
                            "deaths": { "value": 1500, "displayValue": "1,500" },
                            "kd": { "value": 1.34, "displayValue": "1.34" },
                            "wlPercentage": { "value": 55.1, "displayValue": "55.1%" },
                            "trnRating": { "value": 2450, "displayValue": "2,450" },
                            "rankName": { "value": null, "displayValue": "Diamond II" },
                            "mmr": { "value": 4250, "displayValue": "4,250" },
                            "maxRankName": { "value": null, "displayValue": "Diamond I" },
                            "maxMmr": { "value": 4520, "displayValue": "4,520" },
                            "topAttacker": { "displayValue": "Thermite" },
                            "topDefender": { "displayValue": "Nøkk" }
                        }
                    }
                ]
            }
        })
    }

    /// A public-tier profile: no rank, rating or operator breakdown.
    pub fn public_tier_profile() -> Value {
        json!({
            "data": {
                "platformInfo": { "platformUserHandle": "PublicPlayer" },
                "segments": [
                    {
                        "type": "overview",
                        "stats": {
                            "kills": { "value": 100 },
                            "deaths": { "value": 80 },
                            "kdr": { "value": 1.25 },
                            "winLossRatio": { "displayValue": "0.51" }
                        }
                    }
                ]
            }
        })
    }

    /// A profile with a rank name but no rank points.
    pub fn rank_without_points_profile() -> Value {
        json!({
            "data": {
                "segments": [
                    {
                        "type": "Overview",
                        "stats": {
                            "rankName": { "displayValue": "Gold III" },
                            "maxMmr": { "value": 3100 }
                        }
                    }
                ]
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_fixtures_are_well_formed() {
        let profile = tracker_fixtures::full_profile();
        assert_eq!(profile["data"]["segments"].as_array().map(Vec::len), Some(2));
        assert!(discord_fixtures::test_user_id() != discord_fixtures::unlinked_user_id());
    }
}
