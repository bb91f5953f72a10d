//! Canned demonstration record served in demo mode.

use siege_common::{
    OperatorPick, RankInfo, StatValue, StatsRecord, DEFAULT_TOP_ATTACKER, DEFAULT_TOP_DEFENDER,
};

/// The fixed demo record. Only the username varies, echoing the requested handle.
pub fn demo_record(handle: &str) -> StatsRecord {
    StatsRecord {
        username: handle.to_string(),
        time_played: Some("5d 20h 56m".to_string()),
        kills: Some(1833),
        deaths: Some(1773),
        kd: Some(StatValue::from("1.03")),
        win_loss_percent: Some(StatValue::from("52.8")),
        rating: Some(1337),
        current_rank: Some(RankInfo::new("Platinum I", 3444)),
        peak_rank: Some(RankInfo::new("Platinum I", 3460)),
        top_attacker: Some(OperatorPick::with_line(
            DEFAULT_TOP_ATTACKER,
            format!("{DEFAULT_TOP_ATTACKER} — Top 12%"),
        )),
        top_defender: Some(OperatorPick::with_line(
            DEFAULT_TOP_DEFENDER,
            format!("{DEFAULT_TOP_DEFENDER} — Top 9%"),
        )),
    }
}
