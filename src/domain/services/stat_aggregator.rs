//! Derived statistics over already-resolved entities. Everything here is a
//! pure function: no store access, no mutation.

use crate::domain::entities::{Artist, Team};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of artists whose team assignments contain `team_id`. Always
/// recomputed from the artist collection; there is no stored member count
/// to drift out of sync.
pub fn member_count(team_id: Uuid, artists: &[Artist]) -> u64 {
    artists
        .iter()
        .filter(|artist| artist.belongs_to_team(team_id))
        .count() as u64
}

/// Compact display form of a counter: "999", "1K", "1.0M". Zero renders as
/// "0". This is a visible computed contract, not styling.
pub fn format_magnitude(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.0}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Campaign-goal variant of [`format_magnitude`]: adds a billions tier for
/// fundraising targets ("1.0B" VND), otherwise identical.
pub fn format_goal_magnitude(value: u64) -> String {
    if value >= 1_000_000_000 {
        format!("{:.1}B", value as f64 / 1_000_000_000.0)
    } else {
        format_magnitude(value)
    }
}

/// Progress of one campaign goal. `percent` is the raw ratio and may exceed
/// 100 when a goal is overshot; `bar_width` is clamped to [0, 100] for
/// rendering. Both are kept so neither consumer truncates the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub percent: f64,
    pub bar_width: f64,
}

impl GoalProgress {
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.percent)
    }
}

/// A zero or missing target is degenerate, not an error: it reports 0%.
pub fn goal_progress(current: u64, target: u64) -> GoalProgress {
    if target == 0 {
        return GoalProgress {
            percent: 0.0,
            bar_width: 0.0,
        };
    }
    let percent = current as f64 / target as f64 * 100.0;
    GoalProgress {
        percent,
        bar_width: percent.clamp(0.0, 100.0),
    }
}

/// Total votes credited to a team. The stored team-level total is
/// authoritative when present (non-zero); the rollup over member votes is
/// the fallback for teams whose aggregate was never maintained.
pub fn team_vote_total(team: &Team, artists: &[Artist]) -> u64 {
    if team.stats.total_votes > 0 {
        return team.stats.total_votes;
    }
    artists
        .iter()
        .filter(|artist| artist.belongs_to_team(team.id))
        .map(|artist| artist.stats.total_votes)
        .sum()
}
