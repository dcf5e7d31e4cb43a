use serde::{Deserialize, Serialize};

/// Per-artist statistics. All counters default to zero and are never
/// negative; ranking is absent until the competition assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtistStats {
    pub total_votes: u64,
    pub followers: u64,
    pub hashtag_mentions: u64,
    pub performance_count: u32,
    pub ranking: Option<u32>,
}

/// Per-team statistics. `total_votes` is the stored aggregate; when it is
/// zero the member rollup is used instead (see the stat aggregator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStats {
    pub total_votes: u64,
    pub wins: u32,
    pub performances: u32,
}

/// Hashtag performance metrics over standard windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngagementMetrics {
    pub daily: u64,
    pub weekly: u64,
    pub monthly: u64,
    pub total_engagement: u64,
    pub average_engagement: f64,
    pub trending: bool,
}
