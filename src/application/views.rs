//! View types handed to the presentation layer. Derived fields (formatted
//! strings, percentages, counts) sit alongside the raw values, never in
//! place of them, so consumers can reformat.

use crate::domain::entities::{Artist, Campaign, CampaignGoal, Event, HashtagMetric, News, Team};
use crate::domain::services::stat_aggregator::{
    format_goal_magnitude, format_magnitude, goal_progress, GoalProgress,
};
use crate::domain::value_objects::ArtistStats;
use serde::Serialize;

/// A raw counter plus its compact display form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatHighlight {
    pub raw: u64,
    pub formatted: String,
}

impl StatHighlight {
    pub fn of(raw: u64) -> Self {
        Self {
            formatted: format_magnitude(raw),
            raw,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistStatsView {
    pub votes: StatHighlight,
    pub followers: StatHighlight,
    pub hashtag_mentions: StatHighlight,
    pub performance_count: u32,
    pub ranking: Option<u32>,
}

impl ArtistStatsView {
    pub fn from_stats(stats: &ArtistStats) -> Self {
        Self {
            votes: StatHighlight::of(stats.total_votes),
            followers: StatHighlight::of(stats.followers),
            hashtag_mentions: StatHighlight::of(stats.hashtag_mentions),
            performance_count: stats.performance_count,
            ranking: stats.ranking,
        }
    }
}

/// One campaign goal with its progress and goal-tier formatted numbers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalView {
    pub description: String,
    pub target: u64,
    pub current: u64,
    pub unit: Option<String>,
    pub achieved: bool,
    pub progress: GoalProgress,
    pub formatted_current: String,
    pub formatted_target: String,
}

impl GoalView {
    pub fn from_goal(goal: &CampaignGoal) -> Self {
        Self {
            description: goal.description.clone(),
            target: goal.target,
            current: goal.current,
            unit: goal.unit.clone(),
            achieved: goal.achieved,
            progress: goal_progress(goal.current, goal.target),
            formatted_current: format_goal_magnitude(goal.current),
            formatted_target: format_goal_magnitude(goal.target),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignCard {
    pub campaign: Campaign,
    pub type_label: &'static str,
    pub badge_class: &'static str,
    pub goals: Vec<GoalView>,
}

impl CampaignCard {
    pub fn from_campaign(campaign: Campaign) -> Self {
        Self {
            type_label: campaign.campaign_type.display_name(),
            badge_class: campaign.campaign_type.badge_class(),
            goals: campaign.goals.iter().map(GoalView::from_goal).collect(),
            campaign,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
    pub artist: Artist,
    pub stats: ArtistStatsView,
    pub upcoming_events: Vec<Event>,
    pub active_campaigns: Vec<CampaignCard>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProfile {
    pub team: Team,
    pub captain: Option<Artist>,
    pub members: Vec<Artist>,
    /// Recomputed from the artist collection, never a stored field.
    pub member_count: u64,
    pub total_votes: StatHighlight,
    pub wins: u32,
    pub performances: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDirectoryEntry {
    pub team: Team,
    pub member_count: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Homepage {
    pub featured_artists: Vec<Artist>,
    pub upcoming_events: Vec<Event>,
    pub active_campaigns: Vec<CampaignCard>,
    pub latest_news: Vec<News>,
    pub trending_hashtags: Vec<HashtagMetric>,
}
