use crate::domain::entities::Artist;
use crate::domain::value_objects::{CampaignType, HasId, HashtagRef, ImageRef, Ref, Slug};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: Uuid,
    pub title: String,
    pub slug: Slug,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    /// Artists this campaign supports.
    pub artists: Vec<Ref<Artist>>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Manual override of the date-derived active state. `None` means the
    /// campaign is active exactly while `now` falls inside
    /// `[start_date, end_date]`.
    pub active_override: Option<bool>,
    pub image: Option<ImageRef>,
    pub hashtags: Vec<HashtagRef>,
    pub goals: Vec<CampaignGoal>,
    /// How fans participate, step by step.
    pub instructions: Option<String>,
    pub external_links: Vec<ExternalLink>,
    pub updates: Vec<CampaignUpdate>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignGoal {
    pub description: String,
    pub target: u64,
    pub current: u64,
    /// e.g., "votes", "followers", "VND".
    pub unit: Option<String>,
    pub achieved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignUpdate {
    pub date: DateTime<Utc>,
    pub message: String,
}

impl Campaign {
    /// Effective active state: the manual override wins when set, otherwise
    /// the campaign is active while `now` is within its date window.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        match self.active_override {
            Some(active) => active,
            None => self.start_date <= now && now <= self.end_date,
        }
    }
}

impl HasId for Campaign {
    fn id(&self) -> Uuid {
        self.id
    }
}
