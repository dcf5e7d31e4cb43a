use crate::domain::entities::{Artist, Campaign};
use crate::domain::value_objects::{EngagementMetrics, HasId, Ref, TrackedPlatform};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tracked performance of one hashtag on one platform. The ingestion
/// pipeline that refreshes these numbers is an external collaborator; the
/// core only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagMetric {
    pub id: Uuid,
    /// Without the '#' symbol (e.g., "CallMeByFire").
    pub hashtag: String,
    pub platform: TrackedPlatform,
    pub related_artist: Option<Ref<Artist>>,
    pub related_campaign: Option<Ref<Campaign>>,
    pub mention_count: u64,
    pub metrics: EngagementMetrics,
    pub last_updated: DateTime<Utc>,
    pub tracking_enabled: bool,
}

impl HasId for HashtagMetric {
    fn id(&self) -> Uuid {
        self.id
    }
}
