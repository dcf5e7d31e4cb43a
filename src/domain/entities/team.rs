use crate::domain::entities::Artist;
use crate::domain::value_objects::{
    HasId, HashtagRef, ImageRef, Ref, Slug, SocialLinks, TeamColor, TeamStats,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Uuid,
    /// Unique display name (e.g., "Nhà trai", "Nhà gái").
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub color: TeamColor,
    pub logo: Option<ImageRef>,
    pub cover_image: Option<ImageRef>,
    pub captain: Option<Ref<Artist>>,
    pub motto: Option<String>,
    pub coach: Option<String>,
    pub stats: TeamStats,
    pub social_media: SocialLinks,
    pub hashtags: Vec<HashtagRef>,
    pub active: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl HasId for Team {
    fn id(&self) -> Uuid {
        self.id
    }
}
