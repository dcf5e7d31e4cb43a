use crate::domain::entities::Team;
use crate::domain::value_objects::{
    ArtistStats, ArtistStatus, HasId, HashtagRef, ImageRef, Profession, Ref, Slug, SocialLinks,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: Uuid,
    pub name: String,
    pub stage_name: Option<String>,
    pub slug: Slug,
    pub profile_image: Option<ImageRef>,
    pub cover_image: Option<ImageRef>,
    pub bio: Option<String>,
    pub birth_date: Option<NaiveDate>,
    /// Team assignments; artists can be in multiple teams.
    pub teams: Vec<Ref<Team>>,
    pub is_team_captain: bool,
    pub status: ArtistStatus,
    pub professions: Vec<Profession>,
    pub achievements: Vec<Achievement>,
    pub social_media: SocialLinks,
    pub hashtags: Vec<HashtagRef>,
    pub stats: ArtistStats,
    pub gallery: Vec<GalleryImage>,
    pub videos: Vec<PerformanceVideo>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub title: String,
    pub year: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub image: ImageRef,
    pub caption: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceVideo {
    pub title: String,
    pub url: String,
    pub thumbnail: Option<ImageRef>,
    pub performance_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl Artist {
    /// Stage name, when it differs from the legal name.
    pub fn known_as(&self) -> Option<&str> {
        match &self.stage_name {
            Some(stage_name) if stage_name != &self.name => Some(stage_name),
            _ => None,
        }
    }

    pub fn belongs_to_team(&self, team_id: Uuid) -> bool {
        self.teams.iter().any(|team| team.target_id() == team_id)
    }
}

impl HasId for Artist {
    fn id(&self) -> Uuid {
        self.id
    }
}
