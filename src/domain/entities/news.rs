use crate::domain::entities::{Artist, Event};
use crate::domain::value_objects::{HasId, ImageRef, NewsCategory, NewsStatus, Ref, Slug};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: Uuid,
    pub title: String,
    pub slug: Slug,
    /// Short summary for previews.
    pub excerpt: String,
    pub content: String,
    pub category: NewsCategory,
    pub featured_image: ImageRef,
    pub related_artists: Vec<Ref<Artist>>,
    pub related_events: Vec<Ref<Event>>,
    pub tags: Vec<String>,
    pub author: String,
    pub published_date: DateTime<Utc>,
    pub featured: bool,
    pub status: NewsStatus,
    pub created_at: DateTime<Utc>,
}

impl News {
    pub const DEFAULT_AUTHOR: &'static str = "Admin";

    pub fn is_published(&self) -> bool {
        self.status == NewsStatus::Published
    }
}

impl HasId for News {
    fn id(&self) -> Uuid {
        self.id
    }
}
