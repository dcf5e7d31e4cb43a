use crate::domain::entities::Artist;
use crate::domain::value_objects::{EventStatus, EventType, HasId, ImageRef, Ref, Slug};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub slug: Slug,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub event_date: DateTime<Utc>,
    /// Set for multi-day events.
    pub end_date: Option<DateTime<Utc>>,
    pub location: Location,
    pub artists: Vec<Ref<Artist>>,
    pub featured_image: Option<ImageRef>,
    pub ticket_info: TicketInfo,
    pub links: Vec<RelatedLink>,
    pub status: EventStatus,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub venue: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub map_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketInfo {
    pub available: bool,
    pub ticket_link: Option<String>,
    /// Free-form price range (e.g., "500,000 - 2,000,000 VND").
    pub price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedLink {
    pub label: String,
    pub url: String,
}

impl HasId for Event {
    fn id(&self) -> Uuid {
        self.id
    }
}
