//! Schema registry: the queryable surface of each collection.
//!
//! Filters and sort keys are validated here. An unknown collection or field
//! is a configuration error and fails loudly; it never degrades into a
//! silent empty result.

use crate::domain::entities::Document;
use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
    Artists,
    Teams,
    Events,
    Campaigns,
    News,
    HashtagMetrics,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Artists,
        Collection::Teams,
        Collection::Events,
        Collection::Campaigns,
        Collection::News,
        Collection::HashtagMetrics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Artists => "artists",
            Collection::Teams => "teams",
            Collection::Events => "events",
            Collection::Campaigns => "campaigns",
            Collection::News => "news",
            Collection::HashtagMetrics => "hashtag-metrics",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Collection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|collection| collection.as_str() == s)
            .ok_or_else(|| AppError::InvalidQuery(format!("unknown collection '{}'", s)))
    }
}

/// Typed value of one scalar field, extracted for filter matching.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Number(i64),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value)
    }
}

/// Scalar fields each collection accepts in equality filters.
pub fn scalar_fields(collection: Collection) -> &'static [&'static str] {
    match collection {
        Collection::Artists => &["slug", "name", "status", "featured", "isTeamCaptain"],
        Collection::Teams => &["slug", "name", "color", "active", "featured"],
        Collection::Events => &["slug", "status", "type", "featured"],
        Collection::Campaigns => &["slug", "type", "active", "featured"],
        Collection::News => &["slug", "status", "category", "author", "featured"],
        Collection::HashtagMetrics => &["hashtag", "platform", "trending", "trackingEnabled"],
    }
}

/// Reference fields each collection accepts in containment filters.
pub fn reference_fields(collection: Collection) -> &'static [&'static str] {
    match collection {
        Collection::Artists => &["teams"],
        Collection::Teams => &["captain"],
        Collection::Events => &["artists"],
        Collection::Campaigns => &["artists"],
        Collection::News => &["relatedArtists", "relatedEvents"],
        Collection::HashtagMetrics => &["relatedArtist", "relatedCampaign"],
    }
}

/// Keys each collection accepts for sorting.
pub fn sort_keys(collection: Collection) -> &'static [&'static str] {
    match collection {
        Collection::Artists => &["name", "createdAt"],
        Collection::Teams => &["name", "createdAt"],
        Collection::Events => &["title", "eventDate", "createdAt"],
        Collection::Campaigns => &["title", "startDate", "endDate", "createdAt"],
        Collection::News => &["title", "publishedDate", "createdAt"],
        Collection::HashtagMetrics => &["mentionCount", "lastUpdated"],
    }
}

/// Validate a filter field before any document is touched, so a
/// misconfigured query fails even against an empty collection.
pub fn validate_scalar_field(collection: Collection, field: &str) -> AppResult<()> {
    if scalar_fields(collection).contains(&field) {
        Ok(())
    } else {
        Err(AppError::InvalidQuery(format!(
            "unknown filter field '{}' for collection '{}'",
            field, collection
        )))
    }
}

pub fn validate_reference_field(collection: Collection, field: &str) -> AppResult<()> {
    if reference_fields(collection).contains(&field) {
        Ok(())
    } else {
        Err(AppError::InvalidQuery(format!(
            "unknown reference field '{}' for collection '{}'",
            field, collection
        )))
    }
}

pub fn validate_sort_key(collection: Collection, key: &str) -> AppResult<()> {
    if sort_keys(collection).contains(&key) {
        Ok(())
    } else {
        Err(AppError::InvalidQuery(format!(
            "unknown sort key '{}' for collection '{}'",
            key, collection
        )))
    }
}

/// Typed value of one sort key. Keys of one collection always extract the
/// same variant, so comparisons stay homogeneous.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum SortValue {
    Text(String),
    Number(i64),
    Date(DateTime<Utc>),
}

/// Extract a scalar field for equality matching. The campaign `active`
/// field evaluates the effective state (manual override, else date window)
/// at `now`.
pub fn scalar_value(doc: &Document, field: &str, now: DateTime<Utc>) -> AppResult<FieldValue> {
    let value = match (doc, field) {
        (Document::Artist(artist), "slug") => FieldValue::Text(artist.slug.to_string()),
        (Document::Artist(artist), "name") => FieldValue::Text(artist.name.clone()),
        (Document::Artist(artist), "status") => FieldValue::Text(artist.status.as_str().into()),
        (Document::Artist(artist), "featured") => FieldValue::Flag(artist.featured),
        (Document::Artist(artist), "isTeamCaptain") => FieldValue::Flag(artist.is_team_captain),

        (Document::Team(team), "slug") => FieldValue::Text(team.slug.to_string()),
        (Document::Team(team), "name") => FieldValue::Text(team.name.clone()),
        (Document::Team(team), "color") => FieldValue::Text(team.color.as_str().into()),
        (Document::Team(team), "active") => FieldValue::Flag(team.active),
        (Document::Team(team), "featured") => FieldValue::Flag(team.featured),

        (Document::Event(event), "slug") => FieldValue::Text(event.slug.to_string()),
        (Document::Event(event), "status") => FieldValue::Text(event.status.as_str().into()),
        (Document::Event(event), "type") => FieldValue::Text(event.event_type.as_str().into()),
        (Document::Event(event), "featured") => FieldValue::Flag(event.featured),

        (Document::Campaign(campaign), "slug") => FieldValue::Text(campaign.slug.to_string()),
        (Document::Campaign(campaign), "type") => {
            FieldValue::Text(campaign.campaign_type.as_str().into())
        }
        (Document::Campaign(campaign), "active") => FieldValue::Flag(campaign.is_active_at(now)),
        (Document::Campaign(campaign), "featured") => FieldValue::Flag(campaign.featured),

        (Document::News(news), "slug") => FieldValue::Text(news.slug.to_string()),
        (Document::News(news), "status") => FieldValue::Text(news.status.as_str().into()),
        (Document::News(news), "category") => FieldValue::Text(news.category.as_str().into()),
        (Document::News(news), "author") => FieldValue::Text(news.author.clone()),
        (Document::News(news), "featured") => FieldValue::Flag(news.featured),

        (Document::HashtagMetric(metric), "hashtag") => FieldValue::Text(metric.hashtag.clone()),
        (Document::HashtagMetric(metric), "platform") => {
            FieldValue::Text(metric.platform.as_str().into())
        }
        (Document::HashtagMetric(metric), "trending") => FieldValue::Flag(metric.metrics.trending),
        (Document::HashtagMetric(metric), "trackingEnabled") => {
            FieldValue::Flag(metric.tracking_enabled)
        }

        (doc, field) => {
            return Err(AppError::InvalidQuery(format!(
                "unknown filter field '{}' for collection '{}'",
                field,
                doc.collection()
            )))
        }
    };
    Ok(value)
}

/// Identifiers held by a reference field, for containment matching. Single
/// references count as sets of at most one.
pub fn reference_ids(doc: &Document, field: &str) -> AppResult<Vec<Uuid>> {
    let ids = match (doc, field) {
        (Document::Artist(artist), "teams") => {
            artist.teams.iter().map(|team| team.target_id()).collect()
        }
        (Document::Team(team), "captain") => {
            team.captain.iter().map(|captain| captain.target_id()).collect()
        }
        (Document::Event(event), "artists") => {
            event.artists.iter().map(|artist| artist.target_id()).collect()
        }
        (Document::Campaign(campaign), "artists") => campaign
            .artists
            .iter()
            .map(|artist| artist.target_id())
            .collect(),
        (Document::News(news), "relatedArtists") => news
            .related_artists
            .iter()
            .map(|artist| artist.target_id())
            .collect(),
        (Document::News(news), "relatedEvents") => news
            .related_events
            .iter()
            .map(|event| event.target_id())
            .collect(),
        (Document::HashtagMetric(metric), "relatedArtist") => metric
            .related_artist
            .iter()
            .map(|artist| artist.target_id())
            .collect(),
        (Document::HashtagMetric(metric), "relatedCampaign") => metric
            .related_campaign
            .iter()
            .map(|campaign| campaign.target_id())
            .collect(),

        (doc, field) => {
            return Err(AppError::InvalidQuery(format!(
                "unknown reference field '{}' for collection '{}'",
                field,
                doc.collection()
            )))
        }
    };
    Ok(ids)
}

/// Extract a sort key value.
pub fn sort_value(doc: &Document, key: &str) -> AppResult<SortValue> {
    let value = match (doc, key) {
        (Document::Artist(artist), "name") => SortValue::Text(artist.name.clone()),
        (Document::Artist(artist), "createdAt") => SortValue::Date(artist.created_at),

        (Document::Team(team), "name") => SortValue::Text(team.name.clone()),
        (Document::Team(team), "createdAt") => SortValue::Date(team.created_at),

        (Document::Event(event), "title") => SortValue::Text(event.title.clone()),
        (Document::Event(event), "eventDate") => SortValue::Date(event.event_date),
        (Document::Event(event), "createdAt") => SortValue::Date(event.created_at),

        (Document::Campaign(campaign), "title") => SortValue::Text(campaign.title.clone()),
        (Document::Campaign(campaign), "startDate") => SortValue::Date(campaign.start_date),
        (Document::Campaign(campaign), "endDate") => SortValue::Date(campaign.end_date),
        (Document::Campaign(campaign), "createdAt") => SortValue::Date(campaign.created_at),

        (Document::News(news), "title") => SortValue::Text(news.title.clone()),
        (Document::News(news), "publishedDate") => SortValue::Date(news.published_date),
        (Document::News(news), "createdAt") => SortValue::Date(news.created_at),

        (Document::HashtagMetric(metric), "mentionCount") => {
            SortValue::Number(metric.mention_count as i64)
        }
        (Document::HashtagMetric(metric), "lastUpdated") => SortValue::Date(metric.last_updated),

        (doc, key) => {
            return Err(AppError::InvalidQuery(format!(
                "unknown sort key '{}' for collection '{}'",
                key,
                doc.collection()
            )))
        }
    };
    Ok(value)
}
