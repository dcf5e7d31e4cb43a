use crate::domain::entities::{Artist, Campaign, Event, HashtagMetric, News, Team};
use crate::domain::schema::Collection;
use crate::domain::value_objects::{HasId, Slug};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One record of any core collection, as stored and as returned by the
/// query façade. The core treats documents as immutable snapshots for the
/// duration of one resolution pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Document {
    Artist(Artist),
    Team(Team),
    Event(Event),
    Campaign(Campaign),
    News(News),
    HashtagMetric(HashtagMetric),
}

impl Document {
    pub fn collection(&self) -> Collection {
        match self {
            Document::Artist(_) => Collection::Artists,
            Document::Team(_) => Collection::Teams,
            Document::Event(_) => Collection::Events,
            Document::Campaign(_) => Collection::Campaigns,
            Document::News(_) => Collection::News,
            Document::HashtagMetric(_) => Collection::HashtagMetrics,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Document::Artist(artist) => artist.id,
            Document::Team(team) => team.id,
            Document::Event(event) => event.id,
            Document::Campaign(campaign) => campaign.id,
            Document::News(news) => news.id,
            Document::HashtagMetric(metric) => metric.id,
        }
    }

    /// Hashtag metrics are addressed by id only; everything else by slug too.
    pub fn slug(&self) -> Option<&Slug> {
        match self {
            Document::Artist(artist) => Some(&artist.slug),
            Document::Team(team) => Some(&team.slug),
            Document::Event(event) => Some(&event.slug),
            Document::Campaign(campaign) => Some(&campaign.slug),
            Document::News(news) => Some(&news.slug),
            Document::HashtagMetric(_) => None,
        }
    }

    pub fn as_artist(&self) -> Option<&Artist> {
        match self {
            Document::Artist(artist) => Some(artist),
            _ => None,
        }
    }

    pub fn as_team(&self) -> Option<&Team> {
        match self {
            Document::Team(team) => Some(team),
            _ => None,
        }
    }

    pub fn into_artist(self) -> Option<Artist> {
        match self {
            Document::Artist(artist) => Some(artist),
            _ => None,
        }
    }

    pub fn into_team(self) -> Option<Team> {
        match self {
            Document::Team(team) => Some(team),
            _ => None,
        }
    }

    pub fn into_event(self) -> Option<Event> {
        match self {
            Document::Event(event) => Some(event),
            _ => None,
        }
    }

    pub fn into_campaign(self) -> Option<Campaign> {
        match self {
            Document::Campaign(campaign) => Some(campaign),
            _ => None,
        }
    }

    pub fn into_news(self) -> Option<News> {
        match self {
            Document::News(news) => Some(news),
            _ => None,
        }
    }

    pub fn into_hashtag_metric(self) -> Option<HashtagMetric> {
        match self {
            Document::HashtagMetric(metric) => Some(metric),
            _ => None,
        }
    }
}

impl HasId for Document {
    fn id(&self) -> Uuid {
        Document::id(self)
    }
}

impl From<Artist> for Document {
    fn from(artist: Artist) -> Self {
        Document::Artist(artist)
    }
}

impl From<Team> for Document {
    fn from(team: Team) -> Self {
        Document::Team(team)
    }
}

impl From<Event> for Document {
    fn from(event: Event) -> Self {
        Document::Event(event)
    }
}

impl From<Campaign> for Document {
    fn from(campaign: Campaign) -> Self {
        Document::Campaign(campaign)
    }
}

impl From<News> for Document {
    fn from(news: News) -> Self {
        Document::News(news)
    }
}

impl From<HashtagMetric> for Document {
    fn from(metric: HashtagMetric) -> Self {
        Document::HashtagMetric(metric)
    }
}
