use crate::application::services::query_service::{Query, QueryService};
use crate::application::views::{CampaignCard, Homepage};
use crate::domain::entities::{Campaign, Document, Event, HashtagMetric, News};
use crate::domain::repositories::HomepageSource;
use crate::domain::schema::Collection;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use std::sync::Arc;

const FEATURED_ARTIST_LIMIT: usize = 6;
const SECTION_LIMIT: usize = 3;
const TRENDING_LIMIT: usize = 5;

/// Assembles the landing page. Featured artists come from the live query
/// façade; the remaining sections go through the pluggable
/// [`HomepageSource`]. Every section is optional: a failed fetch is logged
/// and rendered empty, never an error page.
pub struct HomepageService {
    query: Arc<QueryService>,
    source: Arc<dyn HomepageSource>,
}

impl HomepageService {
    pub fn new(query: Arc<QueryService>, source: Arc<dyn HomepageSource>) -> Self {
        Self { query, source }
    }

    pub async fn homepage(&self) -> Homepage {
        let featured_query = Query::new(Collection::Artists)
            .equals("featured", true)
            .depth(1)
            .limit(FEATURED_ARTIST_LIMIT);

        let (featured, events, campaigns, news, hashtags) = tokio::join!(
            self.query.find(featured_query),
            self.source.upcoming_events(SECTION_LIMIT),
            self.source.active_campaigns(SECTION_LIMIT),
            self.source.latest_news(SECTION_LIMIT),
            self.source.trending_hashtags(TRENDING_LIMIT),
        );

        let featured_artists = match featured {
            Ok(found) => found
                .docs
                .into_iter()
                .filter_map(Document::into_artist)
                .collect(),
            Err(err) => {
                log::warn!("homepage: featured artists section degraded: {}", err);
                Vec::new()
            }
        };

        Homepage {
            featured_artists,
            upcoming_events: Self::section(events, "upcoming events"),
            active_campaigns: Self::section(campaigns, "active campaigns")
                .into_iter()
                .map(CampaignCard::from_campaign)
                .collect(),
            latest_news: Self::section(news, "latest news"),
            trending_hashtags: Self::section(hashtags, "trending hashtags"),
        }
    }

    fn section<T>(result: AppResult<Vec<T>>, section: &str) -> Vec<T> {
        result.unwrap_or_else(|err| {
            log::warn!("homepage: {} section degraded: {}", section, err);
            Vec::new()
        })
    }
}

/// Live implementation of [`HomepageSource`], backed by the query façade.
pub struct LiveHomepage {
    query: Arc<QueryService>,
}

impl LiveHomepage {
    pub fn new(query: Arc<QueryService>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl HomepageSource for LiveHomepage {
    async fn upcoming_events(&self, limit: usize) -> AppResult<Vec<Event>> {
        let found = self
            .query
            .find(
                Query::new(Collection::Events)
                    .equals("status", "upcoming")
                    .sort("eventDate")
                    .depth(1)
                    .limit(limit),
            )
            .await?;
        Ok(found.docs.into_iter().filter_map(Document::into_event).collect())
    }

    async fn active_campaigns(&self, limit: usize) -> AppResult<Vec<Campaign>> {
        let found = self
            .query
            .find(
                Query::new(Collection::Campaigns)
                    .equals("active", true)
                    .depth(1)
                    .limit(limit),
            )
            .await?;
        Ok(found
            .docs
            .into_iter()
            .filter_map(Document::into_campaign)
            .collect())
    }

    async fn latest_news(&self, limit: usize) -> AppResult<Vec<News>> {
        let found = self
            .query
            .find(
                Query::new(Collection::News)
                    .equals("status", "published")
                    .sort("-publishedDate")
                    .limit(limit),
            )
            .await?;
        Ok(found.docs.into_iter().filter_map(Document::into_news).collect())
    }

    async fn trending_hashtags(&self, limit: usize) -> AppResult<Vec<HashtagMetric>> {
        let found = self
            .query
            .find(
                Query::new(Collection::HashtagMetrics)
                    .equals("trending", true)
                    .sort("-mentionCount")
                    .limit(limit),
            )
            .await?;
        Ok(found
            .docs
            .into_iter()
            .filter_map(Document::into_hashtag_metric)
            .collect())
    }
}
