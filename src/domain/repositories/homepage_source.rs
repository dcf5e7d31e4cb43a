use crate::domain::entities::{Campaign, Event, HashtagMetric, News};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Data source for the landing-page sections. Pluggable so pages can render
/// from static fixtures while the live hashtag/campaign feeds are not wired
/// up, and so tests run without a storage dependency.
#[async_trait]
pub trait HomepageSource: Send + Sync {
    async fn upcoming_events(&self, limit: usize) -> AppResult<Vec<Event>>;
    async fn active_campaigns(&self, limit: usize) -> AppResult<Vec<Campaign>>;
    async fn latest_news(&self, limit: usize) -> AppResult<Vec<News>>;
    async fn trending_hashtags(&self, limit: usize) -> AppResult<Vec<HashtagMetric>>;
}
