mod utils;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use fanhub::application::services::{HomepageService, LiveHomepage};
use fanhub::domain::entities::{Campaign, Document, Event, HashtagMetric, News};
use fanhub::domain::repositories::HomepageSource;
use fanhub::infrastructure::fixtures::FixtureHomepage;
use fanhub::shared::errors::{AppError, AppResult};
use std::sync::Arc;
use utils::factories::CampaignFactory;
use utils::helpers;

#[tokio::test]
async fn fixture_source_serves_canned_sections_without_a_store() {
    let source = FixtureHomepage::new().unwrap();

    let events = source.upcoming_events(3).await.unwrap();
    assert_eq!(events.len(), 3);

    let campaigns = source.active_campaigns(2).await.unwrap();
    assert_eq!(campaigns.len(), 2);

    // Only trending metrics make the cut.
    let hashtags = source.trending_hashtags(5).await.unwrap();
    assert_eq!(hashtags.len(), 2);
    assert!(hashtags.iter().all(|metric| metric.metrics.trending));
}

#[tokio::test]
async fn homepage_combines_live_artists_with_source_sections() {
    let services = helpers::seeded_services().await;

    let homepage = services.homepage.homepage().await;

    // Three fixture artists are flagged for the homepage.
    assert_eq!(homepage.featured_artists.len(), 3);
    assert_eq!(homepage.upcoming_events.len(), 3);
    assert_eq!(homepage.latest_news.len(), 3);

    let charity = homepage
        .active_campaigns
        .iter()
        .find(|card| card.campaign.slug.as_str() == "charity-fundraiser")
        .expect("charity campaign listed");
    assert_eq!(charity.goals[0].formatted_target, "1.0B");
    assert_eq!(charity.goals[0].formatted_current, "850.0M");
    assert_eq!(charity.goals[0].progress.percent, 85.0);
}

#[tokio::test]
async fn live_source_filters_on_effective_active_state() {
    let store = helpers::seeded_store().await;
    // A campaign with no override is active purely by its date window.
    let windowed = CampaignFactory::new("Window Campaign", "window-campaign")
        .with_window(Utc::now() - Duration::days(1), Utc::now() + Duration::days(1))
        .with_goal("Streams", 10_000, 2_500)
        .build();
    // Overridden off, even though its window covers now.
    let disabled = CampaignFactory::new("Paused Campaign", "paused-campaign")
        .with_window(Utc::now() - Duration::days(1), Utc::now() + Duration::days(1))
        .with_override(false)
        .build();
    helpers::populate(
        &store,
        vec![Document::Campaign(windowed), Document::Campaign(disabled)],
    )
    .await;

    let query = helpers::query_service(store);
    let source = LiveHomepage::new(query);

    let campaigns = source.active_campaigns(10).await.unwrap();
    let slugs: Vec<_> = campaigns
        .iter()
        .map(|campaign| campaign.slug.as_str())
        .collect();

    assert!(slugs.contains(&"window-campaign"));
    assert!(!slugs.contains(&"paused-campaign"));
    // The three seeded campaigns are force-enabled by override.
    assert_eq!(campaigns.len(), 4);
}

#[tokio::test]
async fn live_source_sorts_news_and_hashtags() {
    let store = helpers::seeded_store().await;
    let query = helpers::query_service(store);
    let source = LiveHomepage::new(query);

    let news = source.latest_news(3).await.unwrap();
    assert_eq!(news[0].slug.as_str(), "grand-finale-announcement");

    let hashtags = source.trending_hashtags(5).await.unwrap();
    assert_eq!(hashtags.len(), 2);
    assert_eq!(hashtags[0].hashtag, "CallMeByFireChallenge");
}

struct FlakySource;

#[async_trait]
impl HomepageSource for FlakySource {
    async fn upcoming_events(&self, limit: usize) -> AppResult<Vec<Event>> {
        FixtureHomepage::new()?.upcoming_events(limit).await
    }

    async fn active_campaigns(&self, _limit: usize) -> AppResult<Vec<Campaign>> {
        Err(AppError::DataSource("campaign feed offline".to_string()))
    }

    async fn latest_news(&self, limit: usize) -> AppResult<Vec<News>> {
        FixtureHomepage::new()?.latest_news(limit).await
    }

    async fn trending_hashtags(&self, _limit: usize) -> AppResult<Vec<HashtagMetric>> {
        Err(AppError::DataSource("hashtag feed offline".to_string()))
    }
}

#[tokio::test]
async fn failed_sections_render_empty_not_fatal() {
    let store = helpers::seeded_store().await;
    let query = helpers::query_service(store);
    let homepage = HomepageService::new(query, Arc::new(FlakySource));

    let view = homepage.homepage().await;

    assert_eq!(view.featured_artists.len(), 3);
    assert_eq!(view.upcoming_events.len(), 3);
    assert_eq!(view.latest_news.len(), 3);
    assert!(view.active_campaigns.is_empty());
    assert!(view.trending_hashtags.is_empty());
}
