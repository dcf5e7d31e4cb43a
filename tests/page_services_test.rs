mod utils;

use fanhub::application::services::{ArtistPageService, QueryService};
use fanhub::domain::entities::Document;
use fanhub::domain::repositories::ContentStore;
use fanhub::domain::schema::Collection;
use fanhub::shared::errors::{AppError, AppResult};
use std::sync::Arc;
use utils::factories::{ArtistFactory, EventFactory};
use utils::helpers;
use uuid::Uuid;

mockall::mock! {
    pub Store {}

    #[async_trait::async_trait]
    impl ContentStore for Store {
        async fn get_all(&self, collection: Collection) -> AppResult<Vec<Document>>;
        async fn get_by_id(&self, collection: Collection, id: Uuid) -> AppResult<Option<Document>>;
        async fn insert(&self, document: Document) -> AppResult<()>;
    }
}

#[tokio::test]
async fn artist_profile_assembles_page_data() {
    let services = helpers::seeded_services().await;

    let profile = services
        .artist_pages
        .artist_profile("tuan-hung")
        .await
        .unwrap();

    // Raw values stay available alongside the formatted strings.
    assert_eq!(profile.stats.votes.raw, 1_250_000);
    assert_eq!(profile.stats.followers.formatted, "2.4M");
    assert_eq!(profile.stats.ranking, Some(1));

    // Depth 2: team embedded, and the team's captain embedded too.
    let team = profile.artist.teams[0].entity().expect("team embedded");
    assert_eq!(team.name, "Nhà trai");
    assert!(team
        .captain
        .as_ref()
        .expect("captain reference present")
        .is_resolved());

    // Related sections, capped at 5 and sorted by event date.
    assert_eq!(profile.upcoming_events.len(), 3);
    assert_eq!(
        profile.upcoming_events[0].slug.as_str(),
        "tv-performance-special"
    );
    assert_eq!(profile.active_campaigns.len(), 2);

    let voting = profile
        .active_campaigns
        .iter()
        .find(|card| card.campaign.slug.as_str() == "final-voting-round")
        .expect("voting campaign listed");
    assert_eq!(voting.goals[0].progress.percent, 75.0);
    assert_eq!(voting.goals[0].formatted_target, "5.0M");
}

#[tokio::test]
async fn missing_artist_maps_to_not_found() {
    let services = helpers::seeded_services().await;

    let err = services
        .artist_pages
        .artist_profile("nonexistent")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn failed_campaign_subquery_only_empties_that_section() {
    let artist = ArtistFactory::new("Tuấn Hưng", "tuan-hung").build();
    let event = EventFactory::new("Finale Night", "finale-night")
        .with_artist(artist.id)
        .build();
    let artist_doc = Document::Artist(artist);
    let event_doc = Document::Event(event);

    let mut store = MockStore::new();
    store
        .expect_get_all()
        .returning(move |collection| match collection {
            Collection::Artists => Ok(vec![artist_doc.clone()]),
            Collection::Events => Ok(vec![event_doc.clone()]),
            Collection::Campaigns => {
                Err(AppError::DataSource("campaign feed offline".to_string()))
            }
            _ => Ok(Vec::new()),
        });

    let query = Arc::new(QueryService::new(Arc::new(store)));
    let pages = ArtistPageService::new(query);

    let profile = pages.artist_profile("tuan-hung").await.unwrap();

    // The page renders: primary entity and events intact, campaigns omitted.
    assert_eq!(profile.upcoming_events.len(), 1);
    assert!(profile.active_campaigns.is_empty());
}

#[tokio::test]
async fn team_profile_recomputes_member_count_and_rolls_up_votes() {
    let services = helpers::seeded_services().await;

    let profile = services.team_pages.team_profile("nha-gai").await.unwrap();

    assert_eq!(profile.member_count, 2);
    assert_eq!(profile.members.len(), 2);
    assert_eq!(
        profile.captain.as_ref().map(|captain| captain.name.as_str()),
        Some("BB Trần")
    );
    // No stored aggregate on this team: 720_000 + 540_000 from the roster.
    assert_eq!(profile.total_votes.raw, 1_260_000);
    assert_eq!(profile.total_votes.formatted, "1.3M");
}

#[tokio::test]
async fn stored_team_vote_total_wins_over_rollup() {
    let services = helpers::seeded_services().await;

    let profile = services.team_pages.team_profile("nha-trai").await.unwrap();

    // Members sum to 2_770_000, but the stored aggregate is authoritative.
    assert_eq!(profile.member_count, 3);
    assert_eq!(profile.total_votes.raw, 2_230_000);
}

#[tokio::test]
async fn missing_team_maps_to_not_found() {
    let services = helpers::seeded_services().await;

    let err = services
        .team_pages
        .team_profile("team-x")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn team_directory_lists_active_teams_with_counts() {
    let services = helpers::seeded_services().await;

    let directory = services.team_pages.team_directory().await.unwrap();

    assert_eq!(directory.len(), 2);
    assert_eq!(directory[0].team.slug.as_str(), "nha-trai");
    assert_eq!(directory[0].member_count, 3);
    assert_eq!(directory[1].member_count, 2);
}

#[tokio::test]
async fn inactive_teams_are_excluded_from_directory() {
    let store = helpers::seeded_store().await;
    helpers::populate(
        &store,
        vec![Document::Team(
            utils::factories::TeamFactory::new("Nhà trẻ", "nha-tre")
                .inactive()
                .build(),
        )],
    )
    .await;
    let services = fanhub::AppServices::new(
        store,
        Arc::new(
            fanhub::infrastructure::fixtures::FixtureHomepage::new().unwrap(),
        ),
    );

    let directory = services.team_pages.team_directory().await.unwrap();

    assert!(directory
        .iter()
        .all(|entry| entry.team.slug.as_str() != "nha-tre"));
}
