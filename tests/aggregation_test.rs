mod utils;

use fanhub::application::services::{Condition, Query, QueryService};
use fanhub::domain::entities::{Artist, Document, Team};
use fanhub::domain::schema::Collection;
use fanhub::domain::services::stat_aggregator::{member_count, team_vote_total};
use std::sync::Arc;
use utils::helpers;

async fn collections(query: &QueryService) -> (Vec<Team>, Vec<Artist>) {
    let teams = query
        .find(Query::new(Collection::Teams))
        .await
        .unwrap()
        .docs
        .into_iter()
        .filter_map(Document::into_team)
        .collect();
    let artists = query
        .find(Query::new(Collection::Artists))
        .await
        .unwrap()
        .docs
        .into_iter()
        .filter_map(Document::into_artist)
        .collect();
    (teams, artists)
}

#[tokio::test]
async fn member_count_matches_containment_for_every_team() {
    let query: Arc<QueryService> = helpers::query_service(helpers::seeded_store().await);
    let (teams, artists) = collections(&query).await;

    for team in &teams {
        let computed = member_count(team.id, &artists);
        let counted = query
            .count(
                Collection::Artists,
                &[Condition::Contains {
                    field: "teams".to_string(),
                    id: team.id,
                }],
            )
            .await
            .unwrap();
        // Holds regardless of whether the team's stored stats are populated.
        assert_eq!(computed, counted, "team '{}'", team.slug);
    }
}

#[tokio::test]
async fn vote_total_prefers_stored_aggregate_and_falls_back_to_rollup() {
    let query = helpers::query_service(helpers::seeded_store().await);
    let (teams, artists) = collections(&query).await;

    let stored = teams
        .iter()
        .find(|team| team.stats.total_votes > 0)
        .expect("a team with a stored aggregate");
    assert_eq!(team_vote_total(stored, &artists), stored.stats.total_votes);

    let unstored = teams
        .iter()
        .find(|team| team.stats.total_votes == 0)
        .expect("a team without a stored aggregate");
    let rollup: u64 = artists
        .iter()
        .filter(|artist| artist.belongs_to_team(unstored.id))
        .map(|artist| artist.stats.total_votes)
        .sum();
    assert!(rollup > 0);
    assert_eq!(team_vote_total(unstored, &artists), rollup);
}
