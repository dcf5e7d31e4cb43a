mod utils;

use fanhub::domain::entities::Document;
use fanhub::domain::repositories::ContentStore;
use fanhub::domain::services::RelationResolver;
use fanhub::domain::value_objects::Ref;
use fanhub::infrastructure::persistence::MemoryStore;
use std::sync::Arc;
use utils::factories::{ArtistFactory, TeamFactory};
use utils::helpers;
use uuid::Uuid;

/// One captain leading one team: the smallest artist -> team -> captain
/// cycle.
async fn cycle_store() -> (Arc<MemoryStore>, Uuid, Uuid) {
    let team_id = Uuid::new_v4();
    let artist_id = Uuid::new_v4();
    let team = TeamFactory::new("Team Fire", "team-fire")
        .with_id(team_id)
        .with_captain(artist_id)
        .build();
    let artist = ArtistFactory::new("Lead Singer", "lead-singer")
        .with_id(artist_id)
        .with_team(team_id)
        .as_captain()
        .build();

    let store = MemoryStore::new();
    helpers::populate(&store, vec![Document::Team(team), Document::Artist(artist)]).await;
    (Arc::new(store), team_id, artist_id)
}

async fn fetch_artist(store: &MemoryStore, id: Uuid) -> fanhub::domain::entities::Artist {
    store
        .get_by_id(fanhub::domain::schema::Collection::Artists, id)
        .await
        .unwrap()
        .and_then(Document::into_artist)
        .unwrap()
}

#[tokio::test]
async fn depth_zero_leaves_identifiers() {
    let (store, team_id, artist_id) = cycle_store().await;
    let resolver = RelationResolver::new(store.clone());
    let artist = fetch_artist(&store, artist_id).await;

    let resolved = resolver.resolve_artist(artist, 0).await.unwrap();

    assert_eq!(resolved.teams, vec![Ref::Unresolved(team_id)]);
}

#[tokio::test]
async fn depth_one_embeds_direct_targets_only() {
    let (store, _team_id, artist_id) = cycle_store().await;
    let resolver = RelationResolver::new(store.clone());
    let artist = fetch_artist(&store, artist_id).await;

    let resolved = resolver.resolve_artist(artist, 1).await.unwrap();

    let team = resolved.teams[0].entity().expect("team embedded");
    assert_eq!(team.name, "Team Fire");
    // The embedded team's own captain reference stays unresolved.
    assert_eq!(team.captain, Some(Ref::Unresolved(artist_id)));
}

#[tokio::test]
async fn depth_two_resolves_one_more_hop_then_truncates() {
    let (store, team_id, artist_id) = cycle_store().await;
    let resolver = RelationResolver::new(store.clone());
    let artist = fetch_artist(&store, artist_id).await;

    let resolved = resolver.resolve_artist(artist, 2).await.unwrap();

    let team = resolved.teams[0].entity().expect("team embedded");
    let captain = team
        .captain
        .as_ref()
        .and_then(|captain| captain.entity())
        .expect("captain embedded at depth 2");
    assert_eq!(captain.id, artist_id);
    // The cycle is cut by depth, not cycle detection: the captain's own
    // team list is back to bare identifiers.
    assert_eq!(captain.teams, vec![Ref::Unresolved(team_id)]);
}

#[tokio::test]
async fn dangling_reference_resolves_to_missing() {
    let ghost_team = Uuid::new_v4();
    let artist = ArtistFactory::new("Orphan", "orphan")
        .with_team(ghost_team)
        .build();
    let store = MemoryStore::new();
    helpers::populate(&store, vec![Document::Artist(artist.clone())]).await;
    let resolver = RelationResolver::new(Arc::new(store));

    let resolved = resolver.resolve_artist(artist, 1).await.unwrap();

    assert_eq!(resolved.teams, vec![Ref::Missing(ghost_team)]);
}

#[tokio::test]
async fn empty_reference_list_stays_empty() {
    let artist = ArtistFactory::new("Solo", "solo").build();
    let store = MemoryStore::new();
    helpers::populate(&store, vec![Document::Artist(artist.clone())]).await;
    let resolver = RelationResolver::new(Arc::new(store));

    let resolved = resolver.resolve_artist(artist, 2).await.unwrap();

    // Zero targets resolve to an empty ordered collection, not a marker.
    assert!(resolved.teams.is_empty());
}

#[tokio::test]
async fn resolve_document_dispatches_per_collection() {
    let services = helpers::seeded_services().await;
    let found = services
        .query
        .find(
            fanhub::application::services::Query::new(fanhub::domain::schema::Collection::News)
                .equals("slug", "grand-finale-announcement")
                .depth(1),
        )
        .await
        .unwrap();

    let news = found.docs.into_iter().next().unwrap().into_news().unwrap();
    let event = news.related_events[0].entity().expect("event embedded");
    assert_eq!(event.slug.as_str(), "grand-finale-concert");
    // The embedded event's participating artists are one hop further out.
    assert!(event.artists.iter().all(|artist| !artist.is_resolved()));
}
