mod utils;

use fanhub::domain::entities::{Document, Team};
use fanhub::domain::value_objects::{EventType, NewsCategory, Ref};
use utils::factories::{ArtistFactory, EventFactory};
use uuid::Uuid;

#[test]
fn entity_fields_serialize_camel_case() {
    let artist = ArtistFactory::new("Tuấn Hưng", "tuan-hung")
        .as_captain()
        .with_votes(1_250_000)
        .build();

    let value = serde_json::to_value(&artist).unwrap();

    assert_eq!(value["slug"], "tuan-hung");
    assert_eq!(value["isTeamCaptain"], true);
    assert_eq!(value["stats"]["totalVotes"], 1_250_000);
    assert_eq!(value["status"], "active");
}

#[test]
fn reference_states_are_tagged_variants() {
    let id = Uuid::new_v4();
    let reference: Ref<Team> = Ref::unresolved(id);

    let value = serde_json::to_value(&reference).unwrap();

    assert_eq!(value["unresolved"], id.to_string());
}

#[test]
fn enum_wire_values_are_kebab_case() {
    assert_eq!(
        serde_json::to_value(EventType::FanMeeting).unwrap(),
        "fan-meeting"
    );
    assert_eq!(
        serde_json::to_value(NewsCategory::BehindTheScenes).unwrap(),
        "behind-the-scenes"
    );
}

#[test]
fn documents_round_trip_through_json() {
    let event = EventFactory::new("Finale Night", "finale-night")
        .with_artist(Uuid::new_v4())
        .build();
    let doc = Document::Event(event);

    let json = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&json).unwrap();

    assert_eq!(back, doc);
}
