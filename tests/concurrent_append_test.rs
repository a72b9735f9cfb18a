//! The store has no per-record concurrency control: appending a visit is a
//! read-modify-write over the whole aggregate, so two writers starting from
//! the same snapshot end with last-writer-wins. These tests pin that behavior
//! down as a known property of the current design.

use chrono::Utc;
use placelog::domain::model::{NewPlace, NewVisit, PlaceDetails, SmokingPolicy, VenueType, Visit};
use placelog::domain::ports::PlaceStore;
use placelog::{JsonPlaceStore, LocalStorage, PlaceService};
use tempfile::TempDir;

fn venue_payload() -> NewPlace {
    NewPlace {
        details: PlaceDetails::Venue {
            venue_type: VenueType::Izakaya,
            private_room: None,
            smoking: SmokingPolicy::Separated,
            booking_ease: None,
        },
        name: "Torikichi".to_string(),
        country: "Japan".to_string(),
        city: "Tokyo".to_string(),
        area: None,
        station: "Ebisu".to_string(),
        line: None,
        genre: "yakitori".to_string(),
        tags: vec![],
        department: "Aerospace Division".to_string(),
    }
}

fn visit_payload(author: &str) -> NewVisit {
    NewVisit {
        visited_at: Utc::now(),
        author: author.to_string(),
        rating: 4,
        revisit_intent: 4,
        comment: String::new(),
        situation: vec![],
        price_min: None,
        price_max: None,
    }
}

fn raw_visit(id: &str, author: &str) -> Visit {
    Visit {
        id: id.to_string(),
        visited_at: Utc::now(),
        author: author.to_string(),
        rating: 3,
        revisit_intent: 3,
        comment: String::new(),
        situation: vec![],
        price_min: None,
        price_max: None,
    }
}

#[tokio::test]
async fn test_appends_from_the_same_snapshot_lose_one_visit() {
    let temp = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp.path().to_str().unwrap().to_string());
    let store = JsonPlaceStore::open(storage).await.unwrap();
    let service = PlaceService::new(store);

    let created = service
        .create_place_with_first_visit(venue_payload(), visit_payload("Sato"))
        .await
        .unwrap();

    // Two writers read the same snapshot before either writes back.
    let store = service.store();
    let mut snapshot_a = store.get(&created.id).await.unwrap().unwrap();
    let mut snapshot_b = store.get(&created.id).await.unwrap().unwrap();

    snapshot_a.visits.push(raw_visit("va", "Yamada"));
    snapshot_b.visits.push(raw_visit("vb", "Suzuki"));

    store.put(&snapshot_a).await.unwrap();
    store.put(&snapshot_b).await.unwrap();

    // The whole aggregate is overwritten, so writer A's append is gone.
    let persisted = store.get(&created.id).await.unwrap().unwrap();
    assert_eq!(persisted.visits.len(), 2);
    assert_eq!(persisted.visits[1].id, "vb");
    assert!(!persisted.visits.iter().any(|v| v.id == "va"));
}

#[tokio::test]
async fn test_sequential_appends_keep_every_visit() {
    let temp = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp.path().to_str().unwrap().to_string());
    let store = JsonPlaceStore::open(storage).await.unwrap();
    let service = PlaceService::new(store);

    let created = service
        .create_place_with_first_visit(venue_payload(), visit_payload("Sato"))
        .await
        .unwrap();

    service
        .add_visit(&created.id, visit_payload("Yamada"))
        .await
        .unwrap();
    let latest = service
        .add_visit(&created.id, visit_payload("Suzuki"))
        .await
        .unwrap();

    assert_eq!(latest.visits.len(), 3);
    let authors: Vec<&str> = latest.visits.iter().map(|v| v.author.as_str()).collect();
    assert_eq!(authors, vec!["Sato", "Yamada", "Suzuki"]);
}
