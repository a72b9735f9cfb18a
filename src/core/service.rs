use crate::core::{export, query, suggest};
use crate::domain::model::{
    NewPlace, NewVisit, Place, PlaceFilter, SortBy, Suggestions, Visit,
};
use crate::domain::ports::PlaceStore;
use crate::utils::error::{PlacelogError, Result};
use chrono::Utc;
use uuid::Uuid;

/// Caller-facing operations over a place store. Construct one explicitly and
/// pass it where needed; there is no global accessor.
pub struct PlaceService<S: PlaceStore> {
    store: S,
}

impl<S: PlaceStore> PlaceService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Filtered, optionally sorted snapshot of all records.
    pub async fn list(
        &self,
        filter: Option<&PlaceFilter>,
        sort: Option<SortBy>,
    ) -> Result<Vec<Place>> {
        let places = self.store.get_all().await?;
        Ok(query::list(places, filter, sort, Utc::now()))
    }

    pub async fn get(&self, id: &str) -> Result<Option<Place>> {
        self.store.get(id).await
    }

    /// Creates a place together with its first visit in a single write.
    pub async fn create_place_with_first_visit(
        &self,
        new_place: NewPlace,
        new_visit: NewVisit,
    ) -> Result<Place> {
        let now = Utc::now();
        let place = Place {
            id: Uuid::new_v4().to_string(),
            details: new_place.details,
            name: new_place.name,
            country: new_place.country,
            city: new_place.city,
            area: new_place.area,
            station: new_place.station,
            line: new_place.line,
            genre: new_place.genre,
            tags: new_place.tags,
            department: new_place.department,
            created_at: now,
            updated_at: now,
            visits: vec![build_visit(new_visit)],
        };

        self.store.put(&place).await?;
        tracing::debug!(id = %place.id, name = %place.name, "created place");
        Ok(place)
    }

    /// Appends a visit to an existing place. Read-modify-write with no
    /// version check: concurrent appends to the same place are
    /// last-writer-wins on the whole aggregate.
    pub async fn add_visit(&self, place_id: &str, new_visit: NewVisit) -> Result<Place> {
        let mut place =
            self.store
                .get(place_id)
                .await?
                .ok_or_else(|| PlacelogError::NotFoundError {
                    id: place_id.to_string(),
                })?;

        place.visits.push(build_visit(new_visit));
        place.updated_at = Utc::now();

        self.store.put(&place).await?;
        tracing::debug!(id = %place.id, visits = place.visits.len(), "appended visit");
        Ok(place)
    }

    /// Replaces the stored record wholesale, refreshing `updated_at`.
    pub async fn update_place(&self, mut place: Place) -> Result<Place> {
        place.updated_at = Utc::now();
        self.store.put(&place).await?;
        Ok(place)
    }

    pub async fn remove_place(&self, id: &str) -> Result<()> {
        self.store.delete(id).await
    }

    /// Tabular text export of every visit of every place passing the filter.
    pub async fn export_table(&self, filter: Option<&PlaceFilter>) -> Result<String> {
        let places = self.list(filter, None).await?;
        Ok(export::export_table(&places))
    }

    pub async fn suggestions(&self) -> Result<Suggestions> {
        let places = self.store.get_all().await?;
        Ok(suggest::suggestions(&places))
    }

    /// Deletes every record, returning how many were removed.
    pub async fn clear_all(&self) -> Result<usize> {
        let places = self.store.get_all().await?;
        let count = places.len();
        for place in places {
            self.store.delete(&place.id).await?;
        }
        tracing::info!(count, "cleared all places");
        Ok(count)
    }
}

fn build_visit(new_visit: NewVisit) -> Visit {
    Visit {
        id: Uuid::new_v4().to_string(),
        visited_at: new_visit.visited_at,
        author: new_visit.author,
        rating: new_visit.rating,
        revisit_intent: new_visit.revisit_intent,
        comment: new_visit.comment,
        situation: new_visit.situation,
        price_min: new_visit.price_min,
        price_max: new_visit.price_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStorage;
    use crate::core::store::JsonPlaceStore;
    use crate::domain::model::{PlaceDetails, SmokingPolicy, VenueType};

    async fn service() -> PlaceService<JsonPlaceStore<MemoryStorage>> {
        let store = JsonPlaceStore::open(MemoryStorage::new()).await.unwrap();
        PlaceService::new(store)
    }

    fn new_place(name: &str) -> NewPlace {
        NewPlace {
            details: PlaceDetails::Venue {
                venue_type: VenueType::Restaurant,
                private_room: None,
                smoking: SmokingPolicy::Unknown,
                booking_ease: None,
            },
            name: name.to_string(),
            country: "Japan".to_string(),
            city: "Tokyo".to_string(),
            area: None,
            station: "Ebisu".to_string(),
            line: None,
            genre: "bistro".to_string(),
            tags: vec![],
            department: "Aerospace Division".to_string(),
        }
    }

    fn new_visit(rating: u8) -> NewVisit {
        NewVisit {
            visited_at: Utc::now(),
            author: "Sato".to_string(),
            rating,
            revisit_intent: rating,
            comment: String::new(),
            situation: vec![],
            price_min: None,
            price_max: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_timestamps() {
        let service = service().await;
        let created = service
            .create_place_with_first_visit(new_place("A"), new_visit(4))
            .await
            .unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.visits.len(), 1);
        assert!(!created.visits[0].id.is_empty());
        assert_eq!(created.created_at, created.updated_at);

        let loaded = service.get(&created.id).await.unwrap().unwrap();
        assert_eq!(loaded, created);
    }

    #[tokio::test]
    async fn test_add_visit_appends_and_refreshes_updated_at() {
        let service = service().await;
        let created = service
            .create_place_with_first_visit(new_place("A"), new_visit(3))
            .await
            .unwrap();

        let updated = service.add_visit(&created.id, new_visit(5)).await.unwrap();
        assert_eq!(updated.visits.len(), 2);
        assert_eq!(updated.visits[1].rating, 5);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_add_visit_to_missing_place_fails() {
        let service = service().await;
        let err = service.add_visit("missing", new_visit(3)).await.unwrap_err();
        assert!(matches!(err, PlacelogError::NotFoundError { .. }));
    }

    #[tokio::test]
    async fn test_remove_then_get_is_none() {
        let service = service().await;
        let created = service
            .create_place_with_first_visit(new_place("A"), new_visit(3))
            .await
            .unwrap();

        service.remove_place(&created.id).await.unwrap();
        assert!(service.get(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_all_counts_removed_records() {
        let service = service().await;
        for name in ["A", "B", "C"] {
            service
                .create_place_with_first_visit(new_place(name), new_visit(3))
                .await
                .unwrap();
        }

        assert_eq!(service.clear_all().await.unwrap(), 3);
        assert!(service.list(None, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_export_counts_visits_across_places() {
        let service = service().await;
        let a = service
            .create_place_with_first_visit(new_place("A"), new_visit(3))
            .await
            .unwrap();
        service.add_visit(&a.id, new_visit(4)).await.unwrap();
        service
            .create_place_with_first_visit(new_place("B"), new_visit(5))
            .await
            .unwrap();

        let table = service.export_table(None).await.unwrap();
        assert_eq!(table.lines().count(), 4); // header + 3 visits
    }
}
