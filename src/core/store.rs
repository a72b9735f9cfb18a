use crate::domain::model::Place;
use crate::domain::ports::{PlaceStore, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Fixed schema version. Written as a marker on open; there is no migration
/// path.
const SCHEMA_VERSION: &str = "1";

const SCHEMA_FILE: &str = "schema";
const PLACES_DIR: &str = "places";

/// Keyed place store persisting one JSON document per aggregate under
/// `places/<id>.json`. Lookups are a linear scan over the snapshot; there are
/// no secondary indexes.
pub struct JsonPlaceStore<S: Storage> {
    storage: S,
}

impl<S: Storage> JsonPlaceStore<S> {
    /// Opens the store, writing the schema marker if this is a fresh
    /// directory.
    pub async fn open(storage: S) -> Result<Self> {
        if storage.read_file(SCHEMA_FILE).await?.is_none() {
            storage
                .write_file(SCHEMA_FILE, SCHEMA_VERSION.as_bytes())
                .await?;
        }
        Ok(Self { storage })
    }

    fn place_path(id: &str) -> String {
        format!("{}/{}.json", PLACES_DIR, id)
    }
}

#[async_trait]
impl<S: Storage> PlaceStore for JsonPlaceStore<S> {
    async fn put(&self, place: &Place) -> Result<()> {
        let data = serde_json::to_vec_pretty(place)?;
        self.storage.write_file(&Self::place_path(&place.id), &data).await
    }

    async fn get(&self, id: &str) -> Result<Option<Place>> {
        match self.storage.read_file(&Self::place_path(id)).await? {
            Some(data) => Ok(Some(serde_json::from_slice(&data)?)),
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> Result<Vec<Place>> {
        let paths = self.storage.list_files(PLACES_DIR).await?;
        let mut places = Vec::with_capacity(paths.len());
        for path in paths {
            // Files removed between the listing and the read are skipped.
            if let Some(data) = self.storage.read_file(&path).await? {
                places.push(serde_json::from_slice(&data)?);
            }
        }
        Ok(places)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.storage.remove_file(&Self::place_path(id)).await
    }
}
