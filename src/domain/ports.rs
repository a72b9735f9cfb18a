use crate::domain::model::Place;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Low-level durable medium: a flat keyed byte store addressed by
/// slash-separated paths. Absent files are `None`, never an error.
pub trait Storage: Send + Sync {
    fn read_file(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// No-op when the file does not exist.
    fn remove_file(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Paths of all files under `dir`; empty when the directory does not exist.
    fn list_files(&self, dir: &str) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
}

/// Keyed persistence of [`Place`] aggregates. A successful `put` or `delete`
/// is visible to subsequent reads across process restarts.
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Idempotent upsert keyed by `place.id`; fully overwrites any existing
    /// record.
    async fn put(&self, place: &Place) -> Result<()>;
    /// `None` for a missing key, never an error.
    async fn get(&self, id: &str) -> Result<Option<Place>>;
    /// Snapshot of every record; iteration order unspecified.
    async fn get_all(&self) -> Result<Vec<Place>>;
    /// No-op when the key is absent.
    async fn delete(&self, id: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn department(&self) -> &str;
}
