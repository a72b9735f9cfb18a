pub mod export;
pub mod query;
pub mod score;
pub mod service;
pub mod store;
pub mod suggest;

pub use crate::domain::model::{Place, PlaceFilter, SortBy, Visit};
pub use crate::domain::ports::{ConfigProvider, PlaceStore, Storage};
pub use crate::utils::error::Result;
pub use service::PlaceService;
pub use store::JsonPlaceStore;
