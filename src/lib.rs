pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, MemoryStorage};
pub use config::Settings;
pub use core::{JsonPlaceStore, PlaceService};
pub use utils::error::{PlacelogError, Result};
