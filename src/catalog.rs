//! Content catalog
//!
//! Read-only inventory of car makes/models, listings, articles, videos and
//! photos that the suggestion engine scans.

mod content_store;
pub mod loader;
mod types;

pub use content_store::{CatalogError, ContentStore};
pub use loader::load_catalog;
pub use types::{Article, CarListing, CarMake, CarModel, Catalog, Photo, Video};
