use thiserror::Error;

use super::types::{Article, CarListing, CarMake, Catalog, Photo, Video};

/// Errors raised while reading or loading catalog content
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backing source could not serve the requested section
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to catalog sections
///
/// Accessors are fallible so that remote or lazily loaded stores can report
/// failures; the suggestion engine treats any error as "no suggestions".
pub trait ContentStore: Send + Sync {
    fn car_makes(&self) -> Result<&[CarMake], CatalogError>;
    fn new_cars(&self) -> Result<&[CarListing], CatalogError>;
    fn used_cars(&self) -> Result<&[CarListing], CatalogError>;
    fn articles(&self) -> Result<&[Article], CatalogError>;
    fn videos(&self) -> Result<&[Video], CatalogError>;
    fn photos(&self) -> Result<&[Photo], CatalogError>;
}

impl ContentStore for Catalog {
    fn car_makes(&self) -> Result<&[CarMake], CatalogError> {
        Ok(&self.car_makes)
    }

    fn new_cars(&self) -> Result<&[CarListing], CatalogError> {
        Ok(&self.new_cars)
    }

    fn used_cars(&self) -> Result<&[CarListing], CatalogError> {
        Ok(&self.used_cars)
    }

    fn articles(&self) -> Result<&[Article], CatalogError> {
        Ok(&self.articles)
    }

    fn videos(&self) -> Result<&[Video], CatalogError> {
        Ok(&self.videos)
    }

    fn photos(&self) -> Result<&[Photo], CatalogError> {
        Ok(&self.photos)
    }
}
