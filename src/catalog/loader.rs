use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::content_store::CatalogError;
use super::types::Catalog;

const BUILTIN_CATALOG: &str = include_str!("builtin_catalog.json");

impl Catalog {
    /// Catalog bundled with the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        parse_catalog(BUILTIN_CATALOG)
    }
}

/// Load a catalog from a JSON file
///
/// Sections missing from the file are treated as empty.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let catalog = parse_catalog(&contents)?;
    log::debug!(
        "Loaded catalog from {}: {} makes, {} new, {} used, {} articles, {} videos, {} photos",
        path.display(),
        catalog.car_makes.len(),
        catalog.new_cars.len(),
        catalog.used_cars.len(),
        catalog.articles.len(),
        catalog.videos.len(),
        catalog.photos.len()
    );
    Ok(catalog)
}

pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogError> {
    Ok(serde_json::from_str::<Catalog>(content)?)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
