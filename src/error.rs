use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::garage::StoreError;
use crate::payment::PaymentError;

/// Custom error types for carfinder
#[derive(Debug, Error)]
pub enum CarfinderError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Garage error: {0}")]
    Store(#[from] StoreError),

    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("No saved item with id '{0}'")]
    UnknownGarageItem(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
