//! My Garage
//!
//! Vehicles and reviews the user saved, kept in an injected [`Store`] so the
//! file-backed store can be swapped for an in-memory one.

mod garage_state;
mod saved_item;
pub mod store;

pub use garage_state::{Garage, GarageSort, MAX_COMPARE, SaveOutcome};
pub use saved_item::{SavedItem, SavedItemKind};
pub use store::{
    JsonFileStore, Listener, MemoryStore, Store, StoreError, SubscriptionId, default_garage_path,
};
