//! Observable value stores
//!
//! A store holds one value, replaces it wholesale on `set` and notifies
//! subscribers after every successful update.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

const DATA_DIR: &str = "carfinder";
const GARAGE_FILE: &str = "garage.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write store: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Listener<T> = Box<dyn Fn(&T)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub trait Store<T> {
    /// Current value
    fn get(&self) -> T;

    /// Replace the value and notify subscribers
    fn set(&mut self, value: T) -> Result<(), StoreError>;

    fn subscribe(&mut self, listener: Listener<T>) -> SubscriptionId;

    /// Returns false if the subscription was unknown
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

struct Subscribers<T> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }
}

impl<T> Subscribers<T> {
    fn add(&mut self, listener: Listener<T>) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, listener));
        id
    }

    fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&self, value: &T) {
        for (_, listener) in &self.listeners {
            listener(value);
        }
    }
}

/// Store kept only in memory
pub struct MemoryStore<T> {
    value: T,
    subscribers: Subscribers<T>,
}

impl<T: Clone> MemoryStore<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Subscribers::default(),
        }
    }
}

impl<T: Clone + Default> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> Store<T> for MemoryStore<T> {
    fn get(&self) -> T {
        self.value.clone()
    }

    fn set(&mut self, value: T) -> Result<(), StoreError> {
        self.value = value;
        self.subscribers.notify(&self.value);
        Ok(())
    }

    fn subscribe(&mut self, listener: Listener<T>) -> SubscriptionId {
        self.subscribers.add(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }
}

/// Store persisted as pretty-printed JSON
///
/// A missing or unreadable file opens as the default value. The in-memory
/// value only changes once the file write succeeded.
pub struct JsonFileStore<T> {
    path: PathBuf,
    value: T,
    subscribers: Subscribers<T>,
}

/// `~/.local/share/carfinder/garage.json` (platform data dir)
pub fn default_garage_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(DATA_DIR).join(GARAGE_FILE))
}

impl<T: Serialize + DeserializeOwned + Clone + Default> JsonFileStore<T> {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let value = load_value(&path);
        Self {
            path,
            value,
            subscribers: Subscribers::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn load_value<T: DeserializeOwned + Default>(path: &Path) -> T {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            return T::default();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", path.display(), e);
            T::default()
        }
    }
}

impl<T: Serialize + DeserializeOwned + Clone + Default> Store<T> for JsonFileStore<T> {
    fn get(&self) -> T {
        self.value.clone()
    }

    fn set(&mut self, value: T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&value)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)?;

        self.value = value;
        self.subscribers.notify(&self.value);
        Ok(())
    }

    fn subscribe(&mut self, listener: Listener<T>) -> SubscriptionId {
        self.subscribers.add(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
