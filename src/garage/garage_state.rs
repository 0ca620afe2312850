use std::cmp::Ordering;
use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::saved_item::SavedItem;
use super::store::{Listener, Store, StoreError, SubscriptionId};

/// Most items that can be compared side by side
pub const MAX_COMPARE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GarageSort {
    /// Most recently saved first
    #[default]
    Newest,
    /// Cheapest first, unpriced items last
    Price,
    /// Title, case-insensitive
    Name,
}

impl GarageSort {
    pub fn next(self) -> Self {
        match self {
            GarageSort::Newest => GarageSort::Price,
            GarageSort::Price => GarageSort::Name,
            GarageSort::Name => GarageSort::Newest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GarageSort::Newest => "newest",
            GarageSort::Price => "price",
            GarageSort::Name => "name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added,
    /// An item with the same id existed and was refreshed in place
    Updated,
}

pub struct Garage {
    store: Box<dyn Store<Vec<SavedItem>>>,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for Garage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Garage")
            .field("items", &self.store.get().len())
            .finish_non_exhaustive()
    }
}

impl Garage {
    pub fn new(store: Box<dyn Store<Vec<SavedItem>>>) -> Self {
        Self {
            store,
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Items in the order they were first saved
    pub fn items(&self) -> Vec<SavedItem> {
        self.store.get()
    }

    pub fn len(&self) -> usize {
        self.store.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.store.get().iter().any(|item| item.id == id)
    }

    /// Add an item, or refresh the existing one with the same id
    ///
    /// A refreshed item keeps its position and original `saved_at`.
    pub fn save(&mut self, item: SavedItem) -> Result<SaveOutcome, StoreError> {
        let mut items = self.store.get();
        let outcome = match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                let saved_at = existing.saved_at;
                *existing = SavedItem { saved_at, ..item };
                SaveOutcome::Updated
            }
            None => {
                items.push(item);
                SaveOutcome::Added
            }
        };

        self.store.set(items)?;
        log::debug!("Garage save: {:?}", outcome);
        Ok(outcome)
    }

    /// Returns false when no item had this id
    pub fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut items = self.store.get();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(false);
        }

        self.store.set(items)?;
        Ok(true)
    }

    /// Fuzzy filter on titles, best match first
    ///
    /// Every whitespace-separated term must match. A blank query returns all
    /// items in saved order.
    pub fn filter(&self, query: &str) -> Vec<SavedItem> {
        let items = self.store.get();
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return items;
        }

        let mut scored: Vec<(i64, SavedItem)> = items
            .into_iter()
            .filter_map(|item| {
                let mut total: i64 = 0;
                for term in &terms {
                    total += self.matcher.fuzzy_match(&item.title, term)?;
                }
                Some((total, item))
            })
            .collect();

        // Stable sort keeps saved order among equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, item)| item).collect()
    }

    pub fn sorted(&self, sort: GarageSort) -> Vec<SavedItem> {
        let mut items = self.store.get();
        match sort {
            GarageSort::Newest => items.sort_by(|a, b| b.saved_at.cmp(&a.saved_at)),
            GarageSort::Price => items.sort_by(|a, b| match (a.price, b.price) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }),
            GarageSort::Name => {
                items.sort_by_cached_key(|item| item.title.to_lowercase());
            }
        }
        items
    }

    /// Items for a side-by-side comparison
    ///
    /// Follows the order of `ids`, skips unknown and repeated ids and stops
    /// at [`MAX_COMPARE`].
    pub fn compare(&self, ids: &[&str]) -> Vec<SavedItem> {
        let items = self.store.get();
        let mut picked: Vec<SavedItem> = Vec::with_capacity(MAX_COMPARE);

        for id in ids {
            if picked.len() == MAX_COMPARE {
                break;
            }
            if picked.iter().any(|item| item.id == *id) {
                continue;
            }
            if let Some(item) = items.iter().find(|item| item.id == *id) {
                picked.push(item.clone());
            }
        }
        picked
    }

    pub fn subscribe(&mut self, listener: Listener<Vec<SavedItem>>) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}

#[cfg(test)]
#[path = "garage_state_tests.rs"]
mod garage_state_tests;
