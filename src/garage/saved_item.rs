use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::suggest::{Suggestion, SuggestionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SavedItemKind {
    Vehicle,
    Review,
}

impl SavedItemKind {
    pub fn label(self) -> &'static str {
        match self {
            SavedItemKind::Vehicle => "vehicle",
            SavedItemKind::Review => "review",
        }
    }
}

/// An entry in the user's garage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub id: String,
    pub title: String,
    pub kind: SavedItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Whole dollars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub saved_at: DateTime<Utc>,
}

impl SavedItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: SavedItemKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            make: None,
            model: None,
            year: None,
            price: None,
            image_url: None,
            saved_at: Utc::now(),
        }
    }

    /// Build a garage entry from a dropdown suggestion
    ///
    /// Vehicles (new, used, model) become `Vehicle` entries and articles
    /// become `Review` entries. Everything else cannot be saved.
    pub fn from_suggestion(suggestion: &Suggestion) -> Option<Self> {
        let kind = match suggestion.suggestion_type {
            t if t.is_vehicle() => SavedItemKind::Vehicle,
            SuggestionType::Article => SavedItemKind::Review,
            _ => return None,
        };

        let mut item = Self::new(suggestion.id.clone(), suggestion.text.clone(), kind);
        item.image_url = suggestion.image_url.clone();
        item.make = suggestion.make_id.clone();

        if kind == SavedItemKind::Vehicle {
            item.year = leading_year(&suggestion.text);
            item.price = suggestion.price.as_deref().and_then(parse_price);
            item.model = suggestion.model_id.clone();
        }

        Some(item)
    }
}

/// "2025 Honda Civic" -> 2025
fn leading_year(title: &str) -> Option<u16> {
    let first = title.split_whitespace().next()?;
    if first.len() != 4 {
        return None;
    }
    first.parse().ok().filter(|y| (1886..=2100).contains(y))
}

/// "$27,345" -> 27345
fn parse_price(price: &str) -> Option<u32> {
    let digits: String = price.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
#[path = "saved_item_tests.rs"]
mod saved_item_tests;
