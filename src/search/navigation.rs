//! Where an activated suggestion leads

use std::fmt;

use crate::suggest::{Suggestion, SuggestionType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Article { id: String },
    CarDetail { id: String, used: bool },
    Video { id: String },
    Photo { id: String },
    /// Re-run the search with this text
    Search { query: String },
}

impl NavigationTarget {
    /// Makes, models, popular searches and assistant prompts become a new
    /// search; everything else opens its own page.
    pub fn from_suggestion(suggestion: &Suggestion) -> Self {
        let id = suggestion.source_id().to_string();
        match suggestion.suggestion_type {
            SuggestionType::Article => NavigationTarget::Article { id },
            SuggestionType::NewCar => NavigationTarget::CarDetail { id, used: false },
            SuggestionType::UsedCar => NavigationTarget::CarDetail { id, used: true },
            SuggestionType::Video => NavigationTarget::Video { id },
            SuggestionType::Photo => NavigationTarget::Photo { id },
            SuggestionType::CarMake
            | SuggestionType::CarModel
            | SuggestionType::Popular
            | SuggestionType::AiSuggestion => NavigationTarget::Search {
                query: suggestion.text.clone(),
            },
        }
    }

    /// Site path for the target
    pub fn path(&self) -> String {
        match self {
            NavigationTarget::Article { id } => format!("/articles/{}", id),
            NavigationTarget::CarDetail { id, used: false } => format!("/cars/new/{}", id),
            NavigationTarget::CarDetail { id, used: true } => format!("/cars/used/{}", id),
            NavigationTarget::Video { id } => format!("/videos/{}", id),
            NavigationTarget::Photo { id } => format!("/photos/{}", id),
            NavigationTarget::Search { query } => {
                format!("/search?q={}", query.split_whitespace().collect::<Vec<_>>().join("+"))
            }
        }
    }

    pub fn search_query(&self) -> Option<&str> {
        match self {
            NavigationTarget::Search { query } => Some(query),
            _ => None,
        }
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationTarget::Article { .. } => write!(f, "Article {}", self.path()),
            NavigationTarget::CarDetail { .. } => write!(f, "Car details {}", self.path()),
            NavigationTarget::Video { .. } => write!(f, "Video {}", self.path()),
            NavigationTarget::Photo { .. } => write!(f, "Photo {}", self.path()),
            NavigationTarget::Search { query } => write!(f, "Search for \"{}\"", query),
        }
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod navigation_tests;
