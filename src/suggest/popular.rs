use super::suggestion::{Suggestion, SuggestionType};

const POPULAR_SEARCHES: [&str; 4] = [
    "Best SUVs of 2025",
    "Electric vehicles",
    "Toyota Camry",
    "Used trucks under $30,000",
];

/// Fixed list shown for an empty query
pub fn popular_searches() -> Vec<Suggestion> {
    POPULAR_SEARCHES
        .iter()
        .enumerate()
        .map(|(i, text)| Suggestion::new(format!("popular-{}", i + 1), *text, SuggestionType::Popular))
        .collect()
}
