//! Canned assistant prompts
//!
//! Keyword categories are checked in order and the first match wins, so a
//! query mentioning both "car" and "electric" gets the car prompts. Matching
//! is plain substring containment on the lowercased query.

use super::suggestion::{Suggestion, SuggestionType};

/// Makes recognised by the make-name category: (lowercase key, display name)
const KNOWN_MAKES: &[(&str, &str)] = &[
    ("toyota", "Toyota"),
    ("honda", "Honda"),
    ("ford", "Ford"),
    ("chevrolet", "Chevrolet"),
    ("tesla", "Tesla"),
    ("hyundai", "Hyundai"),
    ("kia", "Kia"),
    ("subaru", "Subaru"),
    ("bmw", "BMW"),
    ("mazda", "Mazda"),
    ("nissan", "Nissan"),
];

type Prompt = (String, String);

struct KeywordCategory {
    name: &'static str,
    matches: fn(&str) -> bool,
    prompts: fn(&str) -> [Prompt; 2],
}

const CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory {
        name: "car",
        matches: |q| q.contains("car") || q.contains("vehicle"),
        prompts: |_| {
            [
                (
                    "What car is best for my budget?".to_string(),
                    "Start from the total monthly cost you are comfortable with, then compare \
                     reliability, insurance and fuel costs across a short list of models."
                        .to_string(),
                ),
                (
                    "Should I buy a new or used vehicle?".to_string(),
                    "New cars carry full warranties and the latest safety tech; a two to three \
                     year old car avoids the steepest depreciation."
                        .to_string(),
                ),
            ]
        },
    },
    KeywordCategory {
        name: "electric",
        matches: |q| q.contains("electric") || q.contains("ev"),
        prompts: |_| {
            [
                (
                    "What are the best electric cars in 2025?".to_string(),
                    "Popular picks include the Tesla Model Y, Hyundai Ioniq 5 and Chevrolet \
                     Equinox EV, each offering 300 miles or more of range."
                        .to_string(),
                ),
                (
                    "How far can an EV go on a single charge?".to_string(),
                    "Most current EVs cover 250 to 350 miles per charge; cold weather and \
                     highway speeds reduce that figure."
                        .to_string(),
                ),
            ]
        },
    },
    KeywordCategory {
        name: "suv",
        matches: |q| q.contains("suv") || q.contains("crossover"),
        prompts: |_| {
            [
                (
                    "Which SUV has the best fuel economy?".to_string(),
                    "Hybrid compacts such as the Toyota RAV4 Hybrid and Honda CR-V Hybrid \
                     return close to 40 mpg combined."
                        .to_string(),
                ),
                (
                    "What is the difference between an SUV and a crossover?".to_string(),
                    "Crossovers are built on car platforms for a smoother ride; traditional \
                     SUVs use truck frames suited to towing and off-road use."
                        .to_string(),
                ),
            ]
        },
    },
    KeywordCategory {
        name: "make",
        matches: |q| matched_make(q).is_some(),
        prompts: |q| {
            let make = matched_make(q).unwrap_or("this brand");
            [
                (
                    format!("Which {} model is right for me?", make),
                    format!(
                        "Tell me how you drive and how many seats you need, and I will narrow \
                         the {} lineup down to two or three candidates.",
                        make
                    ),
                ),
                (
                    format!("How reliable are {} vehicles?", make),
                    format!(
                        "{} scores above average in recent owner surveys; check the model year \
                         for known recalls before buying.",
                        make
                    ),
                ),
            ]
        },
    },
];

/// Display name of the first known make contained in the query
fn matched_make(query_lower: &str) -> Option<&'static str> {
    KNOWN_MAKES
        .iter()
        .find(|(key, _)| query_lower.contains(key))
        .map(|(_, display)| *display)
}

/// Generic prompts built from the query text itself
fn fallback_prompts(query: &str) -> [Prompt; 2] {
    [
        (
            format!("What should I know about {}?", query),
            format!(
                "Here is a quick overview of {}: pricing, trims and what owners say.",
                query
            ),
        ),
        (
            format!("How does {} compare to its rivals?", query),
            format!(
                "I can line {} up against its closest competitors on price, space and running costs.",
                query
            ),
        ),
    ]
}

/// Assistant suggestions for a non-empty query
///
/// `query` is the trimmed query as typed and `query_lower` its lowercase
/// form. The generic fallback is only offered when `allow_fallback` is set,
/// which the engine does when the catalog scan found something.
pub fn ai_suggestions(
    query: &str,
    query_lower: &str,
    allow_fallback: bool,
    limit: usize,
) -> Vec<Suggestion> {
    let (name, prompts) = match CATEGORIES.iter().find(|c| (c.matches)(query_lower)) {
        Some(category) => (category.name, (category.prompts)(query_lower)),
        None if allow_fallback => ("general", fallback_prompts(query)),
        None => return Vec::new(),
    };

    prompts
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, (question, answer))| {
            Suggestion::new(
                format!("ai-{}-{}", name, i + 1),
                question,
                SuggestionType::AiSuggestion,
            )
            .with_ai_response(answer)
        })
        .collect()
}

#[cfg(test)]
#[path = "ai_templates_tests.rs"]
mod ai_templates_tests;
