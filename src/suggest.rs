//! Search suggestions
//!
//! Turns a free-text query into a capped, type-grouped list of suggestions
//! drawn from the content catalog plus a couple of canned assistant prompts.

mod ai_templates;
mod engine;
mod popular;
mod suggestion;

pub use ai_templates::ai_suggestions;
pub use engine::{SuggestionEngine, SuggestionLimits, compute_suggestions};
pub use popular::popular_searches;
pub use suggestion::{Suggestion, SuggestionType, format_price};
