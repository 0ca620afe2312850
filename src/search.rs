//! Search-as-you-type
//!
//! Debounces keystrokes, runs the suggestion engine on a worker thread and
//! keeps only the results of the most recently issued query. Also owns the
//! keyboard/mouse selection over the dropdown.

pub mod debouncer;
pub mod navigation;
pub mod search_render;
mod search_state;
mod selection;
pub mod worker;

pub use debouncer::Debouncer;
pub use navigation::NavigationTarget;
pub use search_state::SearchState;
pub use selection::SelectionState;
