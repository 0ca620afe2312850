use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::config::SearchConfig;
use crate::garage::{Garage, GarageSort, SaveOutcome, SavedItem, SubscriptionId};
use crate::search::search_render::DropdownLayout;
use crate::search::{Debouncer, NavigationTarget, SearchState, SelectionState};
use crate::suggest::{Suggestion, SuggestionEngine};

/// Event poll timeout while a search is in flight
pub const BUSY_POLL: Duration = Duration::from_millis(25);

/// Event poll timeout when nothing is pending
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// The "My Garage" overlay
#[derive(Debug, Default)]
pub struct GarageView {
    pub visible: bool,
    pub sort: GarageSort,
    pub selection: SelectionState,
}

/// Application state
pub struct App {
    pub textarea: TextArea<'static>,
    pub search: SearchState,
    pub debouncer: Debouncer,
    pub garage: Garage,
    pub garage_view: GarageView,
    /// Item count kept current by a garage subscription
    garage_count: Rc<Cell<usize>>,
    garage_subscription: SubscriptionId,
    /// Where the last activated suggestion led
    pub last_navigation: Option<NavigationTarget>,
    pub last_activated: Option<Suggestion>,
    /// One-line message for the status bar
    pub status: Option<String>,
    /// Dropdown layout from the last render, for mouse hit-testing
    pub dropdown: Option<DropdownLayout>,
    pub should_quit: bool,
}

fn new_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Search cars, reviews, videos…");
    textarea
}

impl App {
    pub fn new(engine: Arc<SuggestionEngine>, garage: Garage, config: &SearchConfig) -> Self {
        let search = SearchState::with_worker(engine, config.latency());
        Self::with_search(search, garage, Debouncer::new(config.debounce_ms))
    }

    pub fn with_search(search: SearchState, mut garage: Garage, debouncer: Debouncer) -> Self {
        let garage_count = Rc::new(Cell::new(garage.len()));
        let counter = Rc::clone(&garage_count);
        let garage_subscription = garage.subscribe(Box::new(move |items: &Vec<SavedItem>| {
            counter.set(items.len());
        }));

        Self {
            textarea: new_textarea(),
            search,
            debouncer,
            garage,
            garage_view: GarageView::default(),
            garage_count,
            garage_subscription,
            last_navigation: None,
            last_activated: None,
            status: None,
            dropdown: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Number of saved items, as last reported by the garage
    pub fn garage_count(&self) -> usize {
        self.garage_count.get()
    }

    /// How long the event loop may wait for input before the next tick
    ///
    /// Short while a search is in flight, exactly the remaining debounce
    /// delay while one is pending, long otherwise.
    pub fn poll_timeout(&self) -> Duration {
        self.poll_timeout_at(Instant::now())
    }

    pub fn poll_timeout_at(&self, now: Instant) -> Duration {
        if self.search.is_loading() {
            return BUSY_POLL;
        }
        self.debouncer
            .time_remaining(now)
            .map_or(IDLE_POLL, |remaining| remaining.min(IDLE_POLL))
    }

    /// Current text of the search input
    pub fn query(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replace the search input text, cursor at the end
    pub fn set_query(&mut self, text: &str) {
        self.textarea = new_textarea();
        self.textarea.insert_str(text);
    }

    /// Input text changed: reset the selection and restart the debounce timer
    pub fn on_query_edited(&mut self) {
        self.search.on_query_changed();
        self.debouncer.schedule_execution();
    }

    /// Issue the current query right away, skipping the debounce
    pub fn issue_now(&mut self) {
        self.debouncer.cancel();
        let query = self.query().to_string();
        self.search.issue(&query);
    }

    /// Run due work: a debounced query and worker responses
    ///
    /// Returns true if something visible changed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.debouncer.should_execute_at(now) {
            let query = self.query().to_string();
            self.search.issue(&query);
            changed = true;
        }
        changed | self.search.poll_response()
    }

    /// Open the highlighted suggestion
    ///
    /// Search-type targets put their text in the input and search again
    /// immediately.
    pub fn activate_selected(&mut self) -> bool {
        let Some(suggestion) = self.search.activate() else {
            return false;
        };

        let target = NavigationTarget::from_suggestion(&suggestion);
        log::info!("Navigate to {}", target.path());

        if let Some(query) = target.search_query() {
            let query = query.to_string();
            self.set_query(&query);
            self.issue_now();
        }

        self.status = Some(target.to_string());
        self.last_navigation = Some(target);
        self.last_activated = Some(suggestion);
        true
    }

    /// Save the highlighted suggestion to the garage
    pub fn save_selected(&mut self) {
        let Some(suggestion) = self.search.selected() else {
            self.status = Some("Select a car to save it".to_string());
            return;
        };
        let Some(item) = SavedItem::from_suggestion(suggestion) else {
            self.status = Some(format!(
                "{} results cannot be saved",
                suggestion.suggestion_type.group_label()
            ));
            return;
        };

        let title = item.title.clone();
        self.status = Some(match self.garage.save(item) {
            Ok(SaveOutcome::Added) => format!("Saved {} to My Garage", title),
            Ok(SaveOutcome::Updated) => format!("Updated {} in My Garage", title),
            Err(e) => {
                log::error!("Garage save failed: {}", e);
                format!("Could not save: {}", e)
            }
        });
    }

    /// Garage items in the overlay's current sort order
    pub fn garage_items(&self) -> Vec<SavedItem> {
        self.garage.sorted(self.garage_view.sort)
    }

    pub fn toggle_garage(&mut self) {
        self.garage_view.visible = !self.garage_view.visible;
        self.garage_view.selection.clear_selection();
        if self.garage_view.visible {
            self.search.dismiss();
        }
    }

    /// Remove the highlighted garage item
    pub fn remove_selected_garage_item(&mut self) {
        let items = self.garage_items();
        let Some(item) = self
            .garage_view
            .selection
            .get_selected()
            .and_then(|index| items.get(index))
        else {
            return;
        };

        match self.garage.remove(&item.id) {
            Ok(_) => {
                self.status = Some(format!("Removed {}", item.title));
                let remaining = items.len() - 1;
                if remaining == 0 {
                    self.garage_view.selection.clear_selection();
                } else if let Some(index) = self.garage_view.selection.get_selected() {
                    self.garage_view.selection.select_index(index.min(remaining - 1));
                }
            }
            Err(e) => {
                log::error!("Garage remove failed: {}", e);
                self.status = Some(format!("Could not remove: {}", e));
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.garage.unsubscribe(self.garage_subscription);
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
