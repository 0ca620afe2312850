//! Search dropdown state
//!
//! Tracks the latest issued query, the loading flag, the visible suggestion
//! list and the highlighted row. Responses are applied only when their
//! request id is the latest one issued, so a slow answer to an old query can
//! never replace the answer to a newer one.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;

use super::selection::SelectionState;
use super::worker::{SearchRequest, SearchResponse, spawn_worker};
use crate::suggest::{Suggestion, SuggestionEngine, popular_searches};

pub struct SearchState {
    /// Query of the most recently issued request
    query: String,
    /// Id of the most recently issued request
    request_id: u64,
    loading: bool,
    visible: bool,
    suggestions: Vec<Suggestion>,
    selection: SelectionState,
    request_tx: Option<Sender<SearchRequest>>,
    response_rx: Option<Receiver<SearchResponse>>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    /// State without a worker; non-blank queries are not answered until
    /// channels are attached
    pub fn new() -> Self {
        Self {
            query: String::new(),
            request_id: 0,
            loading: false,
            visible: false,
            suggestions: Vec::new(),
            selection: SelectionState::new(),
            request_tx: None,
            response_rx: None,
        }
    }

    /// State backed by a freshly spawned worker thread
    pub fn with_worker(engine: Arc<SuggestionEngine>, latency: Duration) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(engine, latency, request_rx, response_tx);

        let mut state = Self::new();
        state.set_channels(request_tx, response_rx);
        state
    }

    pub fn set_channels(
        &mut self,
        request_tx: Sender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.get_selected()
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        self.selection
            .get_selected()
            .and_then(|index| self.suggestions.get(index))
    }

    /// Input text changed; the new query is issued later by the debouncer
    pub fn on_query_changed(&mut self) {
        self.selection.clear_selection();
        self.visible = true;
    }

    /// Issue a query
    ///
    /// Blank queries are answered immediately with the popular searches.
    /// Returns false if a non-blank query could not be handed to the worker.
    pub fn issue(&mut self, query: &str) -> bool {
        self.request_id = self.request_id.wrapping_add(1);
        self.query = query.to_string();
        self.selection.clear_selection();
        self.visible = true;

        if query.trim().is_empty() {
            self.suggestions = popular_searches();
            self.loading = false;
            return true;
        }

        let request = SearchRequest {
            query: query.to_string(),
            request_id: self.request_id,
        };
        match self.request_tx.as_ref().map(|tx| tx.send(request)) {
            Some(Ok(())) => {
                self.loading = true;
                true
            }
            Some(Err(_)) => {
                log::warn!("Search worker is gone; dropping query {:?}", query);
                self.loading = false;
                false
            }
            None => false,
        }
    }

    /// Apply a worker response if it belongs to the latest request
    pub fn apply_response(&mut self, response: SearchResponse) -> bool {
        if response.request_id != self.request_id {
            log::debug!(
                "Discarding stale results for {:?} (request {}, latest {})",
                response.query,
                response.request_id,
                self.request_id
            );
            return false;
        }

        self.suggestions = response.suggestions;
        self.loading = false;
        self.selection.clear_selection();
        true
    }

    /// Drain worker responses; returns true if the visible list changed
    pub fn poll_response(&mut self) -> bool {
        let mut responses = Vec::new();
        let mut disconnected = false;

        if let Some(rx) = &self.response_rx {
            loop {
                match rx.try_recv() {
                    Ok(response) => responses.push(response),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }

        if disconnected && self.loading {
            log::warn!("Search worker disconnected while a query was pending");
            self.loading = false;
        }

        let mut applied = false;
        for response in responses {
            applied |= self.apply_response(response);
        }
        applied
    }

    pub fn move_down(&mut self) {
        self.selection.move_down(self.suggestions.len());
    }

    pub fn move_up(&mut self) {
        self.selection.move_up(self.suggestions.len());
    }

    /// Mouse moved over row `index`
    pub fn hover(&mut self, index: usize) {
        self.selection.select_index(index);
    }

    /// Take the highlighted suggestion and close the dropdown
    pub fn activate(&mut self) -> Option<Suggestion> {
        let index = self.selection.get_selected()?;
        if index >= self.suggestions.len() {
            return None;
        }

        let chosen = self.suggestions.swap_remove(index);
        self.suggestions.clear();
        self.selection.clear_selection();
        self.visible = false;
        Some(chosen)
    }

    /// Hide the dropdown; query and selection are kept
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Show the dropdown again after a dismiss
    pub fn show(&mut self) {
        self.visible = true;
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
