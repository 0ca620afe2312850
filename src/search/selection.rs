//! Dropdown selection state
//!
//! `None` means nothing is highlighted. Keyboard movement saturates at both
//! ends of the list instead of wrapping, and once something is selected the
//! keyboard can never return to `None`; only a query change does.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    /// Currently highlighted row
    pub fn get_selected(&self) -> Option<usize> {
        self.selected_index
    }

    /// Back to "no selection" (query changed)
    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }

    /// Highlight a row directly (mouse hover); the caller passes a valid row
    pub fn select_index(&mut self, index: usize) {
        self.selected_index = Some(index);
    }

    /// Move one row down, stopping at the last row
    pub fn move_down(&mut self, suggestion_count: usize) {
        if suggestion_count == 0 {
            return;
        }

        let next = match self.selected_index {
            Some(current) => current + 1,
            None => 0,
        };
        self.selected_index = Some(next.min(suggestion_count - 1));
    }

    /// Move one row up, stopping at the first row
    pub fn move_up(&mut self, suggestion_count: usize) {
        if suggestion_count == 0 {
            return;
        }

        let previous = self.selected_index.map_or(0, |current| current.saturating_sub(1));
        self.selected_index = Some(previous.min(suggestion_count - 1));
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
