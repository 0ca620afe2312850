use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::state::App;

impl App {
    /// Wait up to `timeout` for one terminal event and handle it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        if self.garage_view.visible {
            self.handle_garage_key(key);
        } else {
            self.handle_search_key(key);
        }
    }

    /// Returns true if the key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('g') if ctrl => {
                self.toggle_garage();
                true
            }
            _ => false,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                // First Esc closes the dropdown, the next one quits
                if self.search.is_visible() {
                    self.search.dismiss();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Down => {
                if !self.search.is_visible() {
                    self.search.show();
                    if self.search.suggestions().is_empty() && !self.search.is_loading() {
                        self.issue_now();
                    }
                }
                self.search.move_down();
            }
            KeyCode::Up => self.search.move_up(),
            KeyCode::Enter => {
                if !self.activate_selected() {
                    self.issue_now();
                }
            }
            KeyCode::Char('s') if ctrl => self.save_selected(),
            _ => {
                let before = self.query().to_string();
                self.textarea.input(key);
                if self.query() != before {
                    self.on_query_edited();
                }
            }
        }
    }

    fn handle_garage_key(&mut self, key: KeyEvent) {
        let count = self.garage_count();
        match key.code {
            KeyCode::Esc => self.toggle_garage(),
            KeyCode::Down => self.garage_view.selection.move_down(count),
            KeyCode::Up => self.garage_view.selection.move_up(count),
            KeyCode::Tab => {
                self.garage_view.sort = self.garage_view.sort.next();
                self.garage_view.selection.clear_selection();
            }
            KeyCode::Delete | KeyCode::Backspace => self.remove_selected_garage_item(),
            _ => {}
        }
    }

    /// Hover highlights a dropdown row, left click opens it
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if self.garage_view.visible || !self.search.is_visible() {
            return;
        }
        let Some(layout) = self.dropdown else {
            return;
        };
        let Some(index) = layout.suggestion_at(self.search.suggestions(), mouse.column, mouse.row)
        else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved => self.search.hover(index),
            MouseEventKind::Down(MouseButton::Left) => {
                self.search.hover(index);
                self.activate_selected();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
