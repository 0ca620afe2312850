//! Suggestion dropdown rendering
//!
//! Draws the grouped suggestion list below the search input. Each group gets
//! a header row, so dropdown rows and suggestion indices differ;
//! [`dropdown_rows`] is the single source for that mapping and is shared
//! with mouse hit-testing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::SearchState;
use crate::suggest::{Suggestion, SuggestionType};
use crate::theme;
use crate::widgets::popup;

const MAX_DROPDOWN_WIDTH: u16 = 76;
const DROPDOWN_BORDER_HEIGHT: u16 = 2;
const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";

/// One visual row of the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownRow {
    Header(SuggestionType),
    Item(usize),
}

/// Rows for a suggestion list: a header whenever the type changes
pub fn dropdown_rows(suggestions: &[Suggestion]) -> Vec<DropdownRow> {
    let mut rows = Vec::with_capacity(suggestions.len() + SuggestionType::GROUP_ORDER.len());
    let mut current: Option<SuggestionType> = None;

    for (index, suggestion) in suggestions.iter().enumerate() {
        if current != Some(suggestion.suggestion_type) {
            current = Some(suggestion.suggestion_type);
            rows.push(DropdownRow::Header(suggestion.suggestion_type));
        }
        rows.push(DropdownRow::Item(index));
    }
    rows
}

/// Where the dropdown was drawn and how far its rows are scrolled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownLayout {
    pub area: Rect,
    /// Index of the first visible row
    pub scroll: usize,
}

impl DropdownLayout {
    /// Suggestion under the terminal cell `(column, row)`, if any
    pub fn suggestion_at(&self, suggestions: &[Suggestion], column: u16, row: u16) -> Option<usize> {
        let inner_x = self.area.x.saturating_add(1);
        let inner_y = self.area.y.saturating_add(1);
        let inner_width = self.area.width.saturating_sub(2);
        let inner_height = self.area.height.saturating_sub(2);

        if column < inner_x
            || column >= inner_x.saturating_add(inner_width)
            || row < inner_y
            || row >= inner_y.saturating_add(inner_height)
        {
            return None;
        }

        item_at_row(suggestions, self.scroll + usize::from(row - inner_y))
    }
}

/// Suggestion index shown on `row` (0 = first row, before scrolling)
pub fn item_at_row(suggestions: &[Suggestion], row: usize) -> Option<usize> {
    match dropdown_rows(suggestions).get(row) {
        Some(DropdownRow::Item(index)) => Some(*index),
        _ => None,
    }
}

/// Cut `text` to at most `max_width` columns, adding an ellipsis when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Render the dropdown under the input field
///
/// The list scrolls to keep the selected suggestion in view when the
/// terminal is too short for every row. Returns the layout for mouse
/// tracking, or None when hidden.
pub fn render_dropdown(
    search: &SearchState,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<DropdownLayout> {
    if !search.is_visible() {
        return None;
    }

    let suggestions = search.suggestions();
    let rows = dropdown_rows(suggestions);
    let body_height = rows.len().max(1) as u16;

    let frame_area = frame.area();
    let width = input_area.width.min(MAX_DROPDOWN_WIDTH);
    let area = popup::popup_below_anchor(
        input_area,
        frame_area,
        width,
        body_height + DROPDOWN_BORDER_HEIGHT,
    );
    if area.height <= DROPDOWN_BORDER_HEIGHT {
        return None;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let selected = search.selected_index();

    let items: Vec<ListItem> = if suggestions.is_empty() {
        let message = if search.is_loading() {
            "  Searching…"
        } else {
            "  No matches"
        };
        vec![ListItem::new(Line::from(Span::styled(
            message,
            Style::default().fg(theme::dropdown::MUTED),
        )))]
    } else {
        rows.iter()
            .map(|row| match row {
                DropdownRow::Header(t) => header_item(*t),
                DropdownRow::Item(index) => {
                    suggestion_item(&suggestions[*index], selected == Some(*index), inner_width)
                }
            })
            .collect()
    };

    let title = if search.is_loading() {
        " Suggestions (searching…) "
    } else {
        " Suggestions "
    };

    popup::clear_area(frame, area);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(theme::dropdown::BORDER))
            .style(Style::default().bg(theme::dropdown::BACKGROUND)),
    );
    let selected_row =
        selected.and_then(|index| rows.iter().position(|row| *row == DropdownRow::Item(index)));
    let mut list_state = ListState::default().with_selected(selected_row);
    frame.render_stateful_widget(list, area, &mut list_state);

    Some(DropdownLayout {
        area,
        scroll: list_state.offset(),
    })
}

fn header_item(t: SuggestionType) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        format!(" {}", t.group_label()),
        Style::default().fg(t.color()).add_modifier(Modifier::BOLD),
    )))
}

fn suggestion_item(suggestion: &Suggestion, is_selected: bool, inner_width: usize) -> ListItem<'static> {
    let marker = if is_selected {
        SELECTED_MARKER
    } else {
        UNSELECTED_MARKER
    };
    let detail = suggestion.detail().unwrap_or("");

    // marker + text + gap + detail
    let text_budget = inner_width
        .saturating_sub(marker.width())
        .saturating_sub(detail.width())
        .saturating_sub(if detail.is_empty() { 0 } else { 2 });
    let text = truncate_to_width(&suggestion.text, text_budget);
    let padding = inner_width
        .saturating_sub(marker.width() + text.width() + detail.width());

    let (text_style, detail_style) = if is_selected {
        (
            Style::default()
                .fg(Color::Black)
                .bg(theme::dropdown::SELECTED_BG)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Black).bg(theme::dropdown::SELECTED_BG),
        )
    } else {
        (
            Style::default().fg(theme::dropdown::TEXT),
            Style::default().fg(theme::dropdown::MUTED),
        )
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!("{}{}{}", marker, text, " ".repeat(padding)), text_style),
        Span::styled(detail.to_string(), detail_style),
    ]))
}

#[cfg(test)]
#[path = "search_render_tests.rs"]
mod search_render_tests;
