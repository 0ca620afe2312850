use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use unicode_width::UnicodeWidthStr;

use super::state::App;
use crate::garage::SavedItem;
use crate::search::search_render::{render_dropdown, truncate_to_width};
use crate::suggest::format_price;
use crate::theme;
use crate::widgets::popup;

const GARAGE_POPUP_WIDTH: u16 = 72;
const GARAGE_POPUP_MIN_HEIGHT: u16 = 5;
const HINT: &str = "Type to search · ↑/↓ select · Enter open · Ctrl+S save · Ctrl+G garage · Esc close";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [input_area, detail_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_input_field(frame, input_area);
        self.render_detail_pane(frame, detail_area);
        self.render_status_bar(frame, status_area);

        // Popups last so they draw over the panes
        if self.garage_view.visible {
            self.dropdown = None;
            self.render_garage(frame);
        } else {
            self.dropdown = render_dropdown(&self.search, frame, input_area);
        }
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.garage_view.visible {
            theme::input::BORDER_UNFOCUSED
        } else {
            theme::input::BORDER
        };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(&self.textarea, area);
    }

    fn render_detail_pane(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Details ")
            .border_style(Style::default().fg(theme::detail::BORDER));

        let lines = match (&self.last_activated, &self.last_navigation) {
            (Some(suggestion), Some(target)) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        suggestion.text.clone(),
                        Style::default()
                            .fg(theme::detail::TITLE)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        suggestion.suggestion_type.group_label(),
                        Style::default().fg(suggestion.suggestion_type.color()),
                    )),
                    Line::from(""),
                    Line::from(format!("→ {}", target.path())),
                ];
                if let Some(detail) = suggestion.detail() {
                    lines.push(Line::from(detail.to_string()));
                }
                if let Some(answer) = &suggestion.ai_response {
                    lines.push(Line::from(""));
                    lines.push(Line::from(answer.clone()));
                }
                lines
            }
            _ => vec![Line::from(Span::styled(
                "Nothing opened yet.",
                Style::default().fg(theme::detail::TEXT),
            ))],
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(theme::detail::TEXT))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let garage = format!(" Garage: {} ", self.garage_count());
        let message_width = usize::from(area.width).saturating_sub(garage.len());

        let message = match &self.status {
            Some(status) => Span::styled(
                truncate_to_width(status, message_width),
                Style::default().fg(theme::status::MESSAGE),
            ),
            None => Span::styled(
                truncate_to_width(HINT, message_width),
                Style::default().fg(theme::status::TEXT),
            ),
        };
        let padding = message_width.saturating_sub(message.width());

        let line = Line::from(vec![
            message,
            Span::raw(" ".repeat(padding)),
            Span::styled(garage, Style::default().fg(theme::garage::BORDER)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_garage(&self, frame: &mut Frame) {
        let items = self.garage_items();
        let height = (items.len().max(1) as u16 + 4).max(GARAGE_POPUP_MIN_HEIGHT);
        let area = popup::centered_popup(frame.area(), GARAGE_POPUP_WIDTH, height);
        let inner_width = usize::from(area.width.saturating_sub(2));

        let selected = self.garage_view.selection.get_selected();
        let mut rows: Vec<ListItem> = if items.is_empty() {
            vec![ListItem::new(Span::styled(
                " No saved vehicles yet. Press Ctrl+S on a car to save it.",
                Style::default().fg(theme::dropdown::MUTED),
            ))]
        } else {
            items
                .iter()
                .enumerate()
                .map(|(i, item)| garage_row(item, selected == Some(i), inner_width))
                .collect()
        };
        rows.push(ListItem::new(""));
        rows.push(ListItem::new(Span::styled(
            " ↑/↓ select · Tab sort · Del remove · Esc close",
            Style::default().fg(theme::dropdown::MUTED),
        )));

        let title = format!(" My Garage (by {}) ", self.garage_view.sort.label());
        popup::clear_area(frame, area);
        frame.render_widget(
            List::new(rows).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(theme::garage::BORDER)),
            ),
            area,
        );
    }
}

fn garage_row(item: &SavedItem, is_selected: bool, inner_width: usize) -> ListItem<'static> {
    let marker = if is_selected { "► " } else { "  " };
    let price = item.price.map(format_price).unwrap_or_default();
    let saved = item.saved_at.format("%Y-%m-%d").to_string();

    let right = format!("{:>10}  {}", price, saved);
    let title_width = inner_width.saturating_sub(marker.width() + right.len() + 1);
    let title = truncate_to_width(&item.title, title_width);
    let padding = inner_width.saturating_sub(marker.width() + title.width() + right.len());

    let style = if is_selected {
        Style::default()
            .bg(theme::dropdown::SELECTED_BG)
            .fg(ratatui::style::Color::Black)
    } else {
        Style::default()
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!("{}{}{}", marker, title, " ".repeat(padding)), style),
        Span::styled(right, style.fg(theme::garage::PRICE)),
    ]))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
