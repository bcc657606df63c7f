//! # Category Picker Component
//!
//! Overlay listing "All categories" followed by every catalog entry.
//! Opened with `c`, dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CategoryPickerState` lives in `TuiState` while the overlay is open
//! - `CategoryPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::catalog::{CATALOG, CatalogEntry};
use crate::tui::event::TuiEvent;

const ALL_LABEL: &str = "All categories";

/// Persistent state for the category picker overlay.
pub struct CategoryPickerState {
    /// Index into the option list; 0 is "All categories", `i + 1` is `CATALOG[i]`.
    pub selected: usize,
    pub list_state: ListState,
}

impl CategoryPickerState {
    /// Opens the picker with the current category highlighted.
    pub fn new(current: Option<&str>) -> Self {
        let selected = current
            .and_then(|name| CATALOG.iter().position(|entry| entry.name == name))
            .map_or(0, |i| i + 1);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            selected,
            list_state,
        }
    }

    fn option_count() -> usize {
        CATALOG.len() + 1
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }

    /// Handle a key event, returning a CategoryEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<CategoryEvent> {
        match event {
            TuiEvent::Escape => Some(CategoryEvent::Dismiss),
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                self.select((self.selected + 1).min(Self::option_count() - 1));
                None
            }
            TuiEvent::Submit => {
                let category = match self.selected {
                    0 => None,
                    i => CATALOG.get(i - 1).map(|entry| entry.name.to_string()),
                };
                Some(CategoryEvent::Select(category))
            }
            _ => None,
        }
    }
}

/// Events emitted by the category picker.
#[derive(Debug, PartialEq)]
pub enum CategoryEvent {
    Select(Option<String>),
    Dismiss,
}

/// Transient render wrapper for the category picker overlay.
pub struct CategoryPicker<'a> {
    state: &'a mut CategoryPickerState,
}

impl<'a> CategoryPicker<'a> {
    pub fn new(state: &'a mut CategoryPickerState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(40, 70, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Categories ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let labels = std::iter::once(ALL_LABEL).chain(CATALOG.iter().map(|e: &CatalogEntry| e.nice_name));
        let items: Vec<ListItem> = labels
            .enumerate()
            .map(|(i, label)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::styled(label, style))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
