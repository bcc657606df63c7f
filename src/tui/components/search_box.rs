//! # SearchBox Component
//!
//! Single-line query input. Focused with `/`; while unfocused it shows the
//! current text (or a dim "Search" placeholder) without a cursor.
//!
//! Emits `SearchBoxEvent::Changed` on every edit. Debouncing is the core's
//! job, so the box reports raw keystrokes.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search";

#[derive(Debug, Clone, PartialEq)]
pub enum SearchBoxEvent {
    Changed(String),
    /// Focus left the box (Esc or Enter)
    Blur,
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether the box has keyboard focus (Prop)
    pub focused: bool,
}

impl SearchBox {
    pub fn new(initial: String) -> Self {
        Self {
            buffer: initial,
            focused: false,
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchBoxEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchBoxEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Submit => Some(SearchBoxEvent::Blur),
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchBoxEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                // Queries are single-line
                let flattened = text.replace(['\r', '\n'], " ");
                self.buffer.push_str(&flattened);
                Some(SearchBoxEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                self.buffer.pop()?;
                Some(SearchBoxEvent::Changed(self.buffer.clone()))
            }
            _ => None,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(" / ")
            .border_style(border_style)
            .title_style(border_style);

        let inner_width = area.width.saturating_sub(2) as usize;
        let text_width = self.buffer.width();

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            // Keep the end of the text (where the cursor is) visible
            let scroll = text_width.saturating_sub(inner_width.saturating_sub(1));
            Paragraph::new(self.buffer.as_str()).scroll((0, scroll as u16))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused && area.width > 2 && area.height > 2 {
            let visible = text_width.min(inner_width.saturating_sub(1)) as u16;
            frame.set_cursor_position(Position::new(area.x + 1 + visible, area.y + 1));
        }
    }
}
