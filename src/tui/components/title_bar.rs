//! # TitleBar Component
//!
//! Top status line: screen title, the index being browsed, and the current
//! status. A failed search shows its error in red after the status.
//!
//! Purely presentational. Props come from the core `App`:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(index, app.status_message.clone(), app.error.clone());
//! title_bar.render(frame, area);
//! ```
//!
//! Formats, in priority order:
//!
//! 1. **Error**: `"Explore Templates (index: x) | Search failed | network error: ..."`
//! 2. **Status message**: `"Explore Templates (index: x) | Page 1 of 4"`
//! 3. **Default**: `"Explore Templates (index: x)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Index being browsed
    pub index: String,
    /// Status message (e.g. "Searching...", "Page 2 of 5")
    pub status_message: String,
    /// Last search failure, if any
    pub error: Option<String>,
}

impl TitleBar {
    pub fn new(index: String, status_message: String, error: Option<String>) -> Self {
        Self {
            index,
            status_message,
            error,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(format!("Explore Templates (index: {})", self.index))];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        if let Some(error) = &self.error {
            spans.push(Span::styled(
                format!(" | {error}"),
                Style::default().fg(Color::Red),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
