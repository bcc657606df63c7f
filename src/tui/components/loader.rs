//! # Loader Component
//!
//! Spinner shown until the first page of results arrives.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct Loader {
    frame_index: usize,
}

impl Loader {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }

    fn text(&self) -> String {
        let glyph = SPINNER[self.frame_index % SPINNER.len()];
        format!("{glyph} Loading templates...")
    }
}

impl Component for Loader {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        let paragraph = Paragraph::new(self.text())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, row);
    }
}
