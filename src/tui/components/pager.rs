//! # Pager Component
//!
//! One-line page control: `‹ Prev   Page 2 of 5   Next ›`. Arrows are dimmed
//! when there is nowhere to go in that direction.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct Pager {
    /// 0-based page being viewed
    pub page: u32,
    pub total_pages: u32,
    /// A fetch for the current page is in flight
    pub loading: bool,
}

impl Pager {
    pub fn new(page: u32, total_pages: u32, loading: bool) -> Self {
        Self {
            page,
            total_pages,
            loading,
        }
    }

    fn has_prev(&self) -> bool {
        self.page > 0
    }

    fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    fn label(&self) -> String {
        let label = format!("Page {} of {}", self.page + 1, self.total_pages.max(1));
        if self.loading {
            format!("{label} (loading)")
        } else {
            label
        }
    }
}

impl Component for Pager {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let arrow = |enabled: bool| {
            if enabled {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        };
        let line = Line::from(vec![
            Span::styled("‹ Prev", arrow(self.has_prev())),
            Span::raw("   "),
            Span::raw(self.label()),
            Span::raw("   "),
            Span::styled("Next ›", arrow(self.has_next())),
        ])
        .centered();
        frame.render_widget(Paragraph::new(line), area);
    }
}
