//! # TemplateCard Component
//!
//! One bordered card in the results grid. The border takes the template's
//! accent color when it has a valid `#rrggbb` one.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::catalog;
use crate::search::Template;
use crate::tui::component::Component;

/// Rows taken by one card, borders included.
pub const CARD_HEIGHT: u16 = 5;

pub struct TemplateCard<'a> {
    pub template: &'a Template,
}

impl<'a> TemplateCard<'a> {
    pub fn new(template: &'a Template) -> Self {
        Self { template }
    }
}

impl Component for TemplateCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let template = self.template;
        let accent = template
            .color
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(Color::Gray);
        let inner_width = area.width.saturating_sub(2) as usize;

        let description = match &template.description {
            Some(d) => Line::raw(truncate_to_width(d.trim(), inner_width)),
            None => Line::styled(
                "No description",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        };

        let environment = template
            .environment
            .as_deref()
            .map(|env| catalog::nice_name(env).unwrap_or(env))
            .unwrap_or("");

        let mut meta = Vec::new();
        if let Some(author) = &template.author {
            meta.push(format!("by {author}"));
        }
        meta.push(format!("{} forks", template.fork_count));
        meta.push(format!("{} views", template.view_count));

        let lines = vec![
            description,
            Line::from(Span::styled(
                truncate_to_width(environment, inner_width),
                Style::default().fg(accent),
            )),
            Line::styled(
                truncate_to_width(&meta.join(" · "), inner_width),
                Style::default().fg(Color::DarkGray),
            ),
        ];

        let title = truncate_to_width(&template.name, inner_width.saturating_sub(2));
        let block = Block::bordered()
            .title(format!(" {title} "))
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(accent));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Parses `#rrggbb` into an RGB color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Truncates `s` to at most `max_width` display columns, adding "…" if cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
