//! # ResultsGrid Component
//!
//! Lays the current page's templates out as cards, as many columns as fit,
//! and scrolls by whole rows when the page does not fit on screen.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::search::Template;
use crate::tui::component::Component;
use crate::tui::components::template_card::{CARD_HEIGHT, TemplateCard};

/// Narrowest a card may get before the grid drops a column.
const MIN_CARD_WIDTH: u16 = 36;
const MAX_COLUMNS: u16 = 3;

/// Persistent scroll state for the grid.
#[derive(Debug, Default)]
pub struct ResultsGridState {
    /// First visible row of cards.
    pub scroll_row: usize,
}

impl ResultsGridState {
    pub fn scroll_up(&mut self) {
        self.scroll_row = self.scroll_row.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_row += 1;
    }

    pub fn reset(&mut self) {
        self.scroll_row = 0;
    }
}

pub struct ResultsGrid<'a> {
    pub templates: &'a [Template],
    pub state: &'a mut ResultsGridState,
}

impl<'a> ResultsGrid<'a> {
    pub fn new(templates: &'a [Template], state: &'a mut ResultsGridState) -> Self {
        Self { templates, state }
    }
}

impl Component for ResultsGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let columns = column_count(area.width);
        let rows = self.templates.len().div_ceil(columns as usize);
        let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);

        // Clamp scroll so the last row stays on screen
        self.state.scroll_row = self
            .state
            .scroll_row
            .min(rows.saturating_sub(visible_rows));

        let skip = self.state.scroll_row * columns as usize;
        let rects = card_rects(area, columns, self.templates.len() - skip.min(self.templates.len()));
        for (template, rect) in self.templates.iter().skip(skip).zip(rects) {
            TemplateCard::new(template).render(frame, rect);
        }
    }
}

fn column_count(width: u16) -> u16 {
    (width / MIN_CARD_WIDTH).clamp(1, MAX_COLUMNS)
}

/// Rects for up to `count` cards, row-major, stopping at the first row that
/// would overflow `area`.
fn card_rects(area: Rect, columns: u16, count: usize) -> Vec<Rect> {
    let card_width = area.width / columns;
    let mut rects = Vec::with_capacity(count);
    for i in 0..count {
        let row = (i / columns as usize) as u16;
        let col = (i % columns as usize) as u16;
        let y = area.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.bottom() {
            break;
        }
        // Last column absorbs the rounding remainder
        let width = if col == columns - 1 {
            area.width - card_width * col
        } else {
            card_width
        };
        rects.push(Rect::new(area.x + col * card_width, y, width, CARD_HEIGHT));
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::template;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_column_count() {
        assert_eq!(column_count(20), 1);
        assert_eq!(column_count(80), 2);
        assert_eq!(column_count(200), 3);
    }

    #[test]
    fn test_card_rects_row_major() {
        let area = Rect::new(0, 2, 80, 20);
        let rects = card_rects(area, 2, 5);
        assert_eq!(rects.len(), 5);
        assert_eq!(rects[0], Rect::new(0, 2, 40, CARD_HEIGHT));
        assert_eq!(rects[1], Rect::new(40, 2, 40, CARD_HEIGHT));
        assert_eq!(rects[2], Rect::new(0, 2 + CARD_HEIGHT, 40, CARD_HEIGHT));
    }

    #[test]
    fn test_card_rects_stop_at_bottom() {
        let area = Rect::new(0, 0, 80, 12);
        // Only two full rows fit in 12 lines
        assert_eq!(card_rects(area, 2, 10).len(), 4);
    }

    #[test]
    fn test_last_column_takes_remainder() {
        let area = Rect::new(0, 0, 81, 5);
        let rects = card_rects(area, 2, 2);
        assert_eq!(rects[0].width, 40);
        assert_eq!(rects[1].width, 41);
    }

    #[test]
    fn test_scroll_clamped_to_last_row() {
        let templates: Vec<_> = (0..10).map(|i| template(&i.to_string())).collect();
        let mut state = ResultsGridState { scroll_row: 99 };
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                ResultsGrid::new(&templates, &mut state).render(f, area);
            })
            .unwrap();
        // 5 rows of 2, 2 visible
        assert_eq!(state.scroll_row, 3);
    }
}
