use crate::core::catalog;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{CategoryPicker, Loader, Pager, ResultsGrid, TitleBar};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

pub const EMPTY_MESSAGE: &str = "There are no templates matching your search.";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1)]);
    let [title_area, header_area, main_area, hint_area] = layout.areas(frame.area());

    TitleBar::new(
        tui.index.clone(),
        app.status_message.clone(),
        app.error.clone(),
    )
    .render(frame, title_area);

    draw_header(frame, header_area, app, tui);

    // Loading, empty, and populated are mutually exclusive
    match &app.templates {
        None => Loader::new(spinner_frame).render(frame, main_area),
        Some(templates) if templates.is_empty() => draw_empty(frame, main_area),
        Some(_) => draw_results(frame, main_area, app, tui),
    }

    draw_hints(frame, hint_area, tui.input_mode);

    if let Some(picker) = tui.category_picker.as_mut() {
        let area = frame.area();
        CategoryPicker::new(picker).render(frame, area);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let [search_area, category_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(28)]).areas(area);

    tui.search_box.focused = tui.input_mode == InputMode::Search;
    tui.search_box.render(frame, search_area);

    let (label, style) = match &app.category {
        Some(name) => (
            catalog::nice_name(name).unwrap_or(name.as_str()),
            Style::default(),
        ),
        None => ("Categories", Style::default().fg(Color::DarkGray)),
    };
    let selector = Paragraph::new(format!("{label} ▾"))
        .style(style)
        .block(
            Block::bordered()
                .title(" c ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(selector, category_area);
}

fn draw_empty(frame: &mut Frame, area: Rect) {
    let [_, row, _] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    let message = Paragraph::new(EMPTY_MESSAGE)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(message, row);
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [heading_area, grid_area, pager_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(area);

    let heading = Paragraph::new(Line::styled(
        app.heading(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, heading_area);

    ResultsGrid::new(app.visible_templates(), &mut tui.grid).render(frame, grid_area);

    let loading_page = app.is_loading && app.page >= app.loaded_pages;
    Pager::new(app.page, app.total_pages, loading_page).render(frame, pager_area);
}

fn draw_hints(frame: &mut Frame, area: Rect, mode: InputMode) {
    let hints = match mode {
        InputMode::Browse => " / Search  c Category  ←/→ Page  1-9 Go to page  ↑/↓ Scroll  q Quit ",
        InputMode::Search => " Type to search  Enter/Esc Done ",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
