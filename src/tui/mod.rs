//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into `core::Action` values, and performs the
//! `Effect`s the reducer returns (spawning search tasks).
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Busy** (request in flight or keystroke waiting out the debounce
//!   window): polls every ~80ms so the spinner animates and the debouncer
//!   flushes promptly.
//! - **Idle**: sleeps up to 500ms and only redraws on events.
//!
//! ## Search Tasks
//!
//! Each search runs on a tokio task and reports back over an mpsc channel.
//! Starting a new search aborts the previous task; the reducer also drops
//! any response whose request id is not the newest.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::search::{AlgoliaProvider, SearchError, SearchProvider, SearchQuery};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CategoryEvent, CategoryPickerState, ResultsGridState, SearchBox, SearchBoxEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Page and scroll through results. `/` switches to Search.
    Browse,
    /// Text editing in the search box. Esc or Enter switches to Browse.
    Search,
}

/// TUI-specific presentation state (not part of core browsing logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub input_mode: InputMode,
    /// Category overlay (None = hidden)
    pub category_picker: Option<CategoryPickerState>,
    pub grid: ResultsGridState,
    /// Index name shown in the title bar
    pub index: String,
}

impl TuiState {
    pub fn new(initial_query: String, index: String) -> Self {
        Self {
            search_box: SearchBox::new(initial_query),
            input_mode: InputMode::Browse,
            category_picker: None,
            grid: ResultsGridState::default(),
            index,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Build the search provider from resolved config.
pub fn build_provider(config: &ResolvedConfig) -> Result<Arc<dyn SearchProvider>, SearchError> {
    let application_id = config.application_id.clone().ok_or_else(|| {
        SearchError::Config(
            "Algolia application id must be set (config file or ALGOLIA_APPLICATION_ID env var)"
                .to_string(),
        )
    })?;
    let api_key = config.api_key.clone().ok_or_else(|| {
        SearchError::Config(
            "Algolia API key must be set (config file or ALGOLIA_API_KEY env var)".to_string(),
        )
    })?;
    Ok(Arc::new(AlgoliaProvider::new(
        application_id,
        api_key,
        config.index.clone(),
        config.base_url.clone(),
    )))
}

pub fn run(
    provider: Arc<dyn SearchProvider>,
    config: &ResolvedConfig,
    initial_query: Option<String>,
) -> std::io::Result<()> {
    let mut app = App::from_config(provider, config);
    let initial_query = initial_query.unwrap_or_default();
    app.search_text = initial_query.clone();
    app.query = initial_query.clone();
    let mut tui = TuiState::new(initial_query, config.index.clone());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from search tasks
    let (tx, rx) = mpsc::channel();
    let mut active_search: Option<tokio::task::AbortHandle> = None;

    let effect = update(&mut app, Action::Init);
    perform(effect, &app, &tx, &mut active_search);

    let start_time = Instant::now();
    let mut needs_redraw = true;
    let mut shown_page = app.page;

    loop {
        let busy = app.is_loading || app.debouncer.is_pending();
        if busy {
            needs_redraw = true;
        }

        // Each page starts scrolled to its first row
        if app.page != shown_page {
            tui.grid.reset();
            shown_page = app.page;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if busy {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match handle_event(&event, &app, &mut tui) {
                Some(action) => action,
                None => continue,
            };
            let effect = update(&mut app, action);
            if perform(effect, &app, &tx, &mut active_search) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Flush the debouncer
        let effect = update(&mut app, Action::Tick(Instant::now()));
        perform(effect, &app, &tx, &mut active_search);

        // Handle search task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            perform(effect, &app, &tx, &mut active_search);
        }
    }

    if let Some(handle) = active_search.take() {
        handle.abort();
    }
    ratatui::restore();
    Ok(())
}

/// Translates a terminal event into a core action, updating TUI-local state
/// (focus, overlay, scroll) along the way.
fn handle_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        // Ctrl+C always quits regardless of mode
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    if let Some(picker) = tui.category_picker.as_mut() {
        return match picker.handle_event(event)? {
            CategoryEvent::Select(category) => {
                tui.category_picker = None;
                Some(Action::SelectCategory(category))
            }
            CategoryEvent::Dismiss => {
                tui.category_picker = None;
                None
            }
        };
    }

    match tui.input_mode {
        InputMode::Search => match tui.search_box.handle_event(event)? {
            SearchBoxEvent::Changed(text) => Some(Action::EditQuery {
                text,
                at: Instant::now(),
            }),
            SearchBoxEvent::Blur => {
                tui.input_mode = InputMode::Browse;
                None
            }
        },
        InputMode::Browse => match event {
            TuiEvent::InputChar('/') => {
                tui.input_mode = InputMode::Search;
                None
            }
            TuiEvent::InputChar('c') => {
                tui.category_picker = Some(CategoryPickerState::new(app.category.as_deref()));
                None
            }
            TuiEvent::InputChar('n') | TuiEvent::CursorRight => Some(Action::NextPage),
            TuiEvent::InputChar('p') | TuiEvent::CursorLeft => Some(Action::PrevPage),
            // 1-9 jump to a page (clamped to what is loaded)
            TuiEvent::InputChar(c @ '1'..='9') => {
                Some(Action::GotoPage(*c as u32 - '1' as u32))
            }
            TuiEvent::InputChar('j') | TuiEvent::CursorDown => {
                tui.grid.scroll_down();
                None
            }
            TuiEvent::InputChar('k') | TuiEvent::CursorUp => {
                tui.grid.scroll_up();
                None
            }
            TuiEvent::InputChar('q') | TuiEvent::Escape => Some(Action::Quit),
            _ => None,
        },
    }
}

/// Carries out an effect. Returns true when the app should quit.
fn perform(
    effect: Effect,
    app: &App,
    tx: &mpsc::Sender<Action>,
    active_search: &mut Option<tokio::task::AbortHandle>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Search { request_id, query } => {
            if let Some(handle) = active_search.take() {
                handle.abort();
            }
            *active_search = Some(spawn_search(
                app.provider.clone(),
                request_id,
                query,
                tx.clone(),
            ));
            false
        }
    }
}

fn spawn_search(
    provider: Arc<dyn SearchProvider>,
    request_id: u64,
    query: SearchQuery,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!(
        "Spawning search {} via {} (page={})",
        request_id,
        provider.name(),
        query.page
    );

    let handle = tokio::spawn(async move {
        let action = match provider.search(&query).await {
            Ok(results) => Action::SearchCompleted {
                request_id,
                page: query.page,
                results,
            },
            Err(e) => {
                info!("Search error: {}", e);
                Action::SearchFailed {
                    request_id,
                    error: e.to_string(),
                }
            }
        };
        if tx.send(action).is_err() {
            warn!(
                "Failed to send search result for request {}: receiver dropped",
                request_id
            );
        }
    });
    handle.abort_handle()
}
