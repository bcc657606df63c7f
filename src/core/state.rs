//! # Application State
//!
//! Core browsing state for Explore. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn SearchProvider>  // search index client
//! ├── search_text: String          // what is typed in the search box
//! ├── query: String                // debounced text actually searched
//! ├── category: Option<String>     // catalog name filter
//! ├── page: u32                    // page being viewed (0-based)
//! ├── total_pages: u32             // nbPages from the last fresh search
//! ├── loaded_pages: u32            // pages merged into `templates`
//! ├── templates: Option<Vec<_>>    // None = nothing fetched yet
//! ├── request_id: u64              // id of the newest issued request
//! ├── is_loading: bool             // a request is in flight
//! ├── status_message: String       // status line text
//! └── error: Option<String>        // last search failure
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use log::warn;

use crate::core::catalog;
use crate::core::config::{DEFAULT_DEBOUNCE_MS, DEFAULT_HITS_PER_PAGE, ResolvedConfig};
use crate::core::debounce::Debouncer;
use crate::search::{SearchProvider, SearchQuery, Template};

pub struct App {
    pub provider: Arc<dyn SearchProvider>,
    pub search_text: String,
    pub query: String,
    pub category: Option<String>,
    pub page: u32,
    pub total_pages: u32,
    pub loaded_pages: u32,
    pub templates: Option<Vec<Template>>,
    pub hits_per_page: u32,
    pub request_id: u64,
    pub is_loading: bool,
    pub status_message: String,
    pub error: Option<String>,
    pub debouncer: Debouncer<String>,
}

impl App {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            provider,
            search_text: String::new(),
            query: String::new(),
            category: None,
            page: 0,
            total_pages: 1,
            loaded_pages: 0,
            templates: None,
            hits_per_page: DEFAULT_HITS_PER_PAGE,
            request_id: 0,
            is_loading: false,
            status_message: String::new(),
            error: None,
            debouncer: Debouncer::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS)),
        }
    }

    pub fn from_config(provider: Arc<dyn SearchProvider>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(provider);
        app.hits_per_page = config.hits_per_page;
        app.debouncer = Debouncer::new(Duration::from_millis(config.debounce_ms));

        if let Some(name) = &config.category {
            if catalog::find(name).is_some() {
                app.category = Some(name.clone());
            } else {
                warn!("Ignoring unknown default category: {}", name);
                app.status_message = format!("Unknown category: {name}");
            }
        }
        app
    }

    /// The query for the page currently being viewed.
    pub fn current_query(&self) -> SearchQuery {
        SearchQuery {
            text: self.query.clone(),
            category: self.category.clone(),
            page: self.page,
            hits_per_page: self.hits_per_page,
        }
    }

    /// The slice of accumulated results belonging to the current page.
    pub fn visible_templates(&self) -> &[Template] {
        let Some(templates) = &self.templates else {
            return &[];
        };
        let per_page = self.hits_per_page as usize;
        let start = (self.page as usize * per_page).min(templates.len());
        let end = (start + per_page).min(templates.len());
        &templates[start..end]
    }

    /// Heading shown above the results grid.
    ///
    /// An unknown category falls back to its raw name rather than failing.
    pub fn heading(&self) -> String {
        match &self.category {
            Some(name) => {
                let label = catalog::nice_name(name).unwrap_or(name.as_str());
                format!("{label} Templates")
            }
            None => "All Templates".to_string(),
        }
    }
}
