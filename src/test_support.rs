//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Arc;

use crate::search::{SearchError, SearchProvider, SearchQuery, SearchResults, Template};

/// A provider for tests that don't need real index calls. Always returns no hits.
pub struct NoopProvider;

#[async_trait]
impl SearchProvider for NoopProvider {
    fn name(&self) -> &str {
        "noop"
    }

    async fn search(&self, _query: &SearchQuery) -> Result<SearchResults, SearchError> {
        Ok(SearchResults {
            templates: Vec::new(),
            total_pages: 0,
        })
    }
}

/// Creates a test App with a NoopProvider.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopProvider))
}

/// A template with only an id and a derived name.
pub fn template(id: &str) -> Template {
    Template {
        id: id.to_string(),
        name: format!("Template {id}"),
        description: None,
        environment: None,
        color: None,
        author: None,
        fork_count: 0,
        view_count: 0,
    }
}
