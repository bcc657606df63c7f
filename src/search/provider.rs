use std::fmt;

use async_trait::async_trait;

use super::types::{SearchQuery, SearchResults};

/// Errors that can occur while querying a search index.
#[derive(Debug)]
pub enum SearchError {
    /// Provider misconfigured (missing application id or API key).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The index returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the index's response.
    Parse(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Config(msg) => write!(f, "config error: {msg}"),
            SearchError::Network(msg) => write!(f, "network error: {msg}"),
            SearchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SearchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Runs one paged query against the index.
    async fn search(&self, query: &SearchQuery) -> Result<SearchResults, SearchError>;
}
