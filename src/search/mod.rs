pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{SearchError, SearchProvider};
pub use providers::AlgoliaProvider;
pub use types::{PUBLISHED_FACET, SearchQuery, SearchResults, Template};
