//! Algolia provider implementation using the REST query endpoint.
//!
//! One request per page: `POST /1/indexes/{index}/query` with the search
//! parameters as a JSON object. Algolia terminology is kept at this layer
//! only ("hits", "nbPages", "objectID"); everything above sees `Template`.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::search::{SearchError, SearchProvider, SearchQuery, SearchResults, Template};

// ============================================================================
// Algolia API Types
// ============================================================================

/// The request body for the query endpoint
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct QueryRequest {
    query: String,
    page: u32,
    hits_per_page: u32,
    facet_filters: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct QueryResponse {
    #[serde(default)]
    hits: Vec<Hit>,
    #[serde(rename = "nbPages", default)]
    nb_pages: u32,
}

/// A sandbox record as stored in the index
#[derive(Deserialize, Debug)]
struct Hit {
    #[serde(rename = "objectID")]
    object_id: String,
    title: Option<String>,
    description: Option<String>,
    template: Option<String>,
    custom_template: Option<CustomTemplate>,
    author: Option<Author>,
    fork_count: Option<u64>,
    view_count: Option<u64>,
}

#[derive(Deserialize, Debug)]
struct CustomTemplate {
    title: Option<String>,
    color: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Author {
    username: Option<String>,
}

/// Error body returned with non-2xx responses
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    message: String,
}

// ============================================================================
// Translation Layer
// ============================================================================

/// Converts index hits into display templates.
///
/// The template's own title wins over the sandbox title; records with
/// neither fall back to their id so every card has a name.
fn make_templates(hits: Vec<Hit>) -> Vec<Template> {
    hits.into_iter()
        .map(|hit| {
            let (custom_title, color) = match hit.custom_template {
                Some(custom) => (custom.title, custom.color),
                None => (None, None),
            };
            let name = custom_title
                .or(hit.title)
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| hit.object_id.clone());

            Template {
                id: hit.object_id,
                name,
                description: hit.description.filter(|d| !d.trim().is_empty()),
                environment: hit.template,
                color,
                author: hit.author.and_then(|a| a.username),
                fork_count: hit.fork_count.unwrap_or(0),
                view_count: hit.view_count.unwrap_or(0),
            }
        })
        .collect()
}

fn query_to_request(query: &SearchQuery) -> QueryRequest {
    QueryRequest {
        query: query.text.clone(),
        page: query.page,
        hits_per_page: query.hits_per_page,
        facet_filters: query.facet_filters(),
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Algolia search provider for a single index
pub struct AlgoliaProvider {
    application_id: String,
    api_key: String,
    index: String,
    base_url: String,
    client: reqwest::Client,
}

impl AlgoliaProvider {
    /// Creates a provider. `base_url` defaults to the application's DSN host.
    pub fn new(
        application_id: String,
        api_key: String,
        index: String,
        base_url: Option<String>,
    ) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| format!("https://{application_id}-dsn.algolia.net"))
            .trim_end_matches('/')
            .to_string();

        Self {
            application_id,
            api_key,
            index,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn query_url(&self) -> String {
        format!("{}/1/indexes/{}/query", self.base_url, self.index)
    }
}

#[async_trait]
impl SearchProvider for AlgoliaProvider {
    fn name(&self) -> &str {
        "algolia"
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResults, SearchError> {
        if self.application_id.is_empty() || self.api_key.is_empty() {
            return Err(SearchError::Config(
                "Algolia application id and API key must be set".to_string(),
            ));
        }

        let request = query_to_request(query);
        info!(
            "Algolia query: index={}, query={:?}, page={}, facets={:?}",
            self.index, request.query, request.page, request.facet_filters
        );

        let response = self
            .client
            .post(self.query_url())
            .header("X-Algolia-Application-Id", &self.application_id)
            .header("X-Algolia-API-Key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Algolia response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            warn!("Algolia API error: {} - {}", status.as_u16(), message);
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: QueryResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Parse(e.to_string()))?;
        debug!(
            "Algolia returned {} hits, nbPages={}",
            parsed.hits.len(),
            parsed.nb_pages
        );

        Ok(SearchResults {
            templates: make_templates(parsed.hits),
            total_pages: parsed.nb_pages,
        })
    }
}
