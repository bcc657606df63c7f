/// Facet that restricts every query to published templates.
pub const PUBLISHED_FACET: &str = "custom_template.published:true";

/// One paged query against the template index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    /// Catalog name of the selected category (`None` = all categories).
    pub category: Option<String>,
    pub page: u32,
    pub hits_per_page: u32,
}

impl SearchQuery {
    /// Facet filters sent with the query: always the published flag, plus the
    /// category when one is selected.
    pub fn facet_filters(&self) -> Vec<String> {
        let mut filters = vec![PUBLISHED_FACET.to_string()];
        if let Some(category) = &self.category {
            filters.push(format!("template:{category}"));
        }
        filters
    }
}

/// A template as shown in the results grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Unique identifier in the index (`objectID`).
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Environment the template is built on (e.g. "create-react-app").
    pub environment: Option<String>,
    /// Accent color as a `#rrggbb` hex string.
    pub color: Option<String>,
    pub author: Option<String>,
    pub fork_count: u64,
    pub view_count: u64,
}

/// One page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub templates: Vec<Template>,
    /// Number of pages the index reports for this query.
    pub total_pages: u32,
}
