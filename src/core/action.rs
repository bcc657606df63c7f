//! # Actions
//!
//! Everything that can happen in Explore becomes an `Action`.
//! User types in the search box? That's `Action::EditQuery`.
//! Index responds? That's `Action::SearchCompleted`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing the I/O the
//! caller should perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::Instant;

use log::{debug, info, warn};

use crate::core::catalog;
use crate::core::state::App;
use crate::search::{SearchQuery, SearchResults};

#[derive(Debug)]
pub enum Action {
    /// Issue the first search for the current filters.
    Init,
    /// Search box contents changed; takes effect after the debounce window.
    EditQuery { text: String, at: Instant },
    /// Clock tick, flushes the debouncer.
    Tick(Instant),
    /// Select a catalog category by name (`None` = all categories).
    SelectCategory(Option<String>),
    NextPage,
    PrevPage,
    GotoPage(u32),
    SearchCompleted {
        request_id: u64,
        page: u32,
        results: SearchResults,
    },
    SearchFailed {
        request_id: u64,
        error: String,
    },
    Quit,
}

#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// Run `query`; report back with `request_id`.
    Search { request_id: u64, query: SearchQuery },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Init => issue_search(app),
        Action::EditQuery { text, at } => {
            app.search_text = text.clone();
            app.debouncer.push(text, at);
            Effect::None
        }
        Action::Tick(now) => match app.debouncer.poll(now) {
            Some(text) if text != app.query => {
                debug!("Debounced query: {:?}", text);
                app.query = text;
                reset_paging(app);
                issue_search(app)
            }
            _ => Effect::None,
        },
        Action::SelectCategory(category) => {
            if let Some(name) = &category
                && catalog::find(name).is_none()
            {
                warn!("Rejected unknown category: {}", name);
                app.status_message = format!("Unknown category: {name}");
                return Effect::None;
            }
            if category == app.category {
                return Effect::None;
            }
            info!("Category changed to {:?}", category);
            app.category = category;
            reset_paging(app);
            issue_search(app)
        }
        Action::NextPage => goto_page(app, app.page.saturating_add(1)),
        Action::PrevPage => goto_page(app, app.page.saturating_sub(1)),
        Action::GotoPage(page) => goto_page(app, page),
        Action::SearchCompleted {
            request_id,
            page,
            results,
        } => {
            if request_id != app.request_id {
                debug!(
                    "Discarding stale response (request_id={}, latest={})",
                    request_id, app.request_id
                );
                return Effect::None;
            }
            app.is_loading = false;
            app.error = None;
            app.total_pages = results.total_pages.max(1);

            if page == 0 {
                app.templates = Some(results.templates);
                app.loaded_pages = 1;
            } else if page == app.loaded_pages {
                app.templates
                    .get_or_insert_with(Vec::new)
                    .extend(results.templates);
                app.loaded_pages += 1;
            } else {
                warn!(
                    "Dropping out-of-order page {} (loaded_pages={})",
                    page, app.loaded_pages
                );
            }
            app.page = app.page.min(app.total_pages - 1);

            let count = app.templates.as_ref().map_or(0, Vec::len);
            info!(
                "Search {} done: page {}/{}, {} templates loaded",
                request_id,
                page + 1,
                app.total_pages,
                count
            );
            app.status_message = format!("Page {} of {}", app.page + 1, app.total_pages);
            Effect::None
        }
        Action::SearchFailed { request_id, error } => {
            if request_id != app.request_id {
                return Effect::None;
            }
            warn!("Search {} failed: {}", request_id, error);
            app.is_loading = false;
            // Step back off a page that never arrived
            if app.loaded_pages > 0 && app.page >= app.loaded_pages {
                app.page = app.loaded_pages - 1;
            }
            app.status_message = "Search failed".to_string();
            app.error = Some(error);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// A fresh query or category starts over at page zero; the next response
/// replaces the accumulated list.
fn reset_paging(app: &mut App) {
    app.page = 0;
    app.loaded_pages = 0;
}

/// Moves to `target`, clamped to the pages that exist and are either loaded
/// or next in line. Landing on the next unloaded page fetches it.
fn goto_page(app: &mut App, target: u32) -> Effect {
    let last = app.loaded_pages.min(app.total_pages.saturating_sub(1));
    let target = target.min(last);
    if target == app.page {
        return Effect::None;
    }
    app.page = target;
    if target >= app.loaded_pages {
        issue_search(app)
    } else {
        app.status_message = format!("Page {} of {}", app.page + 1, app.total_pages);
        Effect::None
    }
}

fn issue_search(app: &mut App) -> Effect {
    if app.page > app.total_pages {
        return Effect::None;
    }
    app.request_id += 1;
    app.is_loading = true;
    app.status_message = "Searching...".to_string();
    Effect::Search {
        request_id: app.request_id,
        query: app.current_query(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Template;
    use crate::test_support::{template, test_app};
    use std::time::Duration;

    fn page_of(prefix: &str, count: usize, total_pages: u32) -> SearchResults {
        SearchResults {
            templates: (0..count)
                .map(|i| template(&format!("{prefix}{i}")))
                .collect(),
            total_pages,
        }
    }

    fn expect_search(effect: Effect) -> (u64, SearchQuery) {
        match effect {
            Effect::Search { request_id, query } => (request_id, query),
            other => panic!("expected a search, got {other:?}"),
        }
    }

    fn complete(app: &mut App, request_id: u64, page: u32, results: SearchResults) {
        let effect = update(
            app,
            Action::SearchCompleted {
                request_id,
                page,
                results,
            },
        );
        assert_eq!(effect, Effect::None);
    }

    fn ids(app: &App) -> Vec<String> {
        app.templates
            .as_ref()
            .map(|ts| ts.iter().map(|t: &Template| t.id.clone()).collect())
            .unwrap_or_default()
    }

    /// App with page 0 of a three-page result set loaded.
    fn loaded_app() -> App {
        let mut app = test_app();
        let (id, _) = expect_search(update(&mut app, Action::Init));
        complete(&mut app, id, 0, page_of("a", 10, 3));
        app
    }

    #[test]
    fn test_init_searches_everything_on_page_zero() {
        let mut app = test_app();
        let (id, query) = expect_search(update(&mut app, Action::Init));
        assert_eq!(id, 1);
        assert_eq!(query.text, "");
        assert_eq!(query.category, None);
        assert_eq!(query.page, 0);
        assert_eq!(query.hits_per_page, 10);
        assert_eq!(query.facet_filters(), vec!["custom_template.published:true"]);
        assert!(app.is_loading);
    }

    #[test]
    fn test_first_load_shows_one_page() {
        let mut app = test_app();
        let (id, _) = expect_search(update(&mut app, Action::Init));
        complete(&mut app, id, 0, page_of("a", 10, 4));
        assert_eq!(app.visible_templates().len(), 10);
        assert_eq!(app.total_pages, 4);
        assert_eq!(app.loaded_pages, 1);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_next_page_appends() {
        let mut app = loaded_app();
        let (id, query) = expect_search(update(&mut app, Action::NextPage));
        assert_eq!(query.page, 1);
        complete(&mut app, id, 1, page_of("b", 10, 3));

        let all = ids(&app);
        assert_eq!(all.len(), 20);
        assert_eq!(all[0], "a0");
        assert_eq!(all[10], "b0");
        assert_eq!(app.visible_templates()[0].id, "b0");
        assert_eq!(app.loaded_pages, 2);
    }

    #[test]
    fn test_changing_text_resets_and_replaces() {
        let mut app = loaded_app();
        let (id, _) = expect_search(update(&mut app, Action::NextPage));
        complete(&mut app, id, 1, page_of("b", 10, 3));
        assert_eq!(app.page, 1);

        let start = Instant::now();
        update(
            &mut app,
            Action::EditQuery {
                text: "vue".to_string(),
                at: start,
            },
        );
        let (id, query) = expect_search(update(
            &mut app,
            Action::Tick(start + Duration::from_millis(300)),
        ));
        assert_eq!(query.text, "vue");
        assert_eq!(query.page, 0);
        assert_eq!(app.page, 0);

        complete(&mut app, id, 0, page_of("v", 4, 1));
        assert_eq!(ids(&app), vec!["v0", "v1", "v2", "v3"]);
        assert_eq!(app.total_pages, 1);
    }

    #[test]
    fn test_typing_is_debounced() {
        let mut app = loaded_app();
        let start = Instant::now();
        for (i, text) in ["r", "re", "rea"].iter().enumerate() {
            let at = start + Duration::from_millis(100 * i as u64);
            update(
                &mut app,
                Action::EditQuery {
                    text: text.to_string(),
                    at,
                },
            );
            assert_eq!(update(&mut app, Action::Tick(at)), Effect::None);
        }
        assert_eq!(app.search_text, "rea");
        assert_eq!(app.query, "");

        let (_, query) = expect_search(update(
            &mut app,
            Action::Tick(start + Duration::from_millis(500)),
        ));
        assert_eq!(query.text, "rea");
    }

    #[test]
    fn test_debounced_text_unchanged_does_not_search() {
        let mut app = loaded_app();
        let start = Instant::now();
        update(
            &mut app,
            Action::EditQuery {
                text: String::new(),
                at: start,
            },
        );
        assert_eq!(
            update(&mut app, Action::Tick(start + Duration::from_secs(1))),
            Effect::None
        );
    }

    #[test]
    fn test_select_category_filters_requests() {
        let mut app = loaded_app();
        let (id, query) = expect_search(update(
            &mut app,
            Action::SelectCategory(Some("vue-cli".to_string())),
        ));
        assert_eq!(
            query.facet_filters(),
            vec!["custom_template.published:true", "template:vue-cli"]
        );
        complete(&mut app, id, 0, page_of("v", 3, 1));
        assert_eq!(app.heading(), "Vue Templates");
        assert_eq!(ids(&app), vec!["v0", "v1", "v2"]);
    }

    #[test]
    fn test_select_same_category_is_noop() {
        let mut app = loaded_app();
        assert_eq!(update(&mut app, Action::SelectCategory(None)), Effect::None);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut app = loaded_app();
        let effect = update(&mut app, Action::SelectCategory(Some("cobol".to_string())));
        assert_eq!(effect, Effect::None);
        assert!(app.category.is_none());
        assert_eq!(app.status_message, "Unknown category: cobol");
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut app = loaded_app();
        let (old_id, _) = expect_search(update(
            &mut app,
            Action::SelectCategory(Some("node".to_string())),
        ));
        let (new_id, _) = expect_search(update(
            &mut app,
            Action::SelectCategory(Some("svelte".to_string())),
        ));
        complete(&mut app, new_id, 0, page_of("s", 2, 1));
        complete(&mut app, old_id, 0, page_of("n", 9, 1));
        assert_eq!(ids(&app), vec!["s0", "s1"]);
    }

    #[test]
    fn test_prev_page_does_not_refetch() {
        let mut app = loaded_app();
        let (id, _) = expect_search(update(&mut app, Action::NextPage));
        complete(&mut app, id, 1, page_of("b", 10, 3));

        assert_eq!(update(&mut app, Action::PrevPage), Effect::None);
        assert_eq!(app.page, 0);
        assert_eq!(app.visible_templates()[0].id, "a0");

        // Page 1 is already loaded; going forward again is local
        assert_eq!(update(&mut app, Action::NextPage), Effect::None);
        assert_eq!(app.page, 1);
        assert_eq!(ids(&app).len(), 20);
    }

    #[test]
    fn test_next_page_blocked_while_fetching() {
        let mut app = loaded_app();
        expect_search(update(&mut app, Action::NextPage));
        assert_eq!(update(&mut app, Action::NextPage), Effect::None);
        assert_eq!(app.page, 1);
    }

    #[test]
    fn test_page_never_exceeds_total() {
        let mut app = test_app();
        let (id, _) = expect_search(update(&mut app, Action::Init));
        complete(&mut app, id, 0, page_of("a", 3, 1));
        assert_eq!(update(&mut app, Action::NextPage), Effect::None);
        assert_eq!(update(&mut app, Action::GotoPage(9)), Effect::None);
        assert_eq!(app.page, 0);
    }

    #[test]
    fn test_empty_results_keep_one_page() {
        let mut app = test_app();
        let (id, _) = expect_search(update(&mut app, Action::Init));
        complete(&mut app, id, 0, page_of("a", 0, 0));
        assert_eq!(app.templates.as_deref().map(<[_]>::len), Some(0));
        assert_eq!(app.total_pages, 1);
    }

    #[test]
    fn test_failure_keeps_results() {
        let mut app = loaded_app();
        let (id, _) = expect_search(update(&mut app, Action::NextPage));
        update(
            &mut app,
            Action::SearchFailed {
                request_id: id,
                error: "network error: refused".to_string(),
            },
        );
        assert!(!app.is_loading);
        assert_eq!(app.error.as_deref(), Some("network error: refused"));
        assert_eq!(ids(&app).len(), 10);
    }

    #[test]
    fn test_failed_next_page_returns_to_loaded_page() {
        let mut app = loaded_app();
        let (id, _) = expect_search(update(&mut app, Action::NextPage));
        update(
            &mut app,
            Action::SearchFailed {
                request_id: id,
                error: "network error: refused".to_string(),
            },
        );
        assert_eq!(app.page, 0);
        assert_eq!(app.visible_templates().len(), 10);

        // Retrying fetches the missing page again
        let (_, query) = expect_search(update(&mut app, Action::NextPage));
        assert_eq!(query.page, 1);
        assert_eq!(app.page, 1);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
