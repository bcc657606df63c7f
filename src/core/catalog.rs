//! # Template Catalog
//!
//! Static list of the environments templates can be filtered by. `name` is
//! the value stored in the index's `template` attribute; `nice_name` is what
//! the user sees.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub nice_name: &'static str,
}

const fn entry(name: &'static str, nice_name: &'static str) -> CatalogEntry {
    CatalogEntry { name, nice_name }
}

pub const CATALOG: &[CatalogEntry] = &[
    entry("create-react-app", "React"),
    entry("create-react-app-typescript", "React + TS"),
    entry("vue-cli", "Vue"),
    entry("angular-cli", "Angular"),
    entry("preact-cli", "Preact"),
    entry("svelte", "Svelte"),
    entry("sapper", "Sapper"),
    entry("parcel", "Vanilla"),
    entry("static", "Static"),
    entry("node", "Node"),
    entry("nest", "Nest"),
    entry("apollo", "Apollo"),
    entry("next", "Next.js"),
    entry("nuxt", "Nuxt.js"),
    entry("gatsby", "Gatsby"),
    entry("gridsome", "Gridsome"),
    entry("vuepress", "VuePress"),
    entry("ember", "Ember"),
    entry("reason", "Reason"),
    entry("@dojo/cli-create-app", "Dojo"),
    entry("cxjs", "CxJS"),
    entry("quasar", "Quasar"),
    entry("styleguidist", "Styleguidist"),
    entry("mdx-deck", "MDX Deck"),
];

/// Looks up a catalog entry by its index name.
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

/// Display name for a category, or `None` if it is not in the catalog.
pub fn nice_name(name: &str) -> Option<&'static str> {
    find(name).map(|entry| entry.nice_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_find_known_category() {
        assert_eq!(nice_name("vue-cli"), Some("Vue"));
        assert_eq!(nice_name("@dojo/cli-create-app"), Some("Dojo"));
    }

    #[test]
    fn test_unknown_category_is_none() {
        assert_eq!(nice_name("cobol"), None);
        assert_eq!(nice_name(""), None);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }
}
