//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.explore/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExploreConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub algolia: AlgoliaConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub hits_per_page: Option<u32>,
    pub debounce_ms: Option<u64>,
    pub default_category: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AlgoliaConfig {
    pub application_id: Option<String>,
    pub api_key: Option<String>,
    pub index: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_HITS_PER_PAGE: u32 = 10;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_INDEX: &str = "staging_sandboxes";

// ============================================================================
// Resolved Config (concrete values where a default exists)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub hits_per_page: u32,
    pub debounce_ms: u64,
    pub category: Option<String>,
    pub application_id: Option<String>,
    pub api_key: Option<String>,
    pub index: String,
    /// `None` = the application's DSN host.
    pub base_url: Option<String>,
}

/// Values taken from CLI flags (None = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides<'a> {
    pub index: Option<&'a str>,
    pub category: Option<&'a str>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.explore/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".explore").join("config.toml"))
}

/// Load config from `~/.explore/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ExploreConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ExploreConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ExploreConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ExploreConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ExploreConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Explore Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# hits_per_page = 10
# debounce_ms = 300                  # Quiet time before a keystroke triggers a search
# default_category = "vue-cli"       # Catalog name; omit for all templates

# [algolia]
# application_id = "..."             # Or set ALGOLIA_APPLICATION_ID env var
# api_key = "..."                    # Or set ALGOLIA_API_KEY env var (search-only key)
# index = "staging_sandboxes"        # Or set ALGOLIA_INDEX env var
# base_url = "https://APPID-dsn.algolia.net"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ExploreConfig, cli: CliOverrides<'_>) -> ResolvedConfig {
    // Credentials: env → config
    let application_id = std::env::var("ALGOLIA_APPLICATION_ID")
        .ok()
        .or_else(|| config.algolia.application_id.clone());
    let api_key = std::env::var("ALGOLIA_API_KEY")
        .ok()
        .or_else(|| config.algolia.api_key.clone());

    // Index: CLI → env → config → default
    let index = cli
        .index
        .map(|s| s.to_string())
        .or_else(|| std::env::var("ALGOLIA_INDEX").ok())
        .or_else(|| config.algolia.index.clone())
        .unwrap_or_else(|| DEFAULT_INDEX.to_string());

    let base_url = std::env::var("ALGOLIA_BASE_URL")
        .ok()
        .or_else(|| config.algolia.base_url.clone());

    // Category: CLI → config. Validated against the catalog when applied.
    let category = cli
        .category
        .map(|s| s.to_string())
        .or_else(|| config.general.default_category.clone())
        .filter(|s| !s.is_empty());

    ResolvedConfig {
        hits_per_page: config
            .general
            .hits_per_page
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_HITS_PER_PAGE),
        debounce_ms: config.general.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS),
        category,
        application_id,
        api_key,
        index,
        base_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ExploreConfig::default();
        assert!(config.general.hits_per_page.is_none());
        assert!(config.algolia.index.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ExploreConfig::default();
        let resolved = resolve(&config, CliOverrides::default());
        assert_eq!(resolved.hits_per_page, DEFAULT_HITS_PER_PAGE);
        assert_eq!(resolved.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert!(resolved.category.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ExploreConfig {
            general: GeneralConfig {
                hits_per_page: Some(25),
                debounce_ms: Some(150),
                default_category: Some("svelte".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, CliOverrides::default());
        assert_eq!(resolved.hits_per_page, 25);
        assert_eq!(resolved.debounce_ms, 150);
        assert_eq!(resolved.category.as_deref(), Some("svelte"));
    }

    #[test]
    fn test_zero_hits_per_page_falls_back_to_default() {
        let config = ExploreConfig {
            general: GeneralConfig {
                hits_per_page: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, CliOverrides::default());
        assert_eq!(resolved.hits_per_page, DEFAULT_HITS_PER_PAGE);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = ExploreConfig {
            general: GeneralConfig {
                default_category: Some("svelte".to_string()),
                ..Default::default()
            },
            algolia: AlgoliaConfig {
                index: Some("from_config".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(
            &config,
            CliOverrides {
                index: Some("from_cli"),
                category: Some("vue-cli"),
            },
        );
        assert_eq!(resolved.index, "from_cli");
        assert_eq!(resolved.category.as_deref(), Some("vue-cli"));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
hits_per_page = 20
debounce_ms = 500
default_category = "node"

[algolia]
application_id = "APPID"
api_key = "search-key"
index = "prod_sandboxes"
"#;
        let config: ExploreConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.hits_per_page, Some(20));
        assert_eq!(config.general.default_category.as_deref(), Some("node"));
        assert_eq!(config.algolia.application_id.as_deref(), Some("APPID"));
        assert_eq!(config.algolia.index.as_deref(), Some("prod_sandboxes"));
        assert!(config.algolia.base_url.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[algolia]
api_key = "k"
"#;
        let config: ExploreConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.algolia.api_key.as_deref(), Some("k"));
        assert!(config.general.debounce_ms.is_none());
    }
}
