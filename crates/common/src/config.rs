//! Application configuration.

use serde::Deserialize;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Site metadata.
    #[serde(default)]
    pub site: SiteConfig,
    /// Pagination defaults.
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Seed data settings.
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Site metadata configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Display name of the site.
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Public base URL of the site.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Pagination defaults for list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the caller does not supply one.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Number of featured posts shown on the front page.
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
    /// Number of popular posts shown in the sidebar.
    #[serde(default = "default_popular_limit")]
    pub popular_limit: usize,
}

/// Seed data settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Whether to load the demo dataset on startup.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            featured_limit: default_featured_limit(),
            popular_limit: default_popular_limit(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

fn default_site_name() -> String {
    "QuillPress".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

const fn default_page_size() -> usize {
    10
}

const fn default_featured_limit() -> usize {
    3
}

const fn default_popular_limit() -> usize {
    5
}

const fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `QUILLPRESS_ENV`)
    /// 3. Environment variables with `QUILLPRESS` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = std::env::var("QUILLPRESS_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("QUILLPRESS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("QUILLPRESS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
