//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use catalog_data::{GatewayConfig, DEFAULT_BASE_URL};
use catalog_observability::LoggingConfig;
use catalog_store::{StoreConfig, DEFAULT_FETCH_LIMIT, DEFAULT_SEARCH_DEBOUNCE};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["catalog.toml", ".catalog.toml", "catalog.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Remote catalog API.
    #[serde(default)]
    pub api: ApiConfig,

    /// Catalog browsing.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config content; the format follows the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Gateway settings.
    pub fn gateway_config(&self) -> GatewayConfig {
        let config = GatewayConfig::new(self.api.base_url.clone());
        match self.api.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }

    /// Store settings.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default()
            .with_fetch_limit(self.api.fetch_limit)
            .with_items_per_page(self.catalog.items_per_page)
            .with_search_debounce(Duration::from_millis(self.catalog.search_debounce_ms))
    }

    /// Check values the types alone cannot rule out.
    ///
    /// Returns `(errors, warnings)`.
    pub fn check(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if catalog_data::parse_base_url(&self.api.base_url).is_err() {
            errors.push(format!("api.base_url '{}' is not an http(s) URL", self.api.base_url));
        }
        if self.api.timeout_secs == Some(0) {
            errors.push("api.timeout_secs must be greater than 0".to_string());
        }
        if self.api.fetch_limit == 0 {
            errors.push("api.fetch_limit must be greater than 0".to_string());
        } else if self.api.fetch_limit > 194 {
            warnings.push(format!(
                "api.fetch_limit {} exceeds the size of the demo catalog (194)",
                self.api.fetch_limit
            ));
        }
        if self.catalog.items_per_page == 0 {
            errors.push("catalog.items_per_page must be greater than 0".to_string());
        }
        if self.catalog.search_debounce_ms > 5_000 {
            warnings.push(format!(
                "catalog.search_debounce_ms {} will make search feel unresponsive",
                self.catalog.search_debounce_ms
            ));
        }

        (errors, warnings)
    }
}

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: transport default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Products fetched up front.
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_fetch_limit() -> u32 {
    DEFAULT_FETCH_LIMIT
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            fetch_limit: default_fetch_limit(),
        }
    }
}

/// Browsing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products per page.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// Quiet window before interactive search is applied.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_items_per_page() -> usize {
    StoreConfig::default().items_per_page
}

fn default_search_debounce_ms() -> u64 {
    DEFAULT_SEARCH_DEBOUNCE.as_millis() as u64
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

/// Generate a default catalog.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Catalog viewer configuration

[api]
base_url = "{base_url}"
# timeout_secs = 10
fetch_limit = {fetch_limit}

[catalog]
items_per_page = {items_per_page}
search_debounce_ms = {debounce}

[logging]
# trace | debug | info | warn | error
level = "warn"
# human | json
format = "human"
# directives = "catalog_data=debug"
"#,
        base_url = DEFAULT_BASE_URL,
        fetch_limit = DEFAULT_FETCH_LIMIT,
        items_per_page = default_items_per_page(),
        debounce = default_search_debounce_ms(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_observability::{LogFormat, LogLevel};

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = CliConfig::parse("catalog.toml", "").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.api.base_url, "https://dummyjson.com");
        assert_eq!(config.api.fetch_limit, 100);
        assert_eq!(config.catalog.items_per_page, 12);
        assert_eq!(config.catalog.search_debounce_ms, 300);
    }

    #[test]
    fn test_generated_config_round_trips() {
        let config = CliConfig::parse("catalog.toml", &generate_default_config()).unwrap();
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.catalog, CatalogConfig::default());
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.logging.format, LogFormat::Human);
        let (errors, warnings) = config.check();
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_parse_toml_overrides() {
        let config = CliConfig::parse(
            "catalog.toml",
            r#"
            [api]
            base_url = "http://127.0.0.1:8080"
            timeout_secs = 5

            [catalog]
            items_per_page = 24

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        let gateway = config.gateway_config();
        assert_eq!(gateway.base_url, "http://127.0.0.1:8080");
        assert_eq!(gateway.timeout, Some(Duration::from_secs(5)));

        let store = config.store_config();
        assert_eq!(store.items_per_page, 24);
        assert_eq!(store.fetch_limit, 100);
        assert_eq!(store.search_debounce, Duration::from_millis(300));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_parse_json() {
        let config = CliConfig::parse(
            "catalog.json",
            r#"{"catalog": {"items_per_page": 6, "search_debounce_ms": 0}}"#,
        )
        .unwrap();
        assert_eq!(config.store_config().items_per_page, 6);
        assert_eq!(config.store_config().search_debounce, Duration::ZERO);
        assert_eq!(config.gateway_config().timeout, None);
    }

    #[test]
    fn test_parse_error_mentions_path() {
        let err = CliConfig::parse("broken.toml", "[api\n").unwrap_err();
        assert!(format!("{:#}", err).contains("broken.toml"));
    }

    #[test]
    fn test_check_reports_errors() {
        let mut config = CliConfig::default();
        config.api.base_url = "ftp://example.com".to_string();
        config.api.fetch_limit = 0;
        config.catalog.items_per_page = 0;

        let (errors, _) = config.check();
        assert_eq!(errors.len(), 3);
    }
}
