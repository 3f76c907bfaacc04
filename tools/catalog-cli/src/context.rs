//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use catalog_data::{HttpGateway, ProductGateway};
use catalog_store::{CatalogStore, StoreConfig};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// File the config was loaded from, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some(path) => {
                    let config = CliConfig::load(&path.to_string_lossy())?;
                    (config, Some(path))
                }
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Find config file in directory tree.
    pub fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Gateway built from the `[api]` section.
    pub fn gateway(&self) -> Result<Arc<dyn ProductGateway>> {
        let gateway_config = self.config.gateway_config();
        self.output
            .debug(&format!("Catalog API: {}", gateway_config.base_url));
        let gateway = HttpGateway::new(&gateway_config)
            .with_context(|| format!("Invalid API configuration: {}", gateway_config.base_url))?;
        Ok(Arc::new(gateway))
    }

    /// Store settings from the config file.
    pub fn store_config(&self) -> StoreConfig {
        self.config.store_config()
    }

    /// Idle store wired to the configured gateway.
    pub fn store(&self, config: StoreConfig) -> Result<CatalogStore> {
        Ok(CatalogStore::new(self.gateway()?, config))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("catalog-cli-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_find_config_searches_upward() {
        let root = scratch_dir("upward");
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("catalog.toml"), "").unwrap();

        assert_eq!(Context::find_config(&nested), Some(root.join("catalog.toml")));
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_find_config_prefers_toml() {
        let root = scratch_dir("prefers");
        std::fs::write(root.join("catalog.json"), "{}").unwrap();
        std::fs::write(root.join("catalog.toml"), "").unwrap();

        assert_eq!(Context::find_config(&root), Some(root.join("catalog.toml")));
        std::fs::remove_dir_all(&root).unwrap();
    }
}
