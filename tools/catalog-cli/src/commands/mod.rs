//! CLI command implementations.

pub mod browse;
pub mod categories;
pub mod config;
pub mod interactive;
pub mod show;

use catalog_commerce::search::{CategoryFilter, FilterUpdate, SortOption};
use catalog_store::StoreConfig;
use clap::{Args, Subcommand};

/// Filter flags shared by commands that load the catalog.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Search title, description, brand and category.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category slug, or "all".
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Sort order: title-asc, title-desc, price-asc, price-desc.
    #[arg(long)]
    pub sort: Option<SortOption>,

    /// Products per page (default: from config).
    #[arg(long)]
    pub per_page: Option<usize>,
}

impl FilterArgs {
    /// Filter update for the flags that were given.
    pub fn to_update(&self) -> FilterUpdate {
        let mut update = FilterUpdate::new();
        if let Some(term) = &self.search {
            update = update.search(term.clone());
        }
        if let Some(category) = &self.category {
            update = update.category(CategoryFilter::slug(category.clone()));
        }
        if let Some(sort) = self.sort {
            update = update.sort(sort);
        }
        update
    }

    /// Apply `--per-page` over the configured store settings.
    pub fn store_config(&self, base: StoreConfig) -> StoreConfig {
        match self.per_page {
            Some(per_page) => base.with_items_per_page(per_page),
            None => base,
        }
    }
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Page to show (clamped to the available pages).
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: u64,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Also count the loaded products in each category.
    #[arg(long)]
    pub counts: bool,
}

/// Arguments for the interactive command.
#[derive(Args)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Search debounce window in milliseconds (default: from config).
    #[arg(long)]
    pub debounce_ms: Option<u64>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_commerce::search::FilterState;

    #[test]
    fn test_no_flags_is_empty_update() {
        assert!(FilterArgs::default().to_update().is_empty());
    }

    #[test]
    fn test_flags_become_update() {
        let args = FilterArgs {
            search: Some("shirt".into()),
            category: Some("mens-shirts".into()),
            sort: Some(SortOption::PriceDesc),
            per_page: None,
        };

        let mut filters = FilterState::default();
        filters.merge(args.to_update());
        assert_eq!(filters.search_term, "shirt");
        assert_eq!(filters.category, CategoryFilter::slug("mens-shirts"));
        assert_eq!(filters.sort_by, SortOption::PriceDesc);
    }

    #[test]
    fn test_category_all_flag() {
        let args = FilterArgs {
            category: Some("all".into()),
            ..Default::default()
        };
        let mut filters = FilterState::default().with_category("beauty");
        filters.merge(args.to_update());
        assert!(filters.category.is_all());
    }

    #[test]
    fn test_per_page_override() {
        let args = FilterArgs {
            per_page: Some(24),
            ..Default::default()
        };
        assert_eq!(args.store_config(StoreConfig::default()).items_per_page, 24);
        assert_eq!(
            FilterArgs::default().store_config(StoreConfig::default()).items_per_page,
            12
        );
    }
}
