//! Store configuration.

use std::time::Duration;

use catalog_commerce::search::DEFAULT_ITEMS_PER_PAGE;

/// Products requested by the initial fetch.
pub const DEFAULT_FETCH_LIMIT: u32 = 100;

/// Quiet window for search input.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Tunables for [`CatalogStore`](crate::CatalogStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// How many products `initialize` asks for.
    pub fetch_limit: u32,
    /// Page size of the visible grid (at least 1).
    pub items_per_page: usize,
    /// Quiet window before search input is applied.
    pub search_debounce: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            fetch_limit: DEFAULT_FETCH_LIMIT,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

impl StoreConfig {
    /// Set the fetch limit.
    pub fn with_fetch_limit(mut self, limit: u32) -> Self {
        self.fetch_limit = limit;
        self
    }

    /// Set the page size. Zero is read as one.
    pub fn with_items_per_page(mut self, items: usize) -> Self {
        self.items_per_page = items.max(1);
        self
    }

    /// Set the search debounce window.
    pub fn with_search_debounce(mut self, window: Duration) -> Self {
        self.search_debounce = window;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.fetch_limit, 100);
        assert_eq!(config.items_per_page, 12);
        assert_eq!(config.search_debounce, Duration::from_millis(300));
    }

    #[test]
    fn test_items_per_page_floor() {
        assert_eq!(StoreConfig::default().with_items_per_page(0).items_per_page, 1);
    }
}
