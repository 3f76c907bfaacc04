//! Read-only view published to subscribers.

use catalog_commerce::catalog::{Category, Product};
use catalog_commerce::search::{CatalogSnapshot, FilterState, Pagination};
use serde::Serialize;

use crate::LoadStatus;

/// Everything a renderer needs, derived after each mutation.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    /// Visible page and its pagination counts.
    pub snapshot: CatalogSnapshot,
    /// Load lifecycle.
    pub status: LoadStatus,
    /// Shorthand for `status == Loading`.
    pub loading: bool,
    /// Message of the last failed fetch.
    pub error: Option<String>,
    /// Product open in the detail view.
    pub selected: Option<Product>,
    /// Active filters.
    pub filters: FilterState,
    /// Categories offered by the remote catalog.
    pub categories: Vec<Category>,
    /// Size of the unfiltered collection.
    pub total_products: usize,
}

impl CatalogView {
    /// Products on the visible page.
    pub fn products(&self) -> &[Product] {
        &self.snapshot.products
    }

    /// Pagination counts.
    pub fn pagination(&self) -> &Pagination {
        &self.snapshot.pagination
    }

    /// Display name of the active category, if one is selected.
    pub fn category_name(&self) -> Option<&str> {
        let slug = self.filters.category.as_str();
        if self.filters.category.is_all() {
            return None;
        }
        Some(
            self.categories
                .iter()
                .find(|category| category.slug == slug)
                .map(|category| category.name.as_str())
                .unwrap_or(slug),
        )
    }

    /// Settled with nothing to show.
    pub fn is_empty(&self) -> bool {
        self.status.is_settled() && self.snapshot.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_name_prefers_display_name() {
        let view = CatalogView {
            filters: FilterState::new().with_category("home-decoration"),
            categories: vec![Category::new("home-decoration", "Home Decor")],
            ..Default::default()
        };
        assert_eq!(view.category_name(), Some("Home Decor"));
    }

    #[test]
    fn test_category_name_falls_back_to_slug() {
        let view = CatalogView {
            filters: FilterState::new().with_category("laptops"),
            ..Default::default()
        };
        assert_eq!(view.category_name(), Some("laptops"));
        assert_eq!(CatalogView::default().category_name(), None);
    }

    #[test]
    fn test_idle_view_is_not_empty() {
        assert!(!CatalogView::default().is_empty());
        let settled = CatalogView {
            status: LoadStatus::Ready,
            ..Default::default()
        };
        assert!(settled.is_empty());
    }
}
