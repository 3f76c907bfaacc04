//! Snapshot and pagination.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Default page size of the product grid.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-indexed).
    pub current_page: usize,
    /// Items per page.
    pub items_per_page: usize,
    /// Number of items after filtering, before slicing.
    pub total_items: usize,
    /// Total number of pages, never less than 1.
    pub total_pages: usize,
}

impl Pagination {
    /// Create pagination info.
    ///
    /// `items_per_page` of zero is treated as one.
    pub fn new(current_page: usize, items_per_page: usize, total_items: usize) -> Self {
        let items_per_page = items_per_page.max(1);
        Self {
            current_page,
            items_per_page,
            total_items,
            total_pages: total_pages(total_items, items_per_page),
        }
    }

    /// Index of the first item on the current page.
    pub fn start_index(&self) -> usize {
        self.current_page.saturating_sub(1).saturating_mul(self.items_per_page)
    }

    /// One past the last item on the current page, capped at `total_items`.
    pub fn end_index(&self) -> usize {
        self.start_index()
            .saturating_add(self.items_per_page)
            .min(self.total_items)
    }

    /// Whether there's a next page.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Clamp a requested page into `[1, total_pages]`.
    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages)
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if max_visible == 0 {
            return Vec::new();
        }
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.current_page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// Get start item number (1-indexed), 0 when there is nothing to show.
    pub fn start_item(&self) -> usize {
        if self.start_index() >= self.total_items {
            0
        } else {
            self.start_index() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        if self.start_item() == 0 {
            0
        } else {
            self.end_index()
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_ITEMS_PER_PAGE, 0)
    }
}

/// `max(1, ceil(total_items / items_per_page))`.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1)).max(1)
}

/// The visible page of products plus its pagination counts.
///
/// Always derived from the full collection by the pipeline; never edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogSnapshot {
    /// Products on the current page, in sort order.
    pub products: Vec<Product>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl CatalogSnapshot {
    /// Create a snapshot.
    pub fn new(products: Vec<Product>, pagination: Pagination) -> Self {
        Self {
            products,
            pagination,
        }
    }

    /// Check if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.products.len()
    }
}
