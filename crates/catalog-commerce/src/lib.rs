//! Catalog domain types and logic for the storefront catalog viewer.
//!
//! This crate provides the pure, I/O-free half of the catalog:
//!
//! - **Catalog**: Products, product pages, categories
//! - **Money**: Discounted prices and price display
//! - **Search**: Filter state, sort options, pagination, and the
//!   filter → sort → paginate pipeline
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_commerce::prelude::*;
//!
//! let filters = FilterState::default()
//!     .with_category(CategoryFilter::slug("beauty"))
//!     .with_sort(SortOption::PriceAsc);
//!
//! let snapshot = pipeline::apply(&products, &filters, PageRequest::new(1, 12));
//! println!(
//!     "page {} of {} ({} items)",
//!     snapshot.pagination.current_page,
//!     snapshot.pagination.total_pages,
//!     snapshot.pagination.total_items,
//! );
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{discounted_price, format_price};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{discounted_price, format_price};

    // Catalog
    pub use crate::catalog::{format_category_name, star_rating, Category, Product, ProductPage};

    // Search
    pub use crate::search::pipeline::{self, PageRequest};
    pub use crate::search::{
        CatalogSnapshot, CategoryFilter, FilterState, FilterUpdate, Pagination, SortOption,
    };
}
