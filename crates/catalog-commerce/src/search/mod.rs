//! Search module.
//!
//! Contains filter state, sort options, pagination, and the pure pipeline
//! that turns the full collection into the visible page.

mod filter;
pub mod pipeline;
mod query;
mod results;

pub use filter::{apply_filters, Filter};
pub use pipeline::{apply, sort_products, PageRequest, TitleCollator};
pub use query::{CategoryFilter, FilterState, FilterUpdate, SortOption, ALL_CATEGORIES};
pub use results::{total_pages, CatalogSnapshot, Pagination, DEFAULT_ITEMS_PER_PAGE};
