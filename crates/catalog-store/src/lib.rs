//! Catalog state container.
//!
//! This crate connects the gateway to the pipeline:
//! - `CatalogStore` - Load lifecycle, filter and page intents, selection
//! - `CatalogView` - Read-only state published after every mutation
//! - `Debouncer` - Cancellable delayed delivery for search input

mod config;
mod debounce;
mod status;
mod store;
mod view;

pub use config::{StoreConfig, DEFAULT_FETCH_LIMIT, DEFAULT_SEARCH_DEBOUNCE};
pub use debounce::{Debouncer, TaskId};
pub use status::LoadStatus;
pub use store::CatalogStore;
pub use view::CatalogView;
