//! Product gateway for the catalog viewer.
//!
//! The only crate in the workspace that performs network I/O. It turns the
//! remote catalog's REST endpoints into typed calls and classifies every
//! failure as a [`GatewayError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_data::{GatewayConfig, HttpGateway, ProductGateway};
//! use std::time::Duration;
//!
//! let gateway = HttpGateway::new(
//!     &GatewayConfig::new("https://dummyjson.com").with_timeout(Duration::from_secs(10)),
//! )?;
//!
//! let page = gateway.fetch_products(100, 0).await?;
//! let categories = gateway.fetch_categories().await?;
//! println!("{} of {} products, {} categories", page.products.len(), page.total, categories.len());
//! ```

mod client;
mod config;
mod error;
mod gateway;
mod request;
mod response;

pub use client::HttpGateway;
pub use config::{GatewayConfig, DEFAULT_BASE_URL};
pub use error::GatewayError;
pub use gateway::ProductGateway;
pub use request::{parse_base_url, Endpoint};
pub use response::Response;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{GatewayConfig, GatewayError, HttpGateway, ProductGateway};
}
