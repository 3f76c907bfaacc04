//! The gateway trait the store is written against.

use crate::GatewayError;
use async_trait::async_trait;
use catalog_commerce::catalog::{Category, Product, ProductPage};
use catalog_commerce::ProductId;

/// Read-only access to the remote catalog.
///
/// Only the listing and the category list are required; the store never
/// needs anything else to reach `Ready`. The remaining operations back the
/// detail view and the command-line tools, and default to
/// [`GatewayError::Unsupported`].
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// One page of the full listing.
    async fn fetch_products(&self, limit: u32, offset: u32) -> Result<ProductPage, GatewayError>;

    /// All categories, in server order.
    async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError>;

    /// A single product by id.
    async fn fetch_product(&self, _id: ProductId) -> Result<Product, GatewayError> {
        Err(GatewayError::Unsupported("fetch_product"))
    }

    /// One page of a single category, filtered server-side.
    async fn fetch_products_by_category(
        &self,
        _slug: &str,
        _limit: u32,
        _offset: u32,
    ) -> Result<ProductPage, GatewayError> {
        Err(GatewayError::Unsupported("fetch_products_by_category"))
    }

    /// Server-side full-text search.
    async fn search_products(
        &self,
        _query: &str,
        _limit: u32,
        _offset: u32,
    ) -> Result<ProductPage, GatewayError> {
        Err(GatewayError::Unsupported("search_products"))
    }
}
