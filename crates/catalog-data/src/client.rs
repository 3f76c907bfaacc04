//! HTTP implementation of [`ProductGateway`].

use std::time::Instant;

use async_trait::async_trait;
use catalog_commerce::catalog::{Category, Product, ProductPage};
use catalog_commerce::ProductId;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::request::{parse_base_url, Endpoint};
use crate::{GatewayConfig, GatewayError, ProductGateway, Response};

/// Gateway backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// Build a gateway from config.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a GET and buffer the body.
    ///
    /// Non-2xx statuses come back as [`GatewayError::Http`].
    async fn get(&self, endpoint: Endpoint) -> Result<Response, GatewayError> {
        let url = endpoint.url(&self.base_url)?;
        let started = Instant::now();
        debug!(url = %url, "catalog request");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "catalog request failed");
            GatewayError::from(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(
            url = %url,
            status,
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "catalog response"
        );

        Response::new(status, url.as_str(), body)
            .error_for_status()
            .inspect_err(|e| warn!(error = %e, "catalog request rejected"))
    }
}

#[async_trait]
impl ProductGateway for HttpGateway {
    async fn fetch_products(&self, limit: u32, offset: u32) -> Result<ProductPage, GatewayError> {
        self.get(Endpoint::Products {
            limit,
            skip: offset,
        })
        .await?
        .product_page()
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.get(Endpoint::Categories).await?.categories()
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, GatewayError> {
        self.get(Endpoint::Product(id)).await?.product()
    }

    async fn fetch_products_by_category(
        &self,
        slug: &str,
        limit: u32,
        offset: u32,
    ) -> Result<ProductPage, GatewayError> {
        self.get(Endpoint::ProductsByCategory {
            slug: slug.to_string(),
            limit,
            skip: offset,
        })
        .await?
        .product_page()
    }

    async fn search_products(
        &self,
        query: &str,
        limit: u32,
        offset: u32,
    ) -> Result<ProductPage, GatewayError> {
        self.get(Endpoint::Search {
            query: query.to_string(),
            limit,
            skip: offset,
        })
        .await?
        .product_page()
    }
}
