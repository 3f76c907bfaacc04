//! HTTP response handling.

use crate::GatewayError;
use catalog_commerce::catalog::{Category, Product, ProductPage};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The URL that produced this response.
    pub url: String,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            url: url.into(),
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, GatewayError> {
        serde_json::from_slice(&self.body).map_err(|e| GatewayError::Parse(e.to_string()))
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, GatewayError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(GatewayError::Http {
                status: self.status,
                url: self.url,
            })
        }
    }

    /// Decode a product listing and check every product in it.
    pub fn product_page(&self) -> Result<ProductPage, GatewayError> {
        let page: ProductPage = self.json()?;
        page.validate()?;
        Ok(page)
    }

    /// Decode a single product.
    pub fn product(&self) -> Result<Product, GatewayError> {
        let product: Product = self.json()?;
        product.validate()?;
        Ok(product)
    }

    /// Decode the category list.
    ///
    /// Accepts a bare array, or an object wrapping it under `categories`.
    pub fn categories(&self) -> Result<Vec<Category>, GatewayError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum CategoryList {
            Bare(Vec<Category>),
            Wrapped { categories: Vec<Category> },
        }

        Ok(match self.json::<CategoryList>()? {
            CategoryList::Bare(list) | CategoryList::Wrapped { categories: list } => list,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, "https://dummyjson.com/products", body.to_vec())
    }

    // === Status Check Tests ===

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(299, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(300, b"").is_success());
    }

    #[test]
    fn test_error_for_status() {
        let err = make_response(503, b"Service Unavailable")
            .error_for_status()
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::Http {
                status: 503,
                url: "https://dummyjson.com/products".to_string(),
            }
        );
        assert!(make_response(200, b"{}").error_for_status().is_ok());
    }

    // === Decoding Tests ===

    #[test]
    fn test_product_page_decodes() {
        let body = br#"{
            "products": [
                {"id": 1, "title": "Essence Mascara Lash Princess", "price": 9.99,
                 "discountPercentage": 7.17, "rating": 4.94, "stock": 5,
                 "brand": "Essence", "category": "beauty",
                 "thumbnail": "https://cdn.example/1.png", "images": []},
                {"id": 2, "title": "Apple", "price": 1.99, "category": "groceries"}
            ],
            "total": 194, "skip": 0, "limit": 2
        }"#;
        let page = make_response(200, body).product_page().unwrap();
        assert_eq!(page.products.len(), 2);
        assert_eq!(page.total, 194);
        assert_eq!(page.products[0].brand.as_deref(), Some("Essence"));
        assert!(page.products[1].brand.is_none());
    }

    #[test]
    fn test_product_page_missing_total_is_parse_error() {
        let body = br#"{"products": []}"#;
        let err = make_response(200, body).product_page().unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[test]
    fn test_product_page_rejects_invalid_product() {
        let body = br#"{
            "products": [{"id": 1, "title": "Broken", "price": 5.0, "rating": 9.0}],
            "total": 1
        }"#;
        let err = make_response(200, body).product_page().unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[test]
    fn test_product_page_not_json() {
        let err = make_response(200, b"<html>").product_page().unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[test]
    fn test_categories_both_shapes() {
        let slugs = make_response(200, br#"["beauty", "home-decoration"]"#)
            .categories()
            .unwrap();
        assert_eq!(slugs.len(), 2);
        assert_eq!(slugs[1].slug, "home-decoration");
        assert_eq!(slugs[1].name, "Home Decoration");

        let detailed = make_response(
            200,
            br#"[{"slug": "beauty", "name": "Beauty", "url": "https://dummyjson.com/products/category/beauty"}]"#,
        )
        .categories()
        .unwrap();
        assert_eq!(detailed[0].slug, "beauty");
        assert_eq!(detailed[0].name, "Beauty");

        let wrapped = make_response(200, br#"{"categories": ["laptops"]}"#)
            .categories()
            .unwrap();
        assert_eq!(wrapped[0].slug, "laptops");
    }

    #[test]
    fn test_single_product() {
        let product = make_response(200, br#"{"id": 7, "title": "Lamp", "price": 40.0}"#)
            .product()
            .unwrap();
        assert_eq!(product.id.get(), 7);
    }
}
