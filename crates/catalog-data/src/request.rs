//! Catalog endpoints and URL construction.

use crate::GatewayError;
use catalog_commerce::ProductId;
use reqwest::Url;

/// A read-only resource on the catalog API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /products?limit=&skip=`
    Products { limit: u32, skip: u32 },
    /// `GET /products/{id}`
    Product(ProductId),
    /// `GET /products/category/{slug}?limit=&skip=`
    ProductsByCategory { slug: String, limit: u32, skip: u32 },
    /// `GET /products/search?q=&limit=&skip=`
    Search { query: String, limit: u32, skip: u32 },
    /// `GET /products/categories`
    Categories,
}

impl Endpoint {
    /// Path segments below the base URL.
    pub fn segments(&self) -> Vec<String> {
        let mut segments = vec!["products".to_string()];
        match self {
            Endpoint::Products { .. } => {}
            Endpoint::Product(id) => segments.push(id.to_string()),
            Endpoint::ProductsByCategory { slug, .. } => {
                segments.push("category".to_string());
                segments.push(slug.clone());
            }
            Endpoint::Search { .. } => segments.push("search".to_string()),
            Endpoint::Categories => segments.push("categories".to_string()),
        }
        segments
    }

    /// Query parameters, in the order they are sent.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::Products { limit, skip }
            | Endpoint::ProductsByCategory { limit, skip, .. } => {
                vec![("limit", limit.to_string()), ("skip", skip.to_string())]
            }
            Endpoint::Search { query, limit, skip } => vec![
                ("q", query.clone()),
                ("limit", limit.to_string()),
                ("skip", skip.to_string()),
            ],
            Endpoint::Product(_) | Endpoint::Categories => Vec::new(),
        }
    }

    /// Resolve against `base`, keeping any path prefix the base carries.
    pub fn url(&self, base: &Url) -> Result<Url, GatewayError> {
        let mut url = base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                GatewayError::InvalidRequest(format!("base URL cannot carry a path: {}", base))
            })?;
            path.pop_if_empty();
            for segment in self.segments() {
                path.push(&segment);
            }
        }

        let query = self.query();
        if query.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(query);
        }
        Ok(url)
    }
}

/// Parse and sanity-check a configured base URL.
pub fn parse_base_url(base: &str) -> Result<Url, GatewayError> {
    let url = Url::parse(base.trim())
        .map_err(|e| GatewayError::InvalidRequest(format!("invalid base URL {:?}: {}", base, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(GatewayError::InvalidRequest(format!(
            "unsupported scheme {:?} in base URL",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        parse_base_url("https://dummyjson.com").unwrap()
    }

    // === URL Tests ===

    #[test]
    fn test_products_url() {
        let url = Endpoint::Products { limit: 100, skip: 0 }.url(&base()).unwrap();
        assert_eq!(url.as_str(), "https://dummyjson.com/products?limit=100&skip=0");
    }

    #[test]
    fn test_categories_url() {
        let url = Endpoint::Categories.url(&base()).unwrap();
        assert_eq!(url.as_str(), "https://dummyjson.com/products/categories");
    }

    #[test]
    fn test_single_product_url() {
        let url = Endpoint::Product(ProductId::new(42)).url(&base()).unwrap();
        assert_eq!(url.as_str(), "https://dummyjson.com/products/42");
    }

    #[test]
    fn test_category_url_encodes_slug() {
        let endpoint = Endpoint::ProductsByCategory {
            slug: "home decoration/x".to_string(),
            limit: 10,
            skip: 20,
        };
        let url = endpoint.url(&base()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://dummyjson.com/products/category/home%20decoration%2Fx?limit=10&skip=20"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        let endpoint = Endpoint::Search {
            query: "red & blue".to_string(),
            limit: 5,
            skip: 0,
        };
        let url = endpoint.url(&base()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://dummyjson.com/products/search?q=red+%26+blue&limit=5&skip=0"
        );
    }

    #[test]
    fn test_base_url_with_prefix_and_trailing_slash() {
        let base = parse_base_url("http://127.0.0.1:8080/api/v1/").unwrap();
        let url = Endpoint::Categories.url(&base).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/v1/products/categories");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(GatewayError::InvalidRequest(_))
        ));
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(GatewayError::InvalidRequest(_))
        ));
    }
}
