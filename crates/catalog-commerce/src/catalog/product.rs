//! Product types.

use crate::ids::ProductId;
use crate::money;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Highest rating the catalog hands out.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog.
///
/// Products are immutable once loaded; the store replaces the whole
/// collection rather than patching individual records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Price in major currency units.
    pub price: f64,
    /// Discount in percent (0-100).
    #[serde(default)]
    pub discount_percentage: f64,
    /// Average rating (0.0-5.0).
    #[serde(default)]
    pub rating: f64,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
    /// Brand, absent for unbranded goods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Category slug (e.g., "beauty").
    #[serde(default)]
    pub category: String,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Gallery image URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Create a product with the required fields; everything else is empty.
    pub fn new(id: u64, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            description: String::new(),
            price,
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 0,
            brand: None,
            category: String::new(),
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    /// Set the category slug.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the discount percentage.
    pub fn with_discount(mut self, discount_percentage: f64) -> Self {
        self.discount_percentage = discount_percentage;
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the thumbnail URL.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    /// Set the gallery images.
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Check numeric fields against their documented ranges.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let invalid = |reason: String| CommerceError::InvalidProduct {
            id: self.id.get(),
            reason,
        };

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(invalid(format!("price {} is not a non-negative number", self.price)));
        }
        if !(0.0..=100.0).contains(&self.discount_percentage) {
            return Err(invalid(format!(
                "discountPercentage {} outside 0-100",
                self.discount_percentage
            )));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(invalid(format!("rating {} outside 0-5", self.rating)));
        }
        Ok(())
    }

    /// Price after discount, unrounded.
    pub fn discounted_price(&self) -> f64 {
        money::discounted_price(self.price, self.discount_percentage)
    }

    /// Whether a discount badge applies.
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0.0
    }

    /// Check if any units are in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// First gallery image, falling back to the thumbnail.
    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(&self.thumbnail)
    }

    /// Gallery images, or the thumbnail alone when the gallery is empty.
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.thumbnail.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    /// Rating rendered as five star glyphs.
    pub fn stars(&self) -> String {
        star_rating(self.rating)
    }
}

/// Render a rating as five glyphs: one filled star per whole point, hollow
/// stars for the remainder.
pub fn star_rating(rating: f64) -> String {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, MAX_RATING)
    } else {
        0.0
    };
    let full = rating.floor() as usize;
    let empty = MAX_RATING as usize - full;
    format!("{}{}", "\u{2605}".repeat(full), "\u{2606}".repeat(empty))
}

/// A page of products as returned by the remote list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductPage {
    /// Products on this page.
    pub products: Vec<Product>,
    /// Total number of products matching the request on the server.
    pub total: u64,
    /// Offset of the first product.
    #[serde(default)]
    pub skip: u64,
    /// Requested page size.
    #[serde(default)]
    pub limit: u64,
}

impl ProductPage {
    /// Validate every product on the page.
    pub fn validate(&self) -> Result<(), CommerceError> {
        self.products.iter().try_for_each(Product::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 1,
        "title": "Essence Mascara Lash Princess",
        "description": "Popular mascara",
        "category": "beauty",
        "price": 9.99,
        "discountPercentage": 7.17,
        "rating": 4.94,
        "stock": 5,
        "tags": ["beauty", "mascara"],
        "brand": "Essence",
        "sku": "RCH45Q1A",
        "thumbnail": "https://cdn.example.com/1/thumbnail.png",
        "images": ["https://cdn.example.com/1/1.png"]
    }"#;

    #[test]
    fn test_product_deserialize() {
        let product: Product = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.brand.as_deref(), Some("Essence"));
        assert_eq!(product.category, "beauty");
        assert_eq!(product.discount_percentage, 7.17);
        assert_eq!(product.images.len(), 1);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_product_missing_brand() {
        let product: Product =
            serde_json::from_str(r#"{"id": 2, "title": "Apple", "price": 1.99}"#).unwrap();
        assert!(product.brand.is_none());
        assert!(product.images.is_empty());
        assert_eq!(product.primary_image(), "");
    }

    #[test]
    fn test_product_missing_title_is_rejected() {
        let result: Result<Product, _> = serde_json::from_str(r#"{"id": 3, "price": 1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(Product::new(1, "A", -1.0).validate().is_err());
        assert!(Product::new(1, "A", f64::NAN).validate().is_err());
        assert!(Product::new(1, "A", 1.0).with_discount(120.0).validate().is_err());
        assert!(Product::new(1, "A", 1.0).with_rating(5.5).validate().is_err());
        assert!(Product::new(1, "A", 0.0).with_rating(5.0).validate().is_ok());
    }

    #[test]
    fn test_discounted_price() {
        let product = Product::new(1, "Lamp", 100.0).with_discount(25.0);
        assert_eq!(product.discounted_price(), 75.0);
        assert!(product.has_discount());

        let plain = Product::new(2, "Rug", 40.0);
        assert_eq!(plain.discounted_price(), plain.price);
        assert!(!plain.has_discount());
    }

    #[test]
    fn test_gallery_falls_back_to_thumbnail() {
        let product = Product::new(1, "Lamp", 10.0).with_thumbnail("thumb.png");
        assert_eq!(product.primary_image(), "thumb.png");
        assert_eq!(product.gallery(), vec!["thumb.png"]);

        let product = product.with_images(vec!["a.png".into(), "b.png".into()]);
        assert_eq!(product.primary_image(), "a.png");
        assert_eq!(product.gallery(), vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_star_rating() {
        assert_eq!(star_rating(4.94), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2606}");
        assert_eq!(star_rating(5.0), "\u{2605}".repeat(5));
        assert_eq!(star_rating(0.0), "\u{2606}".repeat(5));
        assert_eq!(star_rating(9.0), "\u{2605}".repeat(5));
        assert_eq!(star_rating(f64::NAN), "\u{2606}".repeat(5));
    }

    #[test]
    fn test_product_page() {
        let json = format!(r#"{{"products": [{}], "total": 194, "skip": 0, "limit": 1}}"#, SAMPLE);
        let page: ProductPage = serde_json::from_str(&json).unwrap();
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.total, 194);
        assert!(page.validate().is_ok());
    }
}
