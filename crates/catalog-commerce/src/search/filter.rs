//! Product filters.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A predicate over products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive substring match on title, description, brand or
    /// category. Holds the lower-cased term.
    Text(String),
    /// Exact, case-sensitive category slug match.
    Category(String),
}

impl Filter {
    /// Create a text filter; a blank term filters nothing and yields `None`.
    pub fn text(term: &str) -> Option<Self> {
        if term.trim().is_empty() {
            None
        } else {
            Some(Filter::Text(term.to_lowercase()))
        }
    }

    /// Create a category filter.
    pub fn category(slug: impl Into<String>) -> Self {
        Filter::Category(slug.into())
    }

    /// Check a product against this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(term) => matches_text(product, term),
            Filter::Category(slug) => product.category == *slug,
        }
    }
}

/// `term` must already be lower-cased.
fn matches_text(product: &Product, term: &str) -> bool {
    let fields = [
        Some(product.title.as_str()),
        Some(product.description.as_str()),
        product.brand.as_deref(),
        Some(product.category.as_str()),
    ];

    // Absent fields never match.
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(term))
}

/// Keep the products that pass every filter, preserving input order.
pub fn apply_filters<'a>(products: &'a [Product], filters: &[Filter]) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| filters.iter().all(|filter| filter.matches(product)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> Product {
        Product::new(1, "Blue Shirt", 25.0)
            .with_category("mens-shirts")
            .with_description("Cotton button-down")
    }

    #[test]
    fn test_text_filter_case_insensitive() {
        let filter = Filter::text("SHIRT").unwrap();
        assert!(filter.matches(&shirt()));
    }

    #[test]
    fn test_text_filter_matches_category() {
        let tee = Product::new(2, "Graphic Tee", 15.0).with_category("t-shirts");
        assert!(Filter::text("shirt").unwrap().matches(&tee));
    }

    #[test]
    fn test_text_filter_matches_brand_and_description() {
        let product = Product::new(3, "Mascara", 9.99)
            .with_brand("Essence")
            .with_description("Volumizing formula");
        assert!(Filter::text("essence").unwrap().matches(&product));
        assert!(Filter::text("volumizing").unwrap().matches(&product));
        assert!(!Filter::text("lipstick").unwrap().matches(&product));
    }

    #[test]
    fn test_text_filter_missing_brand_does_not_match() {
        let product = Product::new(4, "Apple", 1.99).with_category("groceries");
        assert!(product.brand.is_none());
        assert!(!Filter::text("essence").unwrap().matches(&product));
    }

    #[test]
    fn test_blank_text_filter() {
        assert!(Filter::text("").is_none());
        assert!(Filter::text("  \t").is_none());
    }

    #[test]
    fn test_category_filter_is_exact() {
        let filter = Filter::category("mens-shirts");
        assert!(filter.matches(&shirt()));
        assert!(!Filter::category("Mens-Shirts").matches(&shirt()));
        assert!(!Filter::category("shirts").matches(&shirt()));
    }

    #[test]
    fn test_apply_filters_preserves_order() {
        let products = vec![
            Product::new(1, "Red Shirt", 10.0).with_category("tops"),
            Product::new(2, "Lamp", 30.0).with_category("home"),
            Product::new(3, "Green Shirt", 12.0).with_category("tops"),
        ];
        let kept = apply_filters(&products, &[Filter::text("shirt").unwrap()]);
        let ids: Vec<u64> = kept.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_apply_no_filters_keeps_everything() {
        let products = vec![shirt(), Product::new(9, "Lamp", 30.0)];
        assert_eq!(apply_filters(&products, &[]).len(), 2);
    }
}
