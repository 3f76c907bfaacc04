//! Product catalog module.
//!
//! Contains types for products, product pages, and categories.

mod category;
mod product;

pub use category::{format_category_name, Category};
pub use product::{star_rating, Product, ProductPage, MAX_RATING};
