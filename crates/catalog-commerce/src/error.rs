//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when validating or parsing catalog values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product failed shape validation.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: u64, reason: String },

    /// Sort option string is not one of the four known orders.
    #[error("Unknown sort option: {0} (expected title-asc, title-desc, price-asc or price-desc)")]
    UnknownSortOption(String),
}
