//! Catalog product models.
//!
//! These mirror the JSON shape served by the remote catalog API. The catalog
//! owns this data; from the client's perspective every field is read-only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A product in the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-assigned product ID.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price. The API serves this as a JSON number; decimal arithmetic
    /// keeps cart totals exact.
    pub price: Decimal,
    /// Category name (e.g. "electronics").
    pub category: String,
    /// Long-form description.
    pub description: String,
    /// Product image URL.
    pub image: String,
    /// Aggregate customer rating.
    #[serde(default)]
    pub rating: Rating,
}

/// Aggregate rating for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Rating {
    /// Average rating, 0.0 to 5.0.
    pub rate: f64,
    /// Number of ratings the average is based on.
    pub count: u32,
}
