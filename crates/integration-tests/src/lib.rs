//! Integration tests for Shopwindow.
//!
//! Cross-module scenarios: the cart/favorites manager over real storage
//! backends, with product details served by an in-memory [`StubCatalog`]
//! instead of the network.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopwindow-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;

use shopwindow_client::catalog::{CatalogError, ProductSource};
use shopwindow_core::{Product, ProductId, Rating};

/// Product source backed by a fixed in-memory table.
///
/// Unknown ids fail the fetch, which lets tests exercise the manager's
/// all-or-nothing load behavior.
pub struct StubCatalog {
    products: HashMap<ProductId, Product>,
}

impl StubCatalog {
    /// Build a stub from `(id, price)` pairs; titles and categories are
    /// filled with fixed test values.
    #[must_use]
    pub fn with_prices(prices: &[(u64, &str)]) -> Self {
        let products = prices
            .iter()
            .map(|(id, price)| (ProductId::new(*id), test_product(*id, price)))
            .collect();
        Self { products }
    }
}

impl ProductSource for StubCatalog {
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.products
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}

/// A minimal product for test fixtures.
#[must_use]
pub fn test_product(id: u64, price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        price: price.parse().expect("valid decimal"),
        category: "test".to_string(),
        description: String::new(),
        image: String::new(),
        rating: Rating::default(),
    }
}
