//! Catalog API client.
//!
//! Read-only access to the remote product catalog: product list, single
//! product by id, category list. Plain HTTP GET with JSON decoding: no
//! retry, no backoff, no partial results. Fetching several ids issues one
//! request per id concurrently and fails as a whole if any one fails.

use std::sync::Arc;

use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, instrument};
use url::Url;

use shopwindow_core::{Product, ProductId};

use crate::config::ClientConfig;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (connection, DNS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("failed to load catalog data (HTTP {0})")]
    Status(reqwest::StatusCode),

    /// JSON decoding failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Product not found.
    #[error("product not found: {0}")]
    NotFound(ProductId),
}

/// Anything the cart/favorites manager can fetch product details from.
///
/// [`CatalogClient`] is the real implementation; tests substitute an
/// in-memory stub so manager logic runs without a network.
pub trait ProductSource {
    /// Fetch a single product by id.
    fn product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Product, CatalogError>> + Send;
}

/// Client for the read-only catalog API.
///
/// Cheaply cloneable; the HTTP client and base URL live behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

#[derive(Debug)]
struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_base_url.clone(),
            }),
        }
    }

    /// Build an endpoint URL from path segments under the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.inner.base_url.clone();
        // The config layer rejects cannot-be-a-base URLs, so this always
        // has mutable path segments.
        if let Ok(mut parts) = url.path_segments_mut() {
            parts.pop_if_empty();
            parts.extend(segments);
        }
        url
    }

    /// GET a URL and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        debug!(url = %url, "Catalog GET");
        let response = self.inner.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!(url = %url, status = %status, "Catalog request failed");
            return Err(CatalogError::Status(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            error!(
                url = %url,
                error = %e,
                body = %body.chars().take(200).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON decoding fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json(self.endpoint(&["products"])).await
    }

    /// Fetch the category list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON decoding fails.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json(self.endpoint(&["products", "categories"])).await
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the catalog has no such product,
    /// or a generic load error for any other failure.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let url = self.endpoint(&["products", &id.to_string()]);
        match self.get_json(url).await {
            Err(CatalogError::Status(status)) if status == reqwest::StatusCode::NOT_FOUND => {
                Err(CatalogError::NotFound(id))
            }
            other => other,
        }
    }

    /// Fetch several products by id, one concurrent request per id.
    ///
    /// All-or-nothing: if any single fetch fails, the whole call fails and
    /// no partial list is returned.
    ///
    /// # Errors
    ///
    /// Returns the first error from any of the underlying fetches.
    #[instrument(skip(self), fields(count = ids.len()))]
    pub async fn get_products(&self, ids: &[ProductId]) -> Result<Vec<Product>, CatalogError> {
        try_join_all(ids.iter().map(|id| self.get_product(*id))).await
    }
}

impl ProductSource for CatalogClient {
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.get_product(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_base(base: &str) -> CatalogClient {
        let config = ClientConfig {
            api_base_url: Url::parse(base).expect("valid URL"),
            ..ClientConfig::default()
        };
        CatalogClient::new(&config)
    }

    #[test]
    fn test_endpoint_building() {
        let client = client_with_base("https://fakestoreapi.com");
        assert_eq!(
            client.endpoint(&["products"]).as_str(),
            "https://fakestoreapi.com/products"
        );
        assert_eq!(
            client.endpoint(&["products", "categories"]).as_str(),
            "https://fakestoreapi.com/products/categories"
        );
        assert_eq!(
            client.endpoint(&["products", "7"]).as_str(),
            "https://fakestoreapi.com/products/7"
        );
    }

    #[test]
    fn test_endpoint_preserves_base_path() {
        let client = client_with_base("http://localhost:8080/api/");
        assert_eq!(
            client.endpoint(&["products"]).as_str(),
            "http://localhost:8080/api/products"
        );
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::NotFound(ProductId::new(9));
        assert_eq!(err.to_string(), "product not found: 9");

        let err = CatalogError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "failed to load catalog data (HTTP 500 Internal Server Error)"
        );
    }
}
