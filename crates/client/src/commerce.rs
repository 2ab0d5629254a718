//! Cart and favorites manager — the client's state core.
//!
//! Keeps the persisted product-id lists, the session gate, and derived
//! aggregates consistent with each other. The persisted cart is a flat id
//! sequence where repetition encodes quantity; favorites are a unique id
//! list. Both are written through to storage on every mutation.
//!
//! All mutations require a stored session and fail with
//! [`CommerceError::LoginRequired`] before touching storage otherwise.
//! Reads are public.
//!
//! An optional artificial delay paces mutations for UI feedback (~500ms).
//! It carries no functional meaning and defaults to zero.

use std::time::Duration;

use futures::future::try_join_all;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use shopwindow_core::{CartLine, Product, ProductId, Session};

use crate::catalog::{CatalogError, ProductSource};
use crate::session;
use crate::storage::{Storage, StorageError, keys};

/// Errors from cart/favorites operations.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// A mutation was attempted without an active session. Nothing was
    /// persisted and no network call was made.
    #[error("login required")]
    LoginRequired,

    /// The storage backend failed to persist a write.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Fetching product details failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Client-side cart/favorites state manager.
///
/// Owns the storage handle; every screen calls through here instead of
/// touching storage directly.
#[derive(Debug)]
pub struct CartManager<S: Storage> {
    storage: S,
    action_delay: Duration,
}

impl<S: Storage> CartManager<S> {
    /// Create a manager with no artificial pacing (the test configuration).
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_action_delay(storage, Duration::ZERO)
    }

    /// Create a manager that sleeps `action_delay` inside each mutation,
    /// pacing interactive front-ends' feedback.
    #[must_use]
    pub const fn with_action_delay(storage: S, action_delay: Duration) -> Self {
        Self {
            storage,
            action_delay,
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// The current session, if logged in.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        session::current(&self.storage)
    }

    /// Persist a session after a successful login.
    ///
    /// # Errors
    ///
    /// Returns an error if the writes fail to persist.
    pub fn store_session(&mut self, token: &str, username: &str) -> Result<(), CommerceError> {
        session::store(&mut self.storage, token, username)?;
        Ok(())
    }

    /// Log out: destroy the session and wipe favorites and cart.
    ///
    /// # Errors
    ///
    /// Returns an error if a removal fails to persist.
    pub fn logout(&mut self) -> Result<(), CommerceError> {
        session::clear_all(&mut self.storage)?;
        Ok(())
    }

    fn require_session(&self) -> Result<(), CommerceError> {
        if self.session().is_some() {
            Ok(())
        } else {
            Err(CommerceError::LoginRequired)
        }
    }

    async fn pace(&self) {
        if !self.action_delay.is_zero() {
            tokio::time::sleep(self.action_delay).await;
        }
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Favorite product ids, insertion order.
    #[must_use]
    pub fn favorites(&self) -> Vec<ProductId> {
        self.read_ids(keys::FAVORITES)
    }

    /// Whether `id` is currently a favorite.
    #[must_use]
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites().contains(&id)
    }

    /// Flip membership of `id` in the favorites and persist.
    ///
    /// Returns the new membership state: `true` if the product is now a
    /// favorite.
    ///
    /// # Errors
    ///
    /// Returns `LoginRequired` without a session, or a storage error if the
    /// write fails.
    pub async fn toggle_favorite(&mut self, id: ProductId) -> Result<bool, CommerceError> {
        self.require_session()?;
        self.pace().await;

        let mut favorites = self.favorites();
        let was_favorite = favorites.contains(&id);
        if was_favorite {
            favorites.retain(|fav| *fav != id);
        } else {
            favorites.push(id);
        }
        self.write_ids(keys::FAVORITES, &favorites)?;

        debug!(%id, now_favorite = !was_favorite, "Toggled favorite");
        Ok(!was_favorite)
    }

    /// Fetch full product details for every favorite, concurrently.
    ///
    /// All-or-nothing: one failed fetch fails the whole call.
    ///
    /// # Errors
    ///
    /// Returns a catalog error if any fetch fails.
    pub async fn load_favorite_details(
        &self,
        source: &impl ProductSource,
    ) -> Result<Vec<Product>, CommerceError> {
        let ids = self.favorites();
        let products = try_join_all(ids.iter().map(|id| source.product(*id))).await?;
        Ok(products)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// The raw persisted cart sequence (repetition = quantity).
    #[must_use]
    pub fn cart_ids(&self) -> Vec<ProductId> {
        self.read_ids(keys::CART)
    }

    /// Distinct cart ids with their quantities, in first-appearance order.
    #[must_use]
    pub fn quantities(&self) -> Vec<(ProductId, u32)> {
        let mut grouped: Vec<(ProductId, u32)> = Vec::new();
        for id in self.cart_ids() {
            match grouped.iter_mut().find(|(gid, _)| *gid == id) {
                Some((_, qty)) => *qty += 1,
                None => grouped.push((id, 1)),
            }
        }
        grouped
    }

    /// Sum of all quantities in the cart.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        u32::try_from(self.cart_ids().len()).unwrap_or(u32::MAX)
    }

    /// Append one unit of `id` to the cart and persist.
    ///
    /// # Errors
    ///
    /// Returns `LoginRequired` without a session, or a storage error if the
    /// write fails.
    pub async fn add_to_cart(&mut self, id: ProductId) -> Result<(), CommerceError> {
        self.require_session()?;
        self.pace().await;

        let mut cart = self.cart_ids();
        cart.push(id);
        self.write_ids(keys::CART, &cart)?;

        debug!(%id, "Added to cart");
        Ok(())
    }

    /// Set the quantity of `id` to exactly `quantity`.
    ///
    /// Zero removes the line entirely. The sequence is rebuilt with one
    /// contiguous block per distinct id, blocks in first-appearance order.
    /// Callers must not rely on any particular order across rewrites.
    ///
    /// # Errors
    ///
    /// Returns `LoginRequired` without a session, or a storage error if the
    /// write fails.
    pub async fn set_quantity(
        &mut self,
        id: ProductId,
        quantity: u32,
    ) -> Result<(), CommerceError> {
        if quantity == 0 {
            return self.remove_from_cart(id).await;
        }

        self.require_session()?;
        self.pace().await;

        let mut grouped = self.quantities();
        match grouped.iter_mut().find(|(gid, _)| *gid == id) {
            Some((_, qty)) => *qty = quantity,
            None => grouped.push((id, quantity)),
        }

        let rebuilt: Vec<ProductId> = grouped
            .iter()
            .flat_map(|(gid, qty)| std::iter::repeat_n(*gid, *qty as usize))
            .collect();
        self.write_ids(keys::CART, &rebuilt)?;

        debug!(%id, quantity, "Set cart quantity");
        Ok(())
    }

    /// Delete all occurrences of `id` from the cart and persist.
    ///
    /// # Errors
    ///
    /// Returns `LoginRequired` without a session, or a storage error if the
    /// write fails.
    pub async fn remove_from_cart(&mut self, id: ProductId) -> Result<(), CommerceError> {
        self.require_session()?;
        self.pace().await;

        let mut cart = self.cart_ids();
        cart.retain(|cid| *cid != id);
        self.write_ids(keys::CART, &cart)?;

        debug!(%id, "Removed from cart");
        Ok(())
    }

    /// Fetch product details for the cart and zip quantities back in.
    ///
    /// One concurrent request per distinct id; all-or-nothing on failure.
    /// Lines come back in first-appearance order of the persisted sequence.
    ///
    /// # Errors
    ///
    /// Returns a catalog error if any fetch fails.
    pub async fn load_cart_details(
        &self,
        source: &impl ProductSource,
    ) -> Result<Vec<CartLine>, CommerceError> {
        let grouped = self.quantities();
        let products = try_join_all(grouped.iter().map(|(id, _)| source.product(*id))).await?;

        let lines = products
            .into_iter()
            .zip(grouped)
            .map(|(product, (_, quantity))| CartLine { product, quantity })
            .collect();
        Ok(lines)
    }

    /// Total cart price: Σ(price × quantity) over distinct ids, rounded to
    /// 2 decimal places. Fetches details through `source`.
    ///
    /// # Errors
    ///
    /// Returns a catalog error if any fetch fails.
    pub async fn total_price(
        &self,
        source: &impl ProductSource,
    ) -> Result<Decimal, CommerceError> {
        let lines = self.load_cart_details(source).await?;
        Ok(shopwindow_core::total_price(&lines))
    }

    // =========================================================================
    // Persisted id lists
    // =========================================================================

    /// Read an id list from storage. Absent or malformed values read as
    /// empty — stored state is never worth a crash.
    fn read_ids(&self, key: &str) -> Vec<ProductId> {
        let Some(raw) = self.storage.get(key) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(key, error = %e, "Malformed stored id list, treating as empty");
            Vec::new()
        })
    }

    fn write_ids(&mut self, key: &str, ids: &[ProductId]) -> Result<(), CommerceError> {
        let raw = serde_json::to_string(ids).map_err(StorageError::Encode)?;
        self.storage.set(key, &raw)?;
        Ok(())
    }
}
