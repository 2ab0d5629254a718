//! Shopwindow client library.
//!
//! Everything the gallery front-end needs, minus the rendering: a read-only
//! catalog client, a mock auth client, local key-value storage standing in
//! for browser storage, and the cart/favorites manager that ties them
//! together.
//!
//! # Architecture
//!
//! ```text
//! view layer (cli)
//!     │ calls
//!     ▼
//! CartManager ──── write-through ───▶ Storage (token/user/favorites/cart)
//!     │ fetches via
//!     ▼
//! ProductSource (CatalogClient over HTTP, stubs in tests)
//! ```
//!
//! All cart and favorites mutations are gated on a stored [`Session`];
//! catalog reads are public. See [`commerce::CartManager`] for the core
//! contracts.
//!
//! [`Session`]: shopwindow_core::Session

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod browse;
pub mod catalog;
pub mod commerce;
pub mod config;
pub mod session;
pub mod storage;

pub use auth::AuthClient;
pub use catalog::{CatalogClient, ProductSource};
pub use commerce::CartManager;
pub use config::ClientConfig;
pub use storage::{FileStorage, MemoryStorage, Storage};
