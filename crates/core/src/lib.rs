//! Shopwindow Core - Shared types library.
//!
//! This crate provides common types used across all Shopwindow components:
//! - `client` - Catalog, auth, and cart/favorites client library
//! - `cli` - Command-line gallery front-end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product and session models, type-safe IDs, cart lines

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
