//! Core types for Shopwindow.
//!
//! This module provides the catalog wire models and the derived cart types.

pub mod cart;
pub mod id;
pub mod product;
pub mod session;

pub use cart::{CartLine, total_item_count, total_price};
pub use id::*;
pub use product::{Product, Rating};
pub use session::{Session, StoredUser};
