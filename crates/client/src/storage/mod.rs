//! Local key-value storage.
//!
//! Client state lives in a small string key-value store, the shape of
//! per-origin browser storage. The [`Storage`] trait keeps the manager
//! testable without any real persistence: [`MemoryStorage`] for tests and
//! ephemeral runs, [`FileStorage`] for the CLI.
//!
//! Values are raw strings; consumers parse them and treat malformed data as
//! absent rather than propagating a failure.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Storage keys for persisted client state.
pub mod keys {
    /// Key for the opaque auth token.
    pub const TOKEN: &str = "token";

    /// Key for the stored user record (JSON `{"username": ...}`).
    pub const USER: &str = "user";

    /// Key for the favorite product ids (JSON array, unique).
    pub const FAVORITES: &str = "favorites";

    /// Key for the cart product ids (JSON array, repetition = quantity).
    pub const CART: &str = "cart";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the storage image failed.
    #[error("storage encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A key-value store for client state.
///
/// Modeled on the browser storage API: get returns the raw string or
/// nothing, set and remove are write-through.
pub trait Storage {
    /// Get the raw value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`, persisting immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to persist the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`, persisting immediately. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to persist the removal.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
