//! CLI command implementations.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod favorites;

use shopwindow_client::{AuthClient, CartManager, CatalogClient, ClientConfig, FileStorage};

use crate::error::CliError;

/// Shared handles for command implementations.
pub struct Context {
    pub catalog: CatalogClient,
    pub auth: AuthClient,
    pub manager: CartManager<FileStorage>,
}

impl Context {
    /// Load config, open local storage, and build the clients.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the storage file
    /// cannot be opened.
    pub fn init() -> Result<Self, CliError> {
        let config = ClientConfig::from_env()?;
        let storage = FileStorage::open(&config.data_file)?;
        let manager = CartManager::with_action_delay(storage, config.action_delay);

        Ok(Self {
            catalog: CatalogClient::new(&config),
            auth: AuthClient::new(&config),
            manager,
        })
    }
}
