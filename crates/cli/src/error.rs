//! CLI error type mapping library failures to user-facing messages.
//!
//! Three failure classes reach the user: network/HTTP problems become a
//! generic "try again" message, missing-session mutations become a login
//! hint (no network call was made), and config/storage problems surface
//! as-is. Malformed local state never gets here - the library reads it as
//! empty.

use thiserror::Error;

use shopwindow_client::auth::AuthError;
use shopwindow_client::catalog::CatalogError;
use shopwindow_client::commerce::CommerceError;
use shopwindow_client::config::ConfigError;
use shopwindow_client::storage::StorageError;

/// Top-level error for the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration failed to load.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Local storage failed.
    #[error("local storage error: {0}")]
    Storage(#[from] StorageError),

    /// The catalog could not be loaded.
    #[error("failed to load data from the store, please try again later")]
    Catalog(#[source] CatalogError),

    /// Login or registration failed.
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// A mutation was attempted without being logged in.
    #[error("login required - run `shopwindow login` first")]
    LoginRequired,

    /// A command argument was invalid.
    #[error("{0}")]
    InvalidArgument(String),
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<CommerceError> for CliError {
    fn from(err: CommerceError) -> Self {
        match err {
            CommerceError::LoginRequired => Self::LoginRequired,
            CommerceError::Storage(e) => Self::Storage(e),
            CommerceError::Catalog(e) => Self::Catalog(e),
        }
    }
}
