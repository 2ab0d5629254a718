//! Session persistence.
//!
//! The token and user record live under separate storage keys. The token
//! alone is the authorization gate; the user record only carries the
//! username for display.
//!
//! These functions are fronted by [`crate::commerce::CartManager`] so that
//! every screen goes through one component instead of touching storage
//! directly.

use tracing::warn;

use shopwindow_core::{Session, StoredUser};

use crate::storage::{Storage, StorageError, keys};

/// Read the current session, if one exists.
///
/// A session exists iff the token key is present. A malformed user record
/// degrades to an empty username rather than invalidating the session.
pub fn current<S: Storage>(storage: &S) -> Option<Session> {
    let token = storage.get(keys::TOKEN)?;

    let username = storage
        .get(keys::USER)
        .and_then(|raw| {
            serde_json::from_str::<StoredUser>(&raw)
                .map_err(|e| {
                    warn!(error = %e, "Malformed stored user record, ignoring");
                })
                .ok()
        })
        .map_or_else(String::new, |user| user.username);

    Some(Session { token, username })
}

/// Persist a session after a successful login.
///
/// # Errors
///
/// Returns an error if either write fails to persist.
pub fn store<S: Storage>(
    storage: &mut S,
    token: &str,
    username: &str,
) -> Result<(), StorageError> {
    let user = StoredUser {
        username: username.to_string(),
    };
    storage.set(keys::TOKEN, token)?;
    storage.set(keys::USER, &serde_json::to_string(&user)?)?;
    Ok(())
}

/// Destroy the session and all per-user state.
///
/// Logout wipes everything: token, user record, favorites, and cart.
///
/// # Errors
///
/// Returns an error if any removal fails to persist.
pub fn clear_all<S: Storage>(storage: &mut S) -> Result<(), StorageError> {
    storage.remove(keys::TOKEN)?;
    storage.remove(keys::USER)?;
    storage.remove(keys::FAVORITES)?;
    storage.remove(keys::CART)?;
    Ok(())
}
