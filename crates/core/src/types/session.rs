//! Session types.
//!
//! A session is the client-held proof of a mock login: an opaque token from
//! the demo auth endpoint plus the username that requested it. Nothing ever
//! verifies the token again; its presence alone gates cart and favorites
//! mutations.

use serde::{Deserialize, Serialize};

/// An active login session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque token returned by the auth endpoint.
    pub token: String,
    /// Username the token was issued for.
    pub username: String,
}

/// The persisted user record (everything except the token).
///
/// Stored under its own key, separate from the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    /// Username entered at login.
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_user_json_shape() {
        let user = StoredUser {
            username: "mor_2314".to_string(),
        };
        let json = serde_json::to_string(&user).expect("serializes");
        assert_eq!(json, r#"{"username":"mor_2314"}"#);
    }
}
