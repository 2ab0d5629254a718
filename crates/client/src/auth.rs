//! Mock auth API client.
//!
//! The demo API issues an opaque token on login and accepts registrations,
//! but nothing ever verifies the token afterwards — holding one client-side
//! is the entire authorization model. See [`crate::session`] for how the
//! token is persisted.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, instrument};
use url::Url;

use crate::config::ClientConfig;

/// Errors that can occur during login or registration.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The auth endpoint rejected the credentials.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The registration endpoint answered with a non-success status.
    #[error("registration failed (HTTP {0})")]
    RegistrationFailed(reqwest::StatusCode),
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Client for the mock auth API.
#[derive(Debug, Clone)]
pub struct AuthClient {
    inner: Arc<AuthClientInner>,
}

#[derive(Debug)]
struct AuthClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl AuthClient {
    /// Create a new auth client.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(AuthClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_base_url.clone(),
            }),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.inner.base_url.clone();
        if let Ok(mut parts) = url.path_segments_mut() {
            parts.pop_if_empty();
            parts.extend(segments);
        }
        url
    }

    /// Log in with the demo API and return the issued token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on any non-success status,
    /// or a transport error if the request itself fails.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<String, AuthError> {
        let response = self
            .inner
            .client
            .post(self.endpoint(&["auth", "login"]))
            .json(&LoginRequest {
                username,
                password: password.expose_secret(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let body: LoginResponse = response.json().await?;
        Ok(body.token)
    }

    /// Register a new user with the demo API.
    ///
    /// The API reports success or failure by status only; no body contract
    /// exists beyond that.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::RegistrationFailed` on a non-success status, or
    /// a transport error if the request itself fails.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<(), AuthError> {
        let response = self
            .inner
            .client
            .post(self.endpoint(&["users"]))
            .json(&RegisterRequest {
                username,
                email,
                password: password.expose_secret(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Registration rejected");
            return Err(AuthError::RegistrationFailed(status));
        }

        Ok(())
    }
}
