//! Operator credential authentication.
//!
//! The panel has exactly one operator, configured through the environment.
//! Authentication is an exact string match of both credential halves; a miss
//! is a negative result, not an error, so the caller decides how to respond.

use secrecy::ExposeSecret;

use neuronix_core::AdminRole;

use crate::config::AdminCredentials;
use crate::models::CurrentAdmin;

/// Stable identity string minted for the panel operator.
pub const ADMIN_IDENTITY_ID: &str = "admin-1";

/// Display name minted for the panel operator.
pub const ADMIN_DISPLAY_NAME: &str = "Neuronix Admin";

/// Service for verifying operator credentials.
///
/// Holds a reference to the configured credential pair; construct it
/// per-request from [`AppState`](crate::state::AppState).
pub struct CredentialAuthenticator<'a> {
    credentials: &'a AdminCredentials,
}

impl<'a> CredentialAuthenticator<'a> {
    /// Create a new authenticator over the configured credentials.
    #[must_use]
    pub const fn new(credentials: &'a AdminCredentials) -> Self {
        Self { credentials }
    }

    /// Verify a username/password pair.
    ///
    /// Returns the fixed admin identity when both values match exactly,
    /// `None` otherwise. Matching is byte-for-byte: no trimming, no case
    /// folding.
    #[must_use]
    pub fn authenticate(&self, username: &str, password: &str) -> Option<CurrentAdmin> {
        let username_matches = username == self.credentials.username.expose_secret();
        let password_matches = password == self.credentials.password.expose_secret();

        if username_matches && password_matches {
            Some(CurrentAdmin {
                id: ADMIN_IDENTITY_ID.to_string(),
                name: ADMIN_DISPLAY_NAME.to_string(),
                role: AdminRole::Admin,
            })
        } else {
            None
        }
    }
}
