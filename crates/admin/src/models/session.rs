//! Session-related types for admin authentication.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use neuronix_core::AdminRole;

/// Session-stored admin identity.
///
/// Minimal data stored in the session to identify the logged-in operator.
/// There is no user table behind this: the credential authenticator mints
/// the same fixed identity for every successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Stable identity string (not a database ID).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role/permission level.
    pub role: AdminRole,
}

/// Session keys for admin authentication data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
