//! Business logic services for the admin panel.
//!
//! # Services
//!
//! - `auth` - Operator credential authentication

pub mod auth;

pub use auth::CredentialAuthenticator;
