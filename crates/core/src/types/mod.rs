//! Core types for Neuronix.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod link;
pub mod role;

pub use id::*;
pub use link::{LinkUrl, LinkUrlError};
pub use role::AdminRole;
