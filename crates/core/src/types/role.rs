//! Admin roles carried in session state.

use serde::{Deserialize, Serialize};

/// Role attached to an authenticated admin session.
///
/// The panel has a single operator credential today, but the role is stored
/// explicitly in the session payload rather than implied by its presence, so
/// existing sessions stay interpretable if further roles are ever added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Full access to event publishing.
    #[default]
    Admin,
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid admin role: {s}")),
        }
    }
}
