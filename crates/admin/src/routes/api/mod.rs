//! API route handlers for admin.
//!
//! JSON endpoints mounted under `/api`. Session-gated endpoints answer
//! anonymous callers with a JSON 401 rather than a login redirect.

pub mod events;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router.
pub fn router() -> Router<AppState> {
    Router::new().merge(events::router())
}
