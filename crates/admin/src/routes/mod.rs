//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database ping)
//!
//! # Pages
//! GET  /                       - Landing page
//! GET  /login                  - Login form
//! GET  /create-event           - Event submission form (requires auth)
//! GET  /create-event/{*rest}   - Same gate, 404 once authenticated
//! GET  /event-submitted        - Post-submit confirmation
//!
//! # Auth API
//! POST /api/auth/login         - Credential login (form), sets session
//! POST /api/auth/logout        - Destroy session
//!
//! # Events API
//! POST /api/create-event       - Publish an event (JSON, requires auth)
//! ```
//!
//! Health endpoints are registered in `main` next to the rest of the
//! server wiring.

pub mod api;
pub mod auth;
pub mod events;
pub mod home;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the page routes router.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/login", get(auth::login_page))
        .route("/create-event", get(events::create_event_page))
        .route("/create-event/{*rest}", get(events::create_event_subpath))
        .route("/event-submitted", get(events::event_submitted_page))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Pages
        .merge(page_routes())
        // Auth API
        .merge(auth::router())
        // Events API
        .merge(api::router())
}
