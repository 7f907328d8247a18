//! Event page route handlers.
//!
//! The submission form itself posts JSON to the events API; these handlers
//! only render the pages around it.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::StatusCode, response::IntoResponse};

use crate::middleware::RequireAdminAuth;

/// Event submission form template.
#[derive(Template, WebTemplate)]
#[template(path = "events/create.html")]
pub struct CreateEventTemplate {
    pub admin_name: String,
}

/// Post-submit confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "events/submitted.html")]
pub struct EventSubmittedTemplate;

/// Display the event submission form.
///
/// The `RequireAdminAuth` extractor sends anonymous browsers to the login
/// page before this body runs.
pub async fn create_event_page(RequireAdminAuth(admin): RequireAdminAuth) -> impl IntoResponse {
    CreateEventTemplate {
        admin_name: admin.name,
    }
}

/// Display the post-submit confirmation page.
pub async fn event_submitted_page() -> impl IntoResponse {
    EventSubmittedTemplate
}

/// Catch-all for paths below the event form.
///
/// Nothing is served under `/create-event/`, but the auth gate still covers
/// the whole subtree: anonymous browsers are redirected to the login page
/// and only authenticated operators see the 404.
pub async fn create_event_subpath(RequireAdminAuth(_admin): RequireAdminAuth) -> StatusCode {
    StatusCode::NOT_FOUND
}
