//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::middleware::OptionalAdminAuth;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub admin_name: Option<String>,
}

/// Display the landing page.
///
/// Links to the login form, or straight to the event form when a
/// session already exists.
pub async fn home(OptionalAdminAuth(admin): OptionalAdminAuth) -> impl IntoResponse {
    HomeTemplate {
        admin_name: admin.map(|a| a.name),
    }
}
