//! Authentication route handlers.
//!
//! Single-credential login against the configured operator credentials.
//! Failure redirects back to the login form with a query-param error code;
//! success establishes a session and lands on the event form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::post,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::middleware::{OptionalAdminAuth, clear_current_admin, set_current_admin};
use crate::services::CredentialAuthenticator;
use crate::state::AppState;

/// Build the auth API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
}

// =============================================================================
// Form / Query Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login page.
///
/// An already-authenticated operator is sent straight to the event form.
pub async fn login_page(
    OptionalAdminAuth(admin): OptionalAdminAuth,
    Query(query): Query<MessageQuery>,
) -> Response {
    if admin.is_some() {
        return Redirect::to("/create-event").into_response();
    }

    LoginTemplate { error: query.error }.into_response()
}

/// Handle login form submission.
///
/// Verifies the credential pair and stores the minted identity in the
/// session. The failure redirect carries only an error code, never which
/// half of the pair was wrong.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let authenticator = CredentialAuthenticator::new(state.config().credentials());

    let Some(admin) = authenticator.authenticate(&form.username, &form.password) else {
        tracing::warn!("Rejected login attempt");
        return Redirect::to("/login?error=credentials").into_response();
    };

    if let Err(e) = set_current_admin(&session, &admin).await {
        tracing::error!("Could not write identity to session: {e}");
        return Redirect::to("/login?error=session").into_response();
    }

    set_sentry_user(&admin);
    tracing::info!(admin = %admin.name, "Admin logged in");

    Redirect::to("/create-event").into_response()
}

/// Handle logout.
///
/// Clears the admin identity and destroys the whole session.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_admin(&session).await {
        tracing::error!("Could not clear identity from session: {e}");
    }

    // Drop the whole session record, not just our key
    if let Err(e) = session.flush().await {
        tracing::error!("Could not flush session: {e}");
    }

    clear_sentry_user();

    Redirect::to("/login").into_response()
}
