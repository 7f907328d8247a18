//! Session gate extractors.
//!
//! Protected handlers take [`RequireAdminAuth`] as their first argument, so
//! the gate runs before any handler logic. One gate serves both surfaces:
//! a browser asking for a page is redirected to the login form, a caller
//! under `/api/` gets the JSON 401 envelope.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::error::ApiError;
use crate::models::CurrentAdmin;
use crate::models::session::keys;

/// Read the admin identity out of the request's session, if any.
///
/// Absent session layer, unreadable session state and a missing identity
/// all collapse to `None`; the gate does not distinguish between them.
async fn session_admin(parts: &Parts) -> Option<CurrentAdmin> {
    let session = parts.extensions.get::<Session>()?;
    session.get(keys::CURRENT_ADMIN).await.ok().flatten()
}

/// Extractor that admits only an authenticated operator.
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdminAuth(admin): RequireAdminAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.name)
/// }
/// ```
pub struct RequireAdminAuth(pub CurrentAdmin);

/// How an unauthenticated request gets turned away.
pub enum AdminAuthRejection {
    /// Send the browser to the login form (page requests).
    RedirectToLogin,
    /// Answer with the JSON 401 envelope (API requests).
    Unauthorized,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::Unauthorized => ApiError::Unauthorized.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdminAuth
where
    S: Send + Sync,
{
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match session_admin(parts).await {
            Some(admin) => Ok(Self(admin)),
            None if parts.uri.path().starts_with("/api/") => {
                Err(AdminAuthRejection::Unauthorized)
            }
            None => Err(AdminAuthRejection::RedirectToLogin),
        }
    }
}

/// Extractor that reports whether an operator is logged in without
/// gating the request. Used by pages that render either way.
pub struct OptionalAdminAuth(pub Option<CurrentAdmin>);

impl<S> FromRequestParts<S> for OptionalAdminAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(session_admin(parts).await))
    }
}

/// Store the admin identity in the session after a successful login.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CURRENT_ADMIN, admin).await
}

/// Remove the admin identity from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<CurrentAdmin>(keys::CURRENT_ADMIN).await?;
    Ok(())
}
