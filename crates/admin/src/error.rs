//! Unified error handling for the admin panel.
//!
//! Every API failure funnels through [`ApiError`], which owns the wire
//! contract: a JSON body of the form `{"error": "<message>"}` with the
//! matching status code. Database failures are captured to Sentry and
//! logged with their cause, while the client only ever sees "Server error".

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::CurrentAdmin;

/// API error type for the admin panel.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request has no authenticated admin session.
    #[error("Unauthorized")]
    Unauthorized,

    /// One or more required submission fields are blank or absent.
    #[error("Missing required fields")]
    MissingFields,

    /// A link field failed validation. Carries the client-facing message.
    #[error("{0}")]
    InvalidLink(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MissingFields | Self::InvalidLink(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message exposed to clients. Internal error details stay server-side.
    fn client_message(&self) -> String {
        match self {
            Self::Database(_) => "Server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Database(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Admin request error"
            );
        }

        let body = json!({ "error": self.client_message() });
        (self.status(), Json(body)).into_response()
    }
}

/// Set the Sentry user context after a successful login.
pub fn set_sentry_user(admin: &CurrentAdmin) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(admin.id.clone()),
            username: Some(admin.name.clone()),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}
