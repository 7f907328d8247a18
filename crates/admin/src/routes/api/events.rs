//! Event submission API.
//!
//! `POST /api/create-event` is the panel's only write surface. The handler
//! re-checks the session, presence-validates the payload, inserts a single
//! row and echoes the stored record back to the caller.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use neuronix_core::LinkUrl;

use crate::db::events::EventRepository;
use crate::error::ApiError;
use crate::middleware::RequireAdminAuth;
use crate::models::event::{Event, NewEvent};
use crate::state::AppState;

/// Client-facing message for a rejected registration link.
const INVALID_REGISTRATION_LINK: &str =
    "Invalid registration link. Must start with http:// or https://";

/// Client-facing message for a rejected banner URL.
const INVALID_BANNER_URL: &str = "Invalid banner image URL. Must start with http:// or https://";

/// Build the events API router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/create-event", post(create_event))
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Raw event submission payload.
///
/// Every field is `Option` at the wire level so that absent keys and explicit
/// JSON nulls both deserialize instead of failing extraction; presence
/// validation then treats them like empty strings and answers with the
/// same 400 as a blank field.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub registration_link: Option<String>,
    pub banner_url: Option<String>,
    pub prize_money: Option<String>,
    pub event_dates: Option<String>,
}

/// Successful submission response. `data` is the stored row verbatim.
#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    pub success: bool,
    pub data: Event,
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle `POST /api/create-event`.
///
/// Anonymous callers get a JSON 401 from the extractor before validation
/// runs; unreadable bodies and validation failures are 400s. See
/// [`validate_submission`].
async fn create_event(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<Json<CreateEventResponse>, ApiError> {
    // A body that cannot be read as JSON presents no fields at all, so it
    // gets the same 400 envelope instead of axum's plain-text rejection.
    let Json(request) = payload.map_err(|rejection| {
        debug!(%rejection, "Rejected unreadable event submission");
        ApiError::MissingFields
    })?;

    let new_event = validate_submission(request)?;

    let event = EventRepository::new(state.pool())
        .create(&new_event)
        .await?;

    info!(admin = %admin.name, event_id = %event.id, "Event published");

    Ok(Json(CreateEventResponse {
        success: true,
        data: event,
    }))
}

// =============================================================================
// Validation
// =============================================================================

/// Check a raw submission and build the insertable payload.
///
/// Absent and null fields count as empty. Title, description, dates and both
/// links must be non-empty; the links must additionally pass the [`LinkUrl`]
/// prefix check. Values are stored exactly as submitted (no trimming), so a
/// whitespace-only required field is accepted and a padded link fails the
/// prefix check. `prize_money` normalizes to `None` only when empty.
fn validate_submission(request: CreateEventRequest) -> Result<NewEvent, ApiError> {
    let title = request.title.unwrap_or_default();
    let description = request.description.unwrap_or_default();
    let registration_link = request.registration_link.unwrap_or_default();
    let banner_url = request.banner_url.unwrap_or_default();
    let event_dates = request.event_dates.unwrap_or_default();

    if title.is_empty()
        || description.is_empty()
        || registration_link.is_empty()
        || banner_url.is_empty()
        || event_dates.is_empty()
    {
        return Err(ApiError::MissingFields);
    }

    let registration_link = LinkUrl::parse(&registration_link)
        .map_err(|_| ApiError::InvalidLink(INVALID_REGISTRATION_LINK.to_string()))?;
    let banner_url = LinkUrl::parse(&banner_url)
        .map_err(|_| ApiError::InvalidLink(INVALID_BANNER_URL.to_string()))?;

    // Empty prize money becomes NULL; anything else is kept verbatim.
    let prize_money = request.prize_money.filter(|value| !value.is_empty());

    Ok(NewEvent {
        title,
        description,
        registration_link,
        banner_url,
        prize_money,
        event_dates,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_request() -> CreateEventRequest {
        CreateEventRequest {
            title: Some("Neuronix Hacknight".to_string()),
            description: Some("An evening of model dissection.".to_string()),
            registration_link: Some("https://lu.ma/neuronix-hacknight".to_string()),
            banner_url: Some("https://cdn.example.com/banner.png".to_string()),
            prize_money: Some("50000".to_string()),
            event_dates: Some("2026-03-14 to 2026-03-15".to_string()),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        let new_event = validate_submission(valid_request()).unwrap();

        assert_eq!(new_event.title, "Neuronix Hacknight");
        assert_eq!(new_event.description, "An evening of model dissection.");
        assert_eq!(
            new_event.registration_link.as_str(),
            "https://lu.ma/neuronix-hacknight"
        );
        assert_eq!(
            new_event.banner_url.as_str(),
            "https://cdn.example.com/banner.png"
        );
        assert_eq!(new_event.prize_money.as_deref(), Some("50000"));
        assert_eq!(new_event.event_dates, "2026-03-14 to 2026-03-15");
    }

    #[test]
    fn test_values_are_stored_verbatim() {
        let request = CreateEventRequest {
            title: Some("  Neuronix Hacknight  ".to_string()),
            event_dates: Some("\t2026-03-14\n".to_string()),
            ..valid_request()
        };

        let new_event = validate_submission(request).unwrap();
        assert_eq!(new_event.title, "  Neuronix Hacknight  ");
        assert_eq!(new_event.event_dates, "\t2026-03-14\n");
    }

    #[test]
    fn test_whitespace_only_title_is_accepted() {
        // Presence means non-empty, not non-blank
        let request = CreateEventRequest {
            title: Some("   ".to_string()),
            ..valid_request()
        };

        let new_event = validate_submission(request).unwrap();
        assert_eq!(new_event.title, "   ");
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let request = CreateEventRequest {
            title: Some(String::new()),
            ..valid_request()
        };

        let err = validate_submission(request).unwrap_err();
        assert!(matches!(err, ApiError::MissingFields));
    }

    #[test]
    fn test_absent_fields_fail_presence_check() {
        // Missing keys deserialize to None
        let request: CreateEventRequest = serde_json::from_str("{}").unwrap();

        let err = validate_submission(request).unwrap_err();
        assert!(matches!(err, ApiError::MissingFields));
    }

    #[test]
    fn test_null_required_field_fails_presence_check() {
        let request: CreateEventRequest = serde_json::from_value(json!({
            "title": null,
            "description": "An evening of model dissection.",
            "registration_link": "https://lu.ma/neuronix-hacknight",
            "banner_url": "https://cdn.example.com/banner.png",
            "prize_money": "50000",
            "event_dates": "2026-03-14 to 2026-03-15",
        }))
        .unwrap();

        let err = validate_submission(request).unwrap_err();
        assert!(matches!(err, ApiError::MissingFields));
    }

    #[test]
    fn test_null_prize_money_deserializes_and_stores_null() {
        // An explicit null must reach the handler instead of failing extraction
        let request: CreateEventRequest = serde_json::from_value(json!({
            "title": "Neuronix Hacknight",
            "description": "An evening of model dissection.",
            "registration_link": "https://lu.ma/neuronix-hacknight",
            "banner_url": "https://cdn.example.com/banner.png",
            "prize_money": null,
            "event_dates": "2026-03-14 to 2026-03-15",
        }))
        .unwrap();

        let new_event = validate_submission(request).unwrap();
        assert!(new_event.prize_money.is_none());
    }

    #[test]
    fn test_bad_registration_link_is_rejected() {
        let request = CreateEventRequest {
            registration_link: Some("lu.ma/neuronix-hacknight".to_string()),
            ..valid_request()
        };

        let err = validate_submission(request).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid registration link. Must start with http:// or https://"
        );
    }

    #[test]
    fn test_bad_banner_url_is_rejected() {
        let request = CreateEventRequest {
            banner_url: Some("ftp://cdn.example.com/banner.png".to_string()),
            ..valid_request()
        };

        let err = validate_submission(request).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid banner image URL. Must start with http:// or https://"
        );
    }

    #[test]
    fn test_padded_link_is_rejected() {
        // No trimming happens, so the prefix check sees the leading space
        let request = CreateEventRequest {
            registration_link: Some(" https://lu.ma/neuronix-hacknight".to_string()),
            ..valid_request()
        };

        let err = validate_submission(request).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid registration link. Must start with http:// or https://"
        );
    }

    #[test]
    fn test_empty_prize_money_normalizes_to_none() {
        let request = CreateEventRequest {
            prize_money: Some(String::new()),
            ..valid_request()
        };

        let new_event = validate_submission(request).unwrap();
        assert!(new_event.prize_money.is_none());
    }

    #[test]
    fn test_absent_prize_money_stores_null() {
        let request = CreateEventRequest {
            prize_money: None,
            ..valid_request()
        };

        let new_event = validate_submission(request).unwrap();
        assert!(new_event.prize_money.is_none());
    }

    #[test]
    fn test_whitespace_prize_money_is_kept_verbatim() {
        let request = CreateEventRequest {
            prize_money: Some("  ".to_string()),
            ..valid_request()
        };

        let new_event = validate_submission(request).unwrap();
        assert_eq!(new_event.prize_money.as_deref(), Some("  "));
    }
}
