//! Event domain types.
//!
//! An event is published once and never edited: the panel offers no update
//! or delete surface, so there are only two shapes here, the validated
//! payload going in and the stored record coming back.

use chrono::{DateTime, Utc};
use serde::Serialize;

use neuronix_core::{EventId, LinkUrl};

/// A published event (domain type).
///
/// Serialized verbatim as the `data` field of a successful publish response,
/// so the caller sees the exact stored row including the assigned id.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    /// Storage-assigned event ID.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Full event description.
    pub description: String,
    /// Where attendees register.
    pub registration_link: LinkUrl,
    /// Banner image shown on the public site.
    pub banner_url: LinkUrl,
    /// Prize money, free-form text. `None` when the event has none.
    pub prize_money: Option<String>,
    /// Date or date range, free-form text (e.g. "2026-03-14 to 2026-03-15").
    pub event_dates: String,
    /// When the record was stored.
    pub created_at: DateTime<Utc>,
}

/// A validated event submission, ready to insert.
///
/// Construction goes through the submission validation in the API route;
/// the link fields are already parsed and `prize_money` is already
/// normalized (empty input becomes `None`).
#[derive(Debug, Clone)]
pub struct NewEvent {
    /// Event title.
    pub title: String,
    /// Full event description.
    pub description: String,
    /// Where attendees register.
    pub registration_link: LinkUrl,
    /// Banner image shown on the public site.
    pub banner_url: LinkUrl,
    /// Prize money, if any.
    pub prize_money: Option<String>,
    /// Date or date range, free-form text.
    pub event_dates: String,
}
