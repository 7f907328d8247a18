//! Event repository for database operations.
//!
//! Events are append-only: the panel inserts finished records and never
//! updates or deletes them. Queries use runtime binds so the crate builds
//! without a live database.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};

use neuronix_core::{EventId, LinkUrl};

use super::RepositoryError;
use crate::models::event::{Event, NewEvent};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `PostgreSQL` event queries.
#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: i32,
    title: String,
    description: String,
    registration_link: String,
    banner_url: String,
    prize_money: Option<String>,
    event_dates: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = RepositoryError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let registration_link = LinkUrl::parse(&row.registration_link).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid registration link in database: {e}"))
        })?;
        let banner_url = LinkUrl::parse(&row.banner_url).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid banner url in database: {e}"))
        })?;

        Ok(Self {
            id: EventId::new(row.id),
            title: row.title,
            description: row.description,
            registration_link,
            banner_url,
            prize_money: row.prize_money,
            event_dates: row.event_dates,
            created_at: row.created_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for event database operations.
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    /// Create a new event repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new event and return the stored record.
    ///
    /// A single statement inserts and reads back the row, so the caller sees
    /// exactly what was persisted, including the assigned id and timestamp.
    /// There is no uniqueness constraint on events: submitting the same
    /// payload twice stores two rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    /// Returns `RepositoryError::DataCorruption` if the returned row is invalid.
    #[instrument(skip(self, event), fields(title = %event.title))]
    pub async fn create(&self, event: &NewEvent) -> Result<Event, RepositoryError> {
        let row = sqlx::query_as::<_, EventRow>(
            r"
            INSERT INTO events
                (title, description, registration_link, banner_url, prize_money, event_dates)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, registration_link, banner_url,
                      prize_money, event_dates, created_at
            ",
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.registration_link.as_str())
        .bind(event.banner_url.as_str())
        .bind(&event.prize_money)
        .bind(&event.event_dates)
        .fetch_one(self.pool)
        .await?;

        let stored: Event = row.try_into()?;

        debug!(id = %stored.id, "Inserted event");
        Ok(stored)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_row() -> EventRow {
        EventRow {
            id: 7,
            title: "Neuronix Hacknight".to_string(),
            description: "An evening of model dissection.".to_string(),
            registration_link: "https://lu.ma/neuronix-hacknight".to_string(),
            banner_url: "https://cdn.example.com/banner.png".to_string(),
            prize_money: Some("50000".to_string()),
            event_dates: "2026-03-14 to 2026-03-15".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_converts_to_event() {
        let row = sample_row();
        let event = Event::try_from(row).unwrap();

        assert_eq!(event.id, EventId::new(7));
        assert_eq!(event.title, "Neuronix Hacknight");
        assert_eq!(
            event.registration_link.as_str(),
            "https://lu.ma/neuronix-hacknight"
        );
        assert_eq!(event.prize_money.as_deref(), Some("50000"));
    }

    #[test]
    fn test_row_without_prize_money() {
        let row = EventRow {
            prize_money: None,
            ..sample_row()
        };
        let event = Event::try_from(row).unwrap();
        assert!(event.prize_money.is_none());
    }

    #[test]
    fn test_corrupt_registration_link_is_rejected() {
        let row = EventRow {
            registration_link: "not-a-link".to_string(),
            ..sample_row()
        };
        let err = Event::try_from(row).unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }

    #[test]
    fn test_corrupt_banner_url_is_rejected() {
        let row = EventRow {
            banner_url: String::new(),
            ..sample_row()
        };
        let err = Event::try_from(row).unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }
}
