//! Session layer configuration.
//!
//! Sessions live server-side in `PostgreSQL`; the cookie carries only an
//! opaque ID. The backing `session` table is created by migration, not by
//! the store itself.

use sqlx::PgPool;
use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::AdminConfig;

/// Session cookie name for the admin panel.
pub const SESSION_COOKIE_NAME: &str = "neuronix_admin_session";

/// Sessions expire after a day without activity.
const SESSION_INACTIVITY_EXPIRY: Duration = Duration::hours(24);

/// Build the session layer over a `PostgreSQL` store.
///
/// The cookie is HttpOnly and SameSite=Strict; nothing legitimate navigates
/// into an internal panel cross-site. Secure is set whenever the configured
/// base URL is https.
///
/// # Panics
///
/// Panics if the store rejects the schema or table name, which cannot
/// happen for the fixed `public`.`session` values.
#[must_use]
pub fn create_session_layer(
    pool: &PgPool,
    config: &AdminConfig,
) -> SessionManagerLayer<PostgresStore> {
    let store = PostgresStore::new(pool.clone())
        .with_schema_name("public")
        .expect("valid schema name")
        .with_table_name("session")
        .expect("valid table name");

    let https = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(SESSION_INACTIVITY_EXPIRY))
        .with_secure(https)
        .with_same_site(SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
