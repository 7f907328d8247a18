//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! nx-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)
//!
//! # Migration Files
//!
//! Admin migrations: `crates/admin/migrations/`

use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur while running migrations.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run admin panel database migrations.
///
/// Applies everything under `crates/admin/migrations/`: the `events` table
/// and the session store backing table.
///
/// # Errors
///
/// Returns [`MigrationError`] if no database URL is configured, the
/// connection fails, or a migration fails to apply.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    // Same lookup order as the admin binary
    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| MigrationError::MissingEnvVar("ADMIN_DATABASE_URL"))?;

    tracing::info!("Connecting to admin database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Running admin migrations...");
    sqlx::migrate!("../admin/migrations").run(&pool).await?;

    tracing::info!("Admin migrations complete!");
    Ok(())
}
