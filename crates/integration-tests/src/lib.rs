//! Integration tests for the Neuronix admin panel.
//!
//! The tests drive a running server over HTTP, so they are `#[ignore]`d by
//! default and skipped in plain `cargo test` runs.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL and apply migrations
//! cargo run -p neuronix-cli -- migrate
//!
//! # Start the admin server
//! cargo run -p neuronix-admin
//!
//! # Run integration tests against it
//! cargo test -p neuronix-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_BASE_URL` - Server under test (default `http://localhost:3001`)
//! - `ADMIN_USERNAME` / `ADMIN_PASSWORD` - Credentials the server was
//!   started with; authenticated tests log in with these.
