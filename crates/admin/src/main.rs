//! Neuronix Admin - internal event publishing panel.
//!
//! This binary serves the admin panel on port 3001.
//!
//! # Security
//!
//! **This binary must ONLY run on VPN-protected infrastructure.**
//!
//! - Single shared credential pair, no self-service accounts
//! - Writes to the production `events` table read by the public site
//!
//! # Architecture
//!
//! - Axum web framework
//! - Askama templates for server-side rendering
//! - `PostgreSQL` for events and sessions

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use sentry::integrations::tracing as sentry_tracing;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod error;
mod middleware;
mod models;
mod routes;
mod services;
mod state;

use config::AdminConfig;
use middleware::create_session_layer;
use state::AppState;

#[tokio::main]
async fn main() {
    let config = AdminConfig::from_env().expect("Failed to load configuration");

    // Sentry first: its guard must outlive everything, and the tracing
    // subscriber wants the sentry layer available when it is built.
    let _sentry_guard = init_sentry(&config);
    init_tracing();

    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // NOTE: Migrations are NOT run automatically on startup.
    // Run them explicitly via: cargo run -p neuronix-cli -- migrate

    let session_layer = create_session_layer(&pool, &config);
    let addr = config.socket_addr();
    let state = AppState::new(config, pool);
    let app = build_app(state, session_layer);

    // NOTE: Binding to 127.0.0.1 by default - the VPN handles external access
    tracing::info!("admin listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &AdminConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            send_default_pii: true, // Internal panel; request context helps debugging
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` controls the filter; without it our crate logs at info and
/// tower-http at debug. On Fly.io the fmt layer emits JSON for the log
/// shipper, locally it stays human-readable. Warnings and errors also
/// become Sentry events, with lower levels kept as breadcrumbs.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "neuronix_admin=info,tower_http=debug".into());

    let on_fly = std::env::var("FLY_APP_NAME").is_ok();
    let json_fmt = on_fly.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_fmt = (!on_fly).then(tracing_subscriber::fmt::layer);

    let sentry_layer = sentry_tracing::layer().event_filter(|metadata| match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_fmt)
        .with(text_fmt)
        .with(sentry_layer)
        .init();
}

/// Assemble the full router: health probes, pages, APIs, then the session,
/// trace and Sentry layers wrapped around all of them.
fn build_app(
    state: AppState,
    session_layer: tower_sessions::SessionManagerLayer<
        tower_sessions_sqlx_store::PostgresStore,
    >,
) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                status = tracing::field::Empty,
                latency_ms = tracing::field::Empty,
            )
        })
        .on_response(
            |response: &axum::http::Response<_>, latency: std::time::Duration, span: &Span| {
                span.record("status", response.status().as_u16());
                #[allow(clippy::cast_possible_truncation)]
                span.record("latency_ms", latency.as_millis() as u64);
                DefaultOnResponse::default().on_response(response, latency, span);
            },
        );

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .layer(session_layer)
        .layer(trace_layer)
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Resolve when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let interrupt = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
