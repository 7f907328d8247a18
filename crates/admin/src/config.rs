//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `ADMIN_BASE_URL` - Public URL for the admin panel
//! - `ADMIN_SESSION_SECRET` - Session secret (min 32 chars, high entropy)
//! - `ADMIN_USERNAME` - Operator login username
//! - `ADMIN_PASSWORD` - Operator login password
//!
//! ## Optional
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 1.0)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Shortest session secret accepted at startup.
const SESSION_SECRET_MIN_LEN: usize = 32;

/// Entropy floor, in bits per character. Random secrets clear this easily;
/// words and keyboard walks do not.
const SESSION_SECRET_MIN_ENTROPY: f64 = 3.3;

/// Substrings that mark a secret as a template value someone forgot to
/// replace. Matched case-insensitively.
const TEMPLATE_MARKERS: &[&str] = &[
    "your-",
    "changeme",
    "change-me",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the admin panel
    pub base_url: String,
    /// Session secret, required even though the Postgres store keeps
    /// session state server-side; startup fails without it
    pub session_secret: SecretString,
    /// Operator login credentials
    pub credentials: AdminCredentials,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Operator login credentials.
///
/// Implements `Debug` manually to redact both values. The username is treated
/// as a secret too: for a single-operator panel it is half the credential pair.
#[derive(Clone)]
pub struct AdminCredentials {
    /// Login username
    pub username: SecretString,
    /// Login password
    pub password: SecretString,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AdminCredentials {
    /// Load operator credentials from environment.
    ///
    /// Credentials are operator-chosen, so unlike the session secret they are
    /// not entropy-checked; only presence is enforced.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            username: SecretString::from(env_required("ADMIN_USERNAME")?),
            password: SecretString::from(env_required("ADMIN_PASSWORD")?),
        })
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing or
    /// unparseable, or if the session secret fails the quality checks.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let database_url = database_url_from_env()?;

        let host_raw = env_or("ADMIN_HOST", "127.0.0.1");
        let host: IpAddr = host_raw
            .parse()
            .map_err(|e: std::net::AddrParseError| invalid("ADMIN_HOST", &e))?;

        let port_raw = env_or("ADMIN_PORT", "3001");
        let port: u16 = port_raw
            .parse()
            .map_err(|e: std::num::ParseIntError| invalid("ADMIN_PORT", &e))?;

        let base_url = env_required("ADMIN_BASE_URL")?;

        let session_secret_raw = env_required("ADMIN_SESSION_SECRET")?;
        check_secret_quality(&session_secret_raw, "ADMIN_SESSION_SECRET")?;
        let session_secret = SecretString::from(session_secret_raw);

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            session_secret,
            credentials: AdminCredentials::from_env()?,
            sentry_dsn: env_optional("SENTRY_DSN"),
            sentry_environment: env_optional("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: env_rate("SENTRY_SAMPLE_RATE"),
            sentry_traces_sample_rate: env_rate("SENTRY_TRACES_SAMPLE_RATE"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns a reference to the operator credentials.
    #[must_use]
    pub const fn credentials(&self) -> &AdminCredentials {
        &self.credentials
    }
}

// =============================================================================
// Environment Helpers
// =============================================================================

fn env_required(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read a Sentry sample rate, defaulting to 1.0 when unset or unparseable.
fn env_rate(key: &str) -> f32 {
    env_optional(key)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1.0)
}

fn invalid(key: &str, cause: &dyn std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), cause.to_string())
}

/// Resolve the database URL.
///
/// `ADMIN_DATABASE_URL` wins; `DATABASE_URL` (set by `fly postgres attach`)
/// is the fallback. The reported missing variable is the primary one.
fn database_url_from_env() -> Result<SecretString, ConfigError> {
    std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| ConfigError::MissingEnvVar("ADMIN_DATABASE_URL".to_string()))
}

// =============================================================================
// Secret Quality
// =============================================================================

/// Reject secrets that are too short, look like unreplaced template values,
/// or carry too little entropy to have been randomly generated.
fn check_secret_quality(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    if secret.len() < SESSION_SECRET_MIN_LEN {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {SESSION_SECRET_MIN_LEN} characters (got {})",
                secret.len()
            ),
        ));
    }

    let lower = secret.to_lowercase();
    if let Some(marker) = TEMPLATE_MARKERS.iter().find(|m| lower.contains(*m)) {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("appears to be a placeholder (contains '{marker}')"),
        ));
    }

    let entropy = shannon_entropy(secret);
    if entropy < SESSION_SECRET_MIN_ENTROPY {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {SESSION_SECRET_MIN_ENTROPY:.1}). Use a randomly generated secret."
            ),
        ));
    }

    Ok(())
}

/// Shannon entropy of the character distribution, in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_default() += 1;
    }

    #[allow(clippy::cast_precision_loss)] // secret lengths are tiny relative to f64
    let total = s.chars().count() as f64;

    counts
        .into_values()
        .map(|n| {
            #[allow(clippy::cast_precision_loss)]
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_of_empty_is_zero() {
        assert!(shannon_entropy("").abs() < f64::EPSILON);
    }

    #[test]
    fn test_entropy_of_repeated_char_is_zero() {
        assert!(shannon_entropy("zzzzzzzzzz").abs() < f64::EPSILON);
    }

    #[test]
    fn test_entropy_of_even_two_char_split() {
        // Half 'x', half 'y': exactly one bit per character
        assert!((shannon_entropy("xyxyxyxy") - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_entropy_of_random_looking_secret() {
        assert!(shannon_entropy("q7W!e2R$t9Y&u4I*o1P#") > SESSION_SECRET_MIN_ENTROPY);
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let err = check_secret_quality("too-short", "TEST_VAR").unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
        assert!(err.to_string().contains("at least 32"));
    }

    #[test]
    fn test_template_secret_is_rejected() {
        // Long and varied enough, but clearly a template value
        let err =
            check_secret_quality("your-session-signing-key-goes-right-here", "TEST_VAR")
                .unwrap_err();
        assert!(err.to_string().contains("placeholder"));
    }

    #[test]
    fn test_low_entropy_secret_is_rejected() {
        let err = check_secret_quality(&"ab".repeat(20), "TEST_VAR").unwrap_err();
        assert!(err.to_string().contains("entropy too low"));
    }

    #[test]
    fn test_strong_secret_is_accepted() {
        assert!(check_secret_quality("q7W!e2R$t9Y&u4I*o1P#q3K%m8N^b5V(", "TEST_VAR").is_ok());
    }

    #[test]
    fn test_env_rate_defaults_to_one() {
        // Unset variable falls back to full sampling
        assert!((env_rate("NEURONIX_TEST_UNSET_RATE") - 1.0).abs() < f32::EPSILON);
    }

    fn test_config() -> AdminConfig {
        AdminConfig {
            database_url: SecretString::from("postgres://localhost/neuronix_test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3001,
            base_url: "http://localhost:3001".to_string(),
            session_secret: SecretString::from("q7W!e2R$t9Y&u4I*o1P#q3K%m8N^b5V("),
            credentials: AdminCredentials {
                username: SecretString::from("neuronix-ops"),
                password: SecretString::from("correct horse battery staple"),
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        }
    }

    #[test]
    fn test_socket_addr_combines_host_and_port() {
        let addr = test_config().socket_addr();
        assert_eq!(addr.to_string(), "127.0.0.1:3001");
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let rendered = format!("{:?}", test_config().credentials);
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("neuronix-ops"));
        assert!(!rendered.contains("correct horse battery staple"));
    }
}
