//! Validated link URL type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`LinkUrl`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum LinkUrlError {
    /// The input string is empty.
    #[error("link cannot be empty")]
    Empty,
    /// The input does not start with an accepted scheme prefix.
    #[error("link must start with http:// or https://")]
    InvalidScheme,
}

/// A link URL accepted by the event panel.
///
/// This type guards the two link fields an event carries (registration link
/// and banner image). Validation is deliberately shallow: the value must be
/// non-empty and start with `http://` or `https://`. Anything stricter would
/// reject real-world registration URLs with unusual but working shapes.
///
/// ## Examples
///
/// ```
/// use neuronix_core::LinkUrl;
///
/// // Valid links
/// assert!(LinkUrl::parse("https://lu.ma/neuronix-hackathon").is_ok());
/// assert!(LinkUrl::parse("http://cdn.example.com/banner.png").is_ok());
///
/// // Invalid links
/// assert!(LinkUrl::parse("").is_err());                  // empty
/// assert!(LinkUrl::parse("lu.ma/neuronix").is_err());    // no scheme
/// assert!(LinkUrl::parse("ftp://host/banner.png").is_err()); // wrong scheme
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct LinkUrl(String);

impl LinkUrl {
    /// Parse a `LinkUrl` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Does not start with `http://` or `https://`
    pub fn parse(s: &str) -> Result<Self, LinkUrlError> {
        if s.is_empty() {
            return Err(LinkUrlError::Empty);
        }

        if !s.starts_with("http://") && !s.starts_with("https://") {
            return Err(LinkUrlError::InvalidScheme);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the link as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `LinkUrl` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LinkUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LinkUrl {
    type Err = LinkUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for LinkUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for LinkUrl {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for LinkUrl {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for LinkUrl {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_links() {
        assert!(LinkUrl::parse("https://lu.ma/neuronix").is_ok());
        assert!(LinkUrl::parse("http://lu.ma/neuronix").is_ok());
        assert!(LinkUrl::parse("https://forms.gle/abc123").is_ok());
        assert!(LinkUrl::parse("https://example.com/banner.png?v=2").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(LinkUrl::parse(""), Err(LinkUrlError::Empty)));
    }

    #[test]
    fn test_parse_missing_scheme() {
        assert!(matches!(
            LinkUrl::parse("lu.ma/neuronix"),
            Err(LinkUrlError::InvalidScheme)
        ));
        assert!(matches!(
            LinkUrl::parse("www.example.com"),
            Err(LinkUrlError::InvalidScheme)
        ));
    }

    #[test]
    fn test_parse_wrong_scheme() {
        assert!(matches!(
            LinkUrl::parse("ftp://example.com/banner.png"),
            Err(LinkUrlError::InvalidScheme)
        ));
        // Scheme check is a prefix check, so case matters
        assert!(matches!(
            LinkUrl::parse("HTTPS://example.com"),
            Err(LinkUrlError::InvalidScheme)
        ));
    }

    #[test]
    fn test_parse_whitespace_is_not_trimmed() {
        // Strict prefix match: padded links are rejected, not cleaned up
        assert!(matches!(
            LinkUrl::parse("  https://example.com"),
            Err(LinkUrlError::InvalidScheme)
        ));
    }

    #[test]
    fn test_display() {
        let link = LinkUrl::parse("https://lu.ma/neuronix").unwrap();
        assert_eq!(format!("{link}"), "https://lu.ma/neuronix");
    }

    #[test]
    fn test_serde_roundtrip() {
        let link = LinkUrl::parse("https://lu.ma/neuronix").unwrap();
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(json, "\"https://lu.ma/neuronix\"");

        let parsed: LinkUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, link);
    }

    #[test]
    fn test_from_str() {
        let link: LinkUrl = "https://lu.ma/neuronix".parse().unwrap();
        assert_eq!(link.as_str(), "https://lu.ma/neuronix");
    }
}
