//! Error types for OSLC client operations.
//!
//! Every public operation of this crate returns [`Result`], whose error side is the single
//! tagged [`OslcError`]. Each variant carries a stable numeric code (an HTTP status in most
//! cases) so callers can branch on [`OslcError::code`] without matching on messages.
//!
//! | Variant | Code | Raised when |
//! |---------|------|-------------|
//! | [`OslcError::Unauthorized`] | 401 | Authentication rejected or challenge unresolved |
//! | [`OslcError::NotFound`] | 404 | A discovery step or identifier lookup did not resolve |
//! | [`OslcError::InvalidState`] | 500 | An operation ran before its required predecessor |
//! | [`OslcError::QueryFailed`] | status | The server answered a query with a non-200 status |
//! | [`OslcError::Http`] | status | A discovery or read GET returned a non-success status |
//! | [`OslcError::Internal`] | 500 | Anything else (network, RDF parsing, malformed URIs) |

use crate::client::is_access_denied_status;
use thiserror::Error;

/// Result type for OSLC client operations
pub type Result<T> = std::result::Result<T, OslcError>;

/// Boxed source error preserved inside [`OslcError::Internal`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the OSLC client
#[derive(Error, Debug)]
pub enum OslcError {
    /// Credentials were rejected or an authentication challenge could not be satisfied
    #[error("{0}")]
    Unauthorized(String),

    /// A discovery step, capability lookup or identifier lookup failed to resolve
    #[error("{0}")]
    NotFound(String),

    /// An operation was invoked before its required predecessor completed
    #[error("{0}")]
    InvalidState(String),

    /// The server reported a non-200 status for a query
    #[error("Query failed with status {status}{}", message_suffix(.message))]
    QueryFailed {
        /// HTTP status of the query response
        status: u16,
        /// Error message embedded in the response body, when one could be extracted
        message: Option<String>,
    },

    /// A GET returned a non-success status outside of the query flow
    #[error("Request to {url} failed with status {status}")]
    Http {
        /// HTTP status of the response
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Unexpected failure, with the original error kept as the source
    #[error("{message}")]
    Internal {
        /// Description of the failure
        message: String,
        /// Underlying error
        #[source]
        source: Option<BoxError>,
    },
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default()
}

impl OslcError {
    /// Build an [`OslcError::Internal`] without an underlying source.
    pub fn internal(message: impl Into<String>) -> Self {
        OslcError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Numeric code of this error, 500 unless the variant carries a more specific status.
    pub fn code(&self) -> u16 {
        match self {
            OslcError::Unauthorized(_) => 401,
            OslcError::NotFound(_) => 404,
            OslcError::InvalidState(_) => 500,
            OslcError::QueryFailed { status, .. } => *status,
            OslcError::Http { status, .. } => *status,
            OslcError::Internal { .. } => 500,
        }
    }

    /// Human readable description of the error code.
    ///
    /// # Examples
    ///
    /// ```
    /// use oslc_client::OslcError;
    ///
    /// let err = OslcError::Unauthorized("bad credentials".into());
    /// assert_eq!(err.error_type(), "401 : Unauthorized");
    /// ```
    pub fn error_type(&self) -> String {
        let code = self.code();
        match code {
            500 => format!("{} : Internal Server Error", code),
            401 => format!("{} : Unauthorized", code),
            403 => format!("{} : Forbidden", code),
            _ => code.to_string(),
        }
    }

    /// Check if this error means the server refused access
    pub fn is_access_denied(&self) -> bool {
        is_access_denied_status(self.code())
    }
}

impl From<reqwest::Error> for OslcError {
    fn from(err: reqwest::Error) -> Self {
        OslcError::Internal {
            message: format!("HTTP transport error: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<oxrdfxml::RdfXmlParseError> for OslcError {
    fn from(err: oxrdfxml::RdfXmlParseError) -> Self {
        OslcError::Internal {
            message: format!("Invalid RDF/XML document: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<oxrdf::IriParseError> for OslcError {
    fn from(err: oxrdf::IriParseError) -> Self {
        OslcError::Internal {
            message: format!("Invalid IRI: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<url::ParseError> for OslcError {
    fn from(err: url::ParseError) -> Self {
        OslcError::Internal {
            message: format!("Invalid URL: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<regex::Error> for OslcError {
    fn from(err: regex::Error) -> Self {
        OslcError::Internal {
            message: format!("Invalid pattern: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for OslcError {
    fn from(err: serde_json::Error) -> Self {
        OslcError::Internal {
            message: format!("Invalid JSON body: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_codes() {
        assert_eq!(OslcError::Unauthorized("x".into()).code(), 401);
        assert_eq!(OslcError::NotFound("x".into()).code(), 404);
        assert_eq!(OslcError::InvalidState("x".into()).code(), 500);
        assert_eq!(OslcError::internal("x").code(), 500);
        let err = OslcError::QueryFailed {
            status: 400,
            message: None,
        };
        assert_eq!(err.code(), 400);
    }

    #[test]
    fn test_error_type() {
        assert_eq!(OslcError::internal("boom").error_type(), "500 : Internal Server Error");
        let forbidden = OslcError::Http {
            status: 403,
            url: "https://s/x".into(),
        };
        assert_eq!(forbidden.error_type(), "403 : Forbidden");
        assert!(forbidden.is_access_denied());
        assert_eq!(OslcError::NotFound("x".into()).error_type(), "404");
    }

    #[test]
    fn test_access_denied_codes() {
        assert!(OslcError::Unauthorized("x".into()).is_access_denied());
        assert!(!OslcError::NotFound("x".into()).is_access_denied());
        let failed = OslcError::QueryFailed {
            status: 403,
            message: None,
        };
        assert!(failed.is_access_denied());
    }

    #[test]
    fn test_query_failed_display() {
        let err = OslcError::QueryFailed {
            status: 400,
            message: Some("bad where clause".into()),
        };
        assert_eq!(err.to_string(), "Query failed with status 400: bad where clause");
        let err = OslcError::QueryFailed {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "Query failed with status 500");
    }

    #[test]
    fn test_internal_keeps_source() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = OslcError::from(parse_err);
        assert_eq!(err.code(), 500);
        assert!(err.source().is_some());
    }
}
