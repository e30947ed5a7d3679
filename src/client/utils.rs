//! Utility functions for the authenticating transport.
//!
//! This module provides helper functions for:
//! - Deriving the Jazz form login endpoint from a request URL
//! - Encoding the form login body
//! - Status code classification

use crate::error::Result;
use crate::protocol::constants::auth;
use url::{form_urlencoded, Url};

/// Derive the form login endpoint for a request URL.
///
/// The URL is truncated to its origin plus first path segment (the application context
/// root, e.g. `/ccm`), then the fixed login path is appended.
///
/// # Examples
///
/// ```
/// use oslc_client::client::form_login_url;
///
/// let url = form_login_url("https://jazz.example:9443/ccm/oslc/workitems/catalog?x=1").unwrap();
/// assert_eq!(url, "https://jazz.example:9443/ccm/auth/authrequired/j_security_check");
/// ```
pub fn form_login_url(request_url: &str) -> Result<String> {
    let url = Url::parse(request_url)?;
    let context_root = url
        .path_segments()
        .and_then(|mut segments| segments.next())
        .unwrap_or_default();
    Ok(format!(
        "{}/{}/{}",
        url.origin().ascii_serialization(),
        context_root,
        auth::FORM_LOGIN_PATH
    ))
}

/// URL-encoded body of the form login POST
pub fn form_login_body(username: &str, password: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(auth::USERNAME_FIELD, username)
        .append_pair(auth::PASSWORD_FIELD, password)
        .finish()
}

/// `401` or `403`: the server refused the credentials or the session.
///
/// Backs [`OslcError::is_access_denied`](crate::OslcError::is_access_denied).
pub fn is_access_denied_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Any `2xx` status. Backs [`OslcResponse::is_success`](crate::OslcResponse::is_success).
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_login_url() {
        assert_eq!(
            form_login_url("https://s/rm/rootservices").unwrap(),
            "https://s/rm/auth/authrequired/j_security_check"
        );
        assert_eq!(
            form_login_url("http://127.0.0.1:8080/qm/service/x/y").unwrap(),
            "http://127.0.0.1:8080/qm/auth/authrequired/j_security_check"
        );
    }

    #[test]
    fn test_form_login_url_invalid() {
        assert!(form_login_url("/relative").is_err());
    }

    #[test]
    fn test_form_login_body_encodes() {
        assert_eq!(
            form_login_body("alice@corp", "p&ss w"),
            "j_username=alice%40corp&j_password=p%26ss+w"
        );
    }

    #[test]
    fn test_status_classification() {
        assert!(is_access_denied_status(401));
        assert!(is_access_denied_status(403));
        assert!(!is_access_denied_status(404));
        assert!(is_success_status(204));
        assert!(!is_success_status(302));
    }
}
