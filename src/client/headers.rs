//! Request kinds and the headers each one sends.
//!
//! | Kind | `Accept` | Body decoding |
//! |------|----------|---------------|
//! | [`RequestKind::Oslc`] | `application/rdf+xml` + `OSLC-Core-Version: 2.0` | text |
//! | [`RequestKind::Rest`] | `application/xml` | text |
//! | [`RequestKind::RestJson`] | `text/json` | text |
//! | [`RequestKind::Image`] | `image/jpeg,image/png` | bytes |

use crate::protocol::constants::{headers, media_types, OSLC_CORE_VERSION_2};
use http::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};

/// The kind of GET issued through the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestKind {
    /// OSLC protocol resource (RDF/XML)
    #[default]
    Oslc,
    /// Generic REST XML
    Rest,
    /// REST JSON
    RestJson,
    /// Binary image asset
    Image,
}

impl RequestKind {
    /// Value of the `Accept` header
    pub fn accept(self) -> &'static str {
        match self {
            RequestKind::Oslc => media_types::RDF_XML,
            RequestKind::Rest => media_types::XML,
            RequestKind::RestJson => media_types::TEXT_JSON,
            RequestKind::Image => media_types::IMAGES,
        }
    }

    /// Check if the response body is kept as raw bytes
    pub fn is_binary(self) -> bool {
        matches!(self, RequestKind::Image)
    }

    /// Headers sent with a GET of this kind
    pub fn headers(self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(ACCEPT, HeaderValue::from_static(self.accept()));
        if !self.is_binary() {
            map.insert(CONTENT_TYPE, HeaderValue::from_static(media_types::FORM_URLENCODED));
        }
        if self == RequestKind::Oslc {
            map.insert(
                HeaderName::from_static("oslc-core-version"),
                HeaderValue::from_static(OSLC_CORE_VERSION_2),
            );
        }
        map
    }
}

/// Headers sent with the form login POST
pub fn form_login_headers() -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(ACCEPT, HeaderValue::from_static(media_types::HTML));
    map.insert(CONTENT_TYPE, HeaderValue::from_static(media_types::FORM_URLENCODED));
    map
}

/// Check the Jazz authentication sentinel of a response
pub fn auth_message<'a>(response_headers: &'a HeaderMap) -> Option<&'a str> {
    response_headers
        .get(headers::JAZZ_AUTH_MSG)
        .and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oslc_headers() {
        let map = RequestKind::Oslc.headers();
        assert_eq!(map.get(ACCEPT).unwrap(), "application/rdf+xml");
        assert_eq!(map.get(headers::OSLC_CORE_VERSION).unwrap(), "2.0");
        assert_eq!(map.get(CONTENT_TYPE).unwrap(), "application/x-www-form-urlencoded");
    }

    #[test]
    fn test_rest_headers() {
        assert_eq!(RequestKind::Rest.headers().get(ACCEPT).unwrap(), "application/xml");
        let json = RequestKind::RestJson.headers();
        assert_eq!(json.get(ACCEPT).unwrap(), "text/json");
        assert!(json.get(headers::OSLC_CORE_VERSION).is_none());
    }

    #[test]
    fn test_image_headers() {
        let map = RequestKind::Image.headers();
        assert_eq!(map.get(ACCEPT).unwrap(), "image/jpeg,image/png");
        assert!(map.get(CONTENT_TYPE).is_none());
        assert!(RequestKind::Image.is_binary());
    }

    #[test]
    fn test_auth_message() {
        let mut map = HeaderMap::new();
        assert!(auth_message(&map).is_none());
        map.insert(headers::JAZZ_AUTH_MSG, HeaderValue::from_static("authrequired"));
        assert_eq!(auth_message(&map), Some("authrequired"));
    }
}
