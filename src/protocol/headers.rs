//! Response header helpers.
//!
//! Responses are exposed to the upper layers as a `BTreeMap` of lower-cased header names,
//! so lookups for the Jazz authentication sentinel or the content type never depend on the
//! casing the server used.
//!
//! # Examples
//!
//! ```
//! use oslc_client::protocol::{media_type, is_compact_media_type};
//!
//! assert_eq!(media_type("application/rdf+xml; charset=UTF-8"), "application/rdf+xml");
//! assert!(is_compact_media_type("application/x-oslc-compact+xml"));
//! ```

use super::constants::media_types;
use http::HeaderMap;
use std::collections::BTreeMap;

/// Convert an HTTP header map into a map keyed by lower-cased header name.
///
/// Header values that are not valid visible ASCII are skipped. When a header repeats,
/// the values are joined with `", "` as allowed by RFC 9110.
pub fn header_map_to_btree(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            map.entry(name.as_str().to_ascii_lowercase())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(value);
                })
                .or_insert_with(|| value.to_string());
        }
    }
    map
}

/// Extract the bare media type from a `Content-Type` value, lower-cased and without parameters.
pub fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Check if a `Content-Type` value denotes the OSLC compact (preview) representation
pub fn is_compact_media_type(content_type: &str) -> bool {
    media_type(content_type) == media_types::OSLC_COMPACT
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{HeaderValue, CONTENT_TYPE, SET_COOKIE};

    #[test]
    fn test_media_type_strips_parameters() {
        assert_eq!(media_type("application/rdf+xml;charset=UTF-8"), "application/rdf+xml");
        assert_eq!(media_type(" Text/JSON "), "text/json");
        assert_eq!(media_type(""), "");
    }

    #[test]
    fn test_is_compact_media_type() {
        assert!(is_compact_media_type("application/x-oslc-compact+xml; charset=utf-8"));
        assert!(!is_compact_media_type("application/rdf+xml"));
    }

    #[test]
    fn test_header_map_to_btree() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/rdf+xml"));
        headers.insert(
            "X-Com-Ibm-Team-Repository-Web-Auth-Msg",
            HeaderValue::from_static("authrequired"),
        );
        headers.append(SET_COOKIE, HeaderValue::from_static("a=1"));
        headers.append(SET_COOKIE, HeaderValue::from_static("b=2"));

        let map = header_map_to_btree(&headers);
        assert_eq!(map.get("content-type").map(String::as_str), Some("application/rdf+xml"));
        assert_eq!(
            map.get("x-com-ibm-team-repository-web-auth-msg").map(String::as_str),
            Some("authrequired")
        );
        assert_eq!(map.get("set-cookie").map(String::as_str), Some("a=1, b=2"));
    }
}
