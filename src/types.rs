//! Core value types shared across the client.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`OslcResponse`] | Status, lower-cased headers and decoded body of one GET |
//! | [`ResponseBody`] | Text or binary body, chosen by the request kind |
//! | [`QueryOptions`] | Structured OSLC query parameters |
//! | [`QueryResponse`] | Query members plus optional paging and count metadata |
//! | [`ServiceProviderDetails`] | One entry of a service provider catalog |

use crate::client::is_success_status;
use crate::error::Result;
use crate::protocol::constants::headers;
use crate::protocol::media_type;
use crate::resource::Resource;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Decoded body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// Body decoded as UTF-8 text (RDF, XML and JSON requests)
    Text(String),
    /// Raw bytes (image requests)
    Binary(Bytes),
}

/// A response returned by the authenticating transport.
///
/// Error statuses are not turned into errors at this level; callers inspect
/// [`OslcResponse::status`] themselves.
#[derive(Debug, Clone)]
pub struct OslcResponse {
    /// Final URL after redirects
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Response headers, keys lower-cased
    pub headers: BTreeMap<String, String>,
    /// Response body
    pub body: ResponseBody,
}

impl OslcResponse {
    /// Look up a header by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Bare media type of the response, without parameters
    pub fn content_type(&self) -> Option<String> {
        self.header(headers::CONTENT_TYPE).map(media_type)
    }

    /// The response's `ETag`, if any
    pub fn etag(&self) -> Option<&str> {
        self.header(headers::ETAG)
    }

    /// Body as text; binary bodies are decoded lossily
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        match &self.body {
            ResponseBody::Text(text) => std::borrow::Cow::Borrowed(text),
            ResponseBody::Binary(bytes) => String::from_utf8_lossy(bytes),
        }
    }

    /// Body as raw bytes
    pub fn bytes(&self) -> Bytes {
        match &self.body {
            ResponseBody::Text(text) => Bytes::copy_from_slice(text.as_bytes()),
            ResponseBody::Binary(bytes) => bytes.clone(),
        }
    }

    /// Deserialize a JSON body (REST-JSON requests)
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.text())?)
    }

    /// Check if the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        is_success_status(self.status)
    }
}

/// Explicit page cursor appended to a query URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageArg {
    /// Query string key
    pub key: String,
    /// Query string value
    pub value: u64,
}

/// Structured OSLC query options.
///
/// # Examples
///
/// ```
/// use oslc_client::QueryOptions;
///
/// let options = QueryOptions::new(
///     "https://jazz.example/rm/views?oslc.query=true",
///     "http://www.w3.org/2000/01/rdf-schema#member",
/// )
/// .with_prefix("dcterms=<http://purl.org/dc/terms/>")
/// .with_properties("dcterms:identifier,dcterms:title")
/// .paginate(5)
/// .with_total_count();
///
/// assert!(options.paginate);
/// assert_eq!(options.page_size, Some(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Query base URI, obtained from a service provider's query capability
    pub from: String,
    /// Predicate linking the query base to each member (usually `rdfs:member`)
    pub what: String,
    /// `oslc.prefix` declarations
    pub prefix: Option<String>,
    /// `oslc.properties` list
    pub properties: Option<String>,
    /// `oslc.select` list
    pub select: Option<String>,
    /// `oslc.where` expression
    pub r#where: Option<String>,
    /// `oslc.orderBy` expression
    pub order_by: Option<String>,
    /// Request server-side paging
    pub paginate: bool,
    /// Page size when paging
    pub page_size: Option<u32>,
    /// Explicit page cursor
    pub page_arg: Option<PageArg>,
    /// Request the total result count
    pub total_count: bool,
}

impl QueryOptions {
    /// Create options querying `from` for members linked by `what`
    pub fn new(from: impl Into<String>, what: impl Into<String>) -> Self {
        QueryOptions {
            from: from.into(),
            what: what.into(),
            ..Default::default()
        }
    }

    /// Set `oslc.prefix`
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set `oslc.properties`
    pub fn with_properties(mut self, properties: impl Into<String>) -> Self {
        self.properties = Some(properties.into());
        self
    }

    /// Set `oslc.select`
    pub fn with_select(mut self, select: impl Into<String>) -> Self {
        self.select = Some(select.into());
        self
    }

    /// Set `oslc.where`
    pub fn with_where(mut self, expression: impl Into<String>) -> Self {
        self.r#where = Some(expression.into());
        self
    }

    /// Set `oslc.orderBy`
    pub fn with_order_by(mut self, expression: impl Into<String>) -> Self {
        self.order_by = Some(expression.into());
        self
    }

    /// Request paging with the given page size
    pub fn paginate(mut self, page_size: u32) -> Self {
        self.paginate = true;
        self.page_size = Some(page_size);
        self
    }

    /// Add an explicit page cursor
    pub fn with_page_arg(mut self, key: impl Into<String>, value: u64) -> Self {
        self.page_arg = Some(PageArg {
            key: key.into(),
            value,
        });
        self
    }

    /// Request the total result count
    pub fn with_total_count(mut self) -> Self {
        self.total_count = true;
        self
    }
}

/// Result of a query.
///
/// `next_page` is `Some` exactly when paging was requested and `total_count` is `Some`
/// exactly when the count was requested. A requested field missing from the server's
/// response defaults to an empty string and `0` respectively.
#[derive(Debug, Clone, Default)]
pub struct QueryResponse {
    /// Query members, each holding only its own statements
    pub resources: Vec<Resource>,
    /// URI of the next page
    pub next_page: Option<String>,
    /// Total number of results
    pub total_count: Option<u64>,
}

/// A service provider listed in a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceProviderDetails {
    /// URI of the provider's services document
    pub services_url: String,
    /// Title of the provider
    pub service_provider_name: String,
    /// URI of the provider's details page
    pub details_url: String,
}
