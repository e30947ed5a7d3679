//! Authenticating HTTP transport for OSLC servers.
//!
//! This module provides the HTTP layer every other part of the crate goes through:
//!
//! - **Request kinds** select the `Accept` header and whether the body is text or bytes
//! - **Cookie session** shared by all requests of one client
//! - **Form login** answering the Jazz `authrequired` sentinel
//! - **Basic credentials** answering a `WWW-Authenticate` challenge
//! - **Proxy and local address binding** applied to every connection
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch        - OslcClient and the challenge/retry protocol
//! ├── headers      - Request kinds and their headers
//! ├── config       - Client configuration
//! └── utils        - Login URL derivation and status helpers
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`OslcClient`] | HTTP client with transparent re-authentication |
//! | [`RequestKind`] | RDF, REST XML, REST JSON or image request |
//! | [`ClientConfig`] | Client configuration options |
//!
//! # Examples
//!
//! ```
//! use oslc_client::client::{form_login_url, is_access_denied_status, ClientConfig, RequestKind};
//!
//! let config = ClientConfig {
//!     read_timeout_ms: 30_000,
//!     ..ClientConfig::with_credentials("alice", "secret")
//! };
//! assert_eq!(RequestKind::Oslc.accept(), "application/rdf+xml");
//! assert!(is_access_denied_status(401));
//! assert_eq!(
//!     form_login_url("https://jazz.example/ccm/rootservices").unwrap(),
//!     "https://jazz.example/ccm/auth/authrequired/j_security_check"
//! );
//! ```

mod config;
mod fetch;
mod headers;
mod utils;

pub use config::ClientConfig;
pub use fetch::OslcClient;
pub use headers::{form_login_headers, RequestKind};
pub use utils::*;
