//! OSLC protocol constants, header helpers and RDF namespaces.
//!
//! # Module Organization
//!
//! ```text
//! protocol/
//! ├── constants   - Header names, authentication sentinels, media types, query keys
//! ├── headers     - Response header normalization and media-type parsing
//! └── namespaces  - Read-only table of RDF namespaces used by OSLC servers
//! ```

pub mod constants;
pub mod headers;
pub mod namespaces;

pub use headers::{header_map_to_btree, is_compact_media_type, media_type};
pub use namespaces::Namespace;
