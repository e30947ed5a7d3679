#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # OSLC client
//!
//! An asynchronous client for OSLC (Open Services for Lifecycle Collaboration) servers such
//! as IBM Jazz: requirements, change and quality management applications that publish their
//! data as RDF.
//!
//! ## Overview
//!
//! Talking to an OSLC server takes four steps, each depending on the previous one:
//!
//! 1. **Discovery** - follow the root services document to a service provider catalog
//! 2. **Selection** - pick a service provider (usually a project area) by title
//! 3. **Capabilities** - resolve the query base or creation factory for a resource type
//! 4. **Queries and reads** - fetch resources as generic property maps
//!
//! Every request goes through an authenticating transport that keeps a cookie session and
//! answers Jazz form-login and HTTP basic challenges, retrying each GET at most once.
//!
//! ## Key Features
//!
//! - **Schema-less resources**: RDF statements exposed as a multi-valued property map
//! - **Form and basic authentication**: transparent, with concurrent logins serialized
//! - **Structured queries**: `oslc.where`, `oslc.select`, paging and total counts
//! - **Compact previews**: `application/x-oslc-compact+xml` reads yield icon and preview data
//! - **Tagged errors**: every failure carries a stable numeric code
//!
//! ## Usage
//!
//! ```ignore
//! use oslc_client::{ClientConfig, OslcServer};
//! use oslc_client::protocol::namespaces::{OSLC_RM, OSLC_RM10};
//!
//! #[tokio::main]
//! async fn main() -> oslc_client::Result<()> {
//!     let mut server = OslcServer::new(
//!         "https://jazz.example/rm",
//!         ClientConfig::with_credentials("alice", "secret"),
//!     )?;
//!     server.connect(&OSLC_RM10.term("rmServiceProviders")).await?;
//!     server.use_service_provider("JKE Banking (Requirements Management)").await?;
//!
//!     let requirement = server
//!         .read_by_id(&OSLC_RM.term("Requirement"), "1234", None)
//!         .await?
//!         .into_resource();
//!     println!("{:?}", requirement.get_title());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[server]** - Session facade: discovery state, queries and reads
//! - **[client]** - Authenticating HTTP transport
//! - **[discovery]** - Root services, catalogs and service providers
//! - **[query]** - Query URL construction and result parsing
//! - **[resource]** - Generic RDF resources and compact previews
//! - **[types]** - Responses, query options and results
//! - **[error]** - Error types and result handling
//! - **[protocol]** - Header names, media types and namespaces

pub mod client;
pub mod discovery;
pub mod error;
pub mod protocol;
pub mod query;
pub mod resource;
pub mod server;
pub mod types;

pub use client::{ClientConfig, OslcClient, RequestKind};
pub use error::{OslcError, Result};
pub use resource::{Compact, PropertyValue, Representation, Resource, Value};
pub use server::OslcServer;
pub use types::{OslcResponse, QueryOptions, QueryResponse, ServiceProviderDetails};

#[cfg(test)]
mod tests;
