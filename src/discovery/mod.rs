//! Service discovery documents.
//!
//! Discovery walks from the server's root services document to a queryable endpoint:
//!
//! ```text
//! {server}/rootservices ──catalog predicate──▶ ServiceProviderCatalog
//!     ──dcterms:title──▶ ServiceProvider ──oslc:service──▶ query / creation capabilities
//! ```
//!
//! Each step is a small capability struct composed over a [`Resource`](crate::resource::Resource);
//! the ones that walk nested nodes also keep the parsed document graph.

mod catalog;
mod root_services;
mod service_provider;

pub use catalog::ServiceProviderCatalog;
pub use root_services::RootServices;
pub use service_provider::ServiceProvider;
