//! End-to-end tests against a mock OSLC server.

mod query;
