//! OSLC query execution.
//!
//! A query is a GET of a URL built from [`QueryOptions`], answered with an RDF/XML document
//! listing the members of the query base plus optional response info (`oslc:totalCount`,
//! `oslc:nextPage`).
//!
//! # Module Organization
//!
//! ```text
//! query/
//! ├── url          - Deterministic query URL construction
//! └── results      - Member slicing, paging metadata and error messages
//! ```

mod results;
mod url;

pub use self::url::build_query_url;
pub use results::{extract_error_message, parse_query_response};

use crate::client::{OslcClient, RequestKind};
use crate::error::{OslcError, Result};
use crate::types::{QueryOptions, QueryResponse};

/// Run a query through `client`.
///
/// # Errors
///
/// - [`OslcError::InvalidState`] if `options.from` is empty
/// - [`OslcError::Unauthorized`] if the server answers 401 or rejects the login
/// - [`OslcError::QueryFailed`] for any other non-200 status
pub async fn run_query(client: &OslcClient, options: &QueryOptions) -> Result<QueryResponse> {
    if options.from.is_empty() {
        return Err(OslcError::InvalidState(
            "Query base URI is empty; resolve a query capability first".into(),
        ));
    }

    let url = build_query_url(options);
    let response = client.get(&url, RequestKind::Oslc).await?;

    match response.status {
        200 => parse_query_response(&response.text(), &url, options),
        401 => Err(OslcError::Unauthorized(format!(
            "401 : Unauthorized while querying: {}",
            url
        ))),
        status => {
            if client.config().enable_logging {
                tracing::warn!("Query {} failed with status {}", url, status);
            }
            Err(OslcError::QueryFailed {
                status,
                message: extract_error_message(&response.text(), &url),
            })
        }
    }
}
