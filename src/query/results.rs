//! Interpretation of query result documents.

use crate::error::Result;
use crate::protocol::namespaces::OSLC;
use crate::resource::{objects, parse_rdf_xml, predicate, term_value, Resource};
use crate::types::{QueryOptions, QueryResponse};
use oxrdf::{Graph, NamedNodeRef, TermRef};

/// Value of a response-info property: the statement about `query_url` if present, otherwise
/// the first statement with that predicate anywhere in the document
fn response_info(graph: &Graph, query_url: &str, predicate_iri: &str) -> Option<String> {
    let property = predicate(predicate_iri);
    NamedNodeRef::new(query_url)
        .ok()
        .and_then(|subject| graph.object_for_subject_predicate(subject, property))
        .or_else(|| graph.triples_for_predicate(property).next().map(|t| t.object))
        .map(term_value)
}

/// Parse the body of a successful query.
///
/// The body is resolved against `query_url`. Members are the named objects of
/// `(options.from, options.what)`, each sliced down to its own statements.
pub fn parse_query_response(
    body: &str,
    query_url: &str,
    options: &QueryOptions,
) -> Result<QueryResponse> {
    let graph = parse_rdf_xml(body, query_url)?;

    let total_count = options.total_count.then(|| {
        response_info(&graph, query_url, &OSLC.term("totalCount"))
            .and_then(|count| count.trim().parse().ok())
            .unwrap_or(0)
    });
    let next_page = options
        .paginate
        .then(|| response_info(&graph, query_url, &OSLC.term("nextPage")).unwrap_or_default());

    let mut resources = Vec::new();
    let from = NamedNodeRef::new_unchecked(&options.from);
    for member in objects(&graph, from, &options.what) {
        if let TermRef::NamedNode(node) = member {
            resources.push(Resource::from_graph(node.as_str(), &graph, None)?);
        }
    }

    Ok(QueryResponse {
        resources,
        next_page,
        total_count,
    })
}

/// Error message embedded in the body of a failed query, if the body is RDF and carries one.
///
/// Jazz servers put the message where the next page link would be; `oslc:message` is the
/// fallback.
pub fn extract_error_message(body: &str, query_url: &str) -> Option<String> {
    let graph = parse_rdf_xml(body, query_url).ok()?;
    response_info(&graph, query_url, &OSLC.term("nextPage"))
        .or_else(|| response_info(&graph, query_url, &OSLC.term("message")))
        .filter(|message| !message.is_empty())
}
