//! RDF/XML parsing into an in-memory graph, plus the lookups shared by the typed views.
//!
//! Every document fetched from an OSLC server (root services, catalogs, service providers,
//! query results, resources) goes through [`parse_rdf_xml`]. The resulting [`Graph`] is the
//! triple store the rest of the crate reads from.

use crate::error::Result;
use oxrdf::{Graph, NamedNodeRef, SubjectRef, TermRef};
use oxrdfxml::RdfXmlParser;

/// Parse an RDF/XML document, resolving relative IRIs against `base_iri`.
///
/// An empty (or whitespace-only) body yields an empty graph.
///
/// # Examples
///
/// ```
/// use oslc_client::resource::parse_rdf_xml;
///
/// let body = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
///                       xmlns:dcterms="http://purl.org/dc/terms/">
///   <rdf:Description rdf:about="https://s/r/1"><dcterms:title>One</dcterms:title></rdf:Description>
/// </rdf:RDF>"#;
/// let graph = parse_rdf_xml(body, "https://s/r/1").unwrap();
/// assert_eq!(graph.len(), 1);
/// ```
pub fn parse_rdf_xml(body: &str, base_iri: &str) -> Result<Graph> {
    let mut graph = Graph::new();
    if body.trim().is_empty() {
        return Ok(graph);
    }
    let parser = RdfXmlParser::new().with_base_iri(base_iri)?;
    for triple in parser.for_reader(body.as_bytes()) {
        graph.insert(&triple?);
    }
    Ok(graph)
}

/// Copy every statement whose subject is `subject` into a new graph
pub fn slice_subject<'a>(graph: &Graph, subject: impl Into<SubjectRef<'a>>) -> Graph {
    let mut slice = Graph::new();
    for triple in graph.triples_for_subject(subject) {
        slice.insert(triple);
    }
    slice
}

/// Predicate IRIs are looked up without validation: a malformed IRI simply matches nothing.
pub(crate) fn predicate(iri: &str) -> NamedNodeRef<'_> {
    NamedNodeRef::new_unchecked(iri)
}

/// The first object of `(subject, predicate)`
pub(crate) fn object<'g, 'a>(
    graph: &'g Graph,
    subject: impl Into<SubjectRef<'a>>,
    predicate_iri: &'a str,
) -> Option<TermRef<'g>> {
    graph.object_for_subject_predicate(subject, predicate(predicate_iri))
}

/// All objects of `(subject, predicate)`
pub(crate) fn objects<'g, 'a>(
    graph: &'g Graph,
    subject: impl Into<SubjectRef<'a>>,
    predicate_iri: &'a str,
) -> Vec<TermRef<'g>> {
    graph
        .objects_for_subject_predicate(subject, predicate(predicate_iri))
        .collect()
}

/// Lexical value of a term: the IRI of a named node, the id of a blank node, the value of a literal
pub(crate) fn term_value(term: TermRef<'_>) -> String {
    match term {
        TermRef::NamedNode(node) => node.as_str().to_string(),
        TermRef::BlankNode(node) => node.as_str().to_string(),
        TermRef::Literal(literal) => literal.value().to_string(),
        #[allow(unreachable_patterns)]
        other => other.to_string(),
    }
}

/// Reinterpret an object term as a subject, for walking nested nodes
pub(crate) fn as_subject(term: TermRef<'_>) -> Option<SubjectRef<'_>> {
    match term {
        TermRef::NamedNode(node) => Some(node.into()),
        TermRef::BlankNode(node) => Some(node.into()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::NamedNodeRef;

    const DOC: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:dcterms="http://purl.org/dc/terms/"
         xmlns:oslc="http://open-services.net/ns/core#">
  <rdf:Description rdf:about="https://s/r/1">
    <dcterms:title>One</dcterms:title>
    <oslc:details rdf:resource="details"/>
  </rdf:Description>
  <rdf:Description rdf:about="https://s/r/2">
    <dcterms:title>Two</dcterms:title>
  </rdf:Description>
</rdf:RDF>"#;

    #[test]
    fn test_parse_resolves_relative_iris() {
        let graph = parse_rdf_xml(DOC, "https://s/r/1").unwrap();
        assert_eq!(graph.len(), 3);
        let subject = NamedNodeRef::new_unchecked("https://s/r/1");
        let details = object(&graph, subject, "http://open-services.net/ns/core#details").unwrap();
        assert_eq!(term_value(details), "https://s/r/details");
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(parse_rdf_xml("  \n", "https://s/").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_body() {
        let err = parse_rdf_xml("<rdf:RDF", "https://s/").unwrap_err();
        assert_eq!(err.code(), 500);
    }

    #[test]
    fn test_slice_subject() {
        let graph = parse_rdf_xml(DOC, "https://s/").unwrap();
        let slice = slice_subject(&graph, NamedNodeRef::new_unchecked("https://s/r/2"));
        assert_eq!(slice.len(), 1);
        let titles = objects(
            &slice,
            NamedNodeRef::new_unchecked("https://s/r/2"),
            "http://purl.org/dc/terms/title",
        );
        assert_eq!(titles.into_iter().map(term_value).collect::<Vec<_>>(), vec!["Two"]);
    }
}
