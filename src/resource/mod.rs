//! Generic, schema-less view over the RDF statements about one subject.
//!
//! A [`Resource`] owns the statements whose subject is its URI and nothing else: documents
//! are parsed into a graph once, then each resource of interest gets its own slice of that
//! graph. Properties are multi-valued by default; [`Resource::get`] collapses the matches
//! into a [`PropertyValue`].
//!
//! # Examples
//!
//! ```
//! use oslc_client::resource::{Resource, Value, PropertyValue};
//!
//! let mut req = Resource::new("https://jazz.example/rm/resources/42").unwrap();
//! req.set_title("Braking distance").unwrap();
//! req.set(
//!     "http://purl.org/dc/terms/subject",
//!     vec![Value::literal("safety"), Value::literal("brakes")],
//! )
//! .unwrap();
//!
//! assert_eq!(req.get_title().as_deref(), Some("Braking distance"));
//! assert!(matches!(
//!     req.get("http://purl.org/dc/terms/subject"),
//!     Some(PropertyValue::Multiple(_))
//! ));
//! ```

mod compact;
mod graph;
mod value;

pub use compact::{Compact, Preview};
pub use graph::{parse_rdf_xml, slice_subject};
pub use value::{PropertyValue, Value};

pub(crate) use graph::{as_subject, object, objects, predicate, term_value};

use crate::error::Result;
use crate::protocol::namespaces::{DCTERMS, OSLC, RTC_CM, RTC_EXT};
use oxrdf::{BlankNode, Graph, NamedNode, NamedOrBlankNode, Subject, SubjectRef, TermRef, Triple};
use std::collections::{BTreeMap, BTreeSet};

/// Jazz link-type predicates whose local names are not valid XML QNames. They parse, but
/// cannot be written back as RDF/XML, so they are dropped from every resource.
const UNSERIALIZABLE_PREDICATES: &[&str] = &[
    "com.ibm.team.apt.attribute.complexity",
    "com.ibm.team.apt.attribute.acceptance",
];

const UNSERIALIZABLE_RTC_CM_PREDICATES: &[&str] = &[
    "com.ibm.team.workitem.linktype.relatedworkitem.related",
    "com.ibm.team.workitem.linktype.resolvesworkitem.resolves",
    "com.ibm.team.build.linktype.reportedWorkItems.com.ibm.team.build.common.link.reportedAgainstBuilds",
    "com.ibm.team.enterprise.promotion.linktype.promotedBuildMaps.promotedBuildMaps",
    "com.ibm.team.enterprise.promotion.linktype.promotionBuildResult.promotionBuildResult",
    "com.ibm.team.enterprise.promotion.linktype.promotionDefinition.promotionDefinition",
    "com.ibm.team.enterprise.promotion.linktype.resultWorkItem.promoted",
];

/// A mutable property multimap over the statements about one subject.
///
/// # Invariants
///
/// - Every statement in [`Resource::statements`] has this resource as its subject
/// - [`Resource::set`] replaces all previous values of the property
#[derive(Debug, Clone)]
pub struct Resource {
    id: NamedOrBlankNode,
    statements: Graph,
    etag: Option<String>,
}

impl Resource {
    /// Create an empty resource identified by `uri`
    pub fn new(uri: &str) -> Result<Self> {
        Ok(Resource {
            id: NamedNode::new(uri)?.into(),
            statements: Graph::new(),
            etag: None,
        })
    }

    /// Create an empty resource identified by a fresh blank node
    pub fn blank() -> Self {
        Resource {
            id: BlankNode::default().into(),
            statements: Graph::new(),
            etag: None,
        }
    }

    /// Build the resource for `uri` from a parsed document, keeping only its own statements
    pub fn from_graph(uri: &str, document: &Graph, etag: Option<String>) -> Result<Self> {
        let id = NamedNode::new(uri)?;
        let mut resource = Resource {
            statements: slice_subject(document, id.as_ref()),
            id: id.into(),
            etag,
        };
        resource.strip_unserializable();
        Ok(resource)
    }

    fn strip_unserializable(&mut self) {
        let predicates = UNSERIALIZABLE_PREDICATES
            .iter()
            .map(|local| RTC_EXT.term(local))
            .chain(UNSERIALIZABLE_RTC_CM_PREDICATES.iter().map(|local| RTC_CM.term(local)));
        for predicate in predicates {
            self.remove_property(&predicate);
        }
    }

    fn subject(&self) -> SubjectRef<'_> {
        match &self.id {
            NamedOrBlankNode::NamedNode(node) => node.as_ref().into(),
            NamedOrBlankNode::BlankNode(node) => node.as_ref().into(),
        }
    }

    /// URI of this resource (`_:id` for blank resources)
    pub fn uri(&self) -> String {
        match &self.id {
            NamedOrBlankNode::NamedNode(node) => node.as_str().to_string(),
            NamedOrBlankNode::BlankNode(node) => node.to_string(),
        }
    }

    /// Entity tag of the representation this resource was read from
    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    /// The statements about this resource
    pub fn statements(&self) -> &Graph {
        &self.statements
    }

    /// Get the values of `predicate`: `None` if absent, a single value, or several.
    pub fn get(&self, predicate: &str) -> Option<PropertyValue> {
        let values = objects(&self.statements, self.subject(), predicate)
            .into_iter()
            .map(Value::from_term)
            .collect();
        PropertyValue::from_values(values)
    }

    /// Replace every value of `predicate` with `value`
    pub fn set(&mut self, predicate: &str, value: impl Into<PropertyValue>) -> Result<()> {
        let predicate_node = NamedNode::new(predicate)?;
        let value: PropertyValue = value.into();
        let terms = value
            .values()
            .iter()
            .map(Value::to_term)
            .collect::<Result<Vec<_>>>()?;

        self.remove_property(predicate);
        let subject: Subject = match &self.id {
            NamedOrBlankNode::NamedNode(node) => node.clone().into(),
            NamedOrBlankNode::BlankNode(node) => node.clone().into(),
        };
        for term in terms {
            self.statements
                .insert(&Triple::new(subject.clone(), predicate_node.clone(), term));
        }
        Ok(())
    }

    /// Remove every value of `predicate`
    pub fn remove_property(&mut self, predicate: &str) {
        let matching: Vec<Triple> = self
            .statements
            .triples_for_subject(self.subject())
            .filter(|t| t.predicate.as_str() == predicate)
            .map(|t| t.into_owned())
            .collect();
        for triple in &matching {
            self.statements.remove(triple);
        }
    }

    /// Snapshot of every property, repeated predicates collapsed into [`PropertyValue::Multiple`]
    pub fn get_properties(&self) -> BTreeMap<String, PropertyValue> {
        let mut grouped: BTreeMap<String, Vec<Value>> = BTreeMap::new();
        for triple in self.statements.triples_for_subject(self.subject()) {
            grouped
                .entry(triple.predicate.as_str().to_string())
                .or_default()
                .push(Value::from_term(triple.object));
        }
        grouped
            .into_iter()
            .filter_map(|(p, values)| PropertyValue::from_values(values).map(|v| (p, v)))
            .collect()
    }

    /// Predicates whose object is a link to another resource rather than a literal
    pub fn get_object_properties(&self) -> BTreeSet<String> {
        self.statements
            .triples_for_subject(self.subject())
            .filter(|t| matches!(t.object, TermRef::NamedNode(_)))
            .map(|t| t.predicate.as_str().to_string())
            .collect()
    }

    /// Alias of [`Resource::get_object_properties`]
    pub fn get_link_types(&self) -> BTreeSet<String> {
        self.get_object_properties()
    }

    /// `dcterms:identifier`
    pub fn get_identifier(&self) -> Option<PropertyValue> {
        self.get(&DCTERMS.term("identifier"))
    }

    /// First `dcterms:title`
    pub fn get_title(&self) -> Option<String> {
        self.first(&DCTERMS.term("title"))
    }

    /// `oslc:shortTitle`
    pub fn get_short_title(&self) -> Option<PropertyValue> {
        self.get(&OSLC.term("shortTitle"))
    }

    /// First `dcterms:description`
    pub fn get_description(&self) -> Option<String> {
        self.first(&DCTERMS.term("description"))
    }

    /// Replace `dcterms:title`
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.set(&DCTERMS.term("title"), title)
    }

    /// Replace `dcterms:description`
    pub fn set_description(&mut self, description: &str) -> Result<()> {
        self.set(&DCTERMS.term("description"), description)
    }

    fn first(&self, predicate: &str) -> Option<String> {
        self.get(predicate)
            .and_then(|v| v.as_str().map(str::to_string))
    }
}

/// The outcome of reading a resource, chosen by the response's content type
#[derive(Debug, Clone)]
pub enum Representation {
    /// Full RDF representation
    Resource(Resource),
    /// OSLC compact (preview) representation
    Compact(Compact),
}

impl Representation {
    /// The underlying resource of either representation
    pub fn resource(&self) -> &Resource {
        match self {
            Representation::Resource(resource) => resource,
            Representation::Compact(compact) => compact.resource(),
        }
    }

    /// Consume into the underlying resource
    pub fn into_resource(self) -> Resource {
        match self {
            Representation::Resource(resource) => resource,
            Representation::Compact(compact) => compact.into_resource(),
        }
    }

    /// Check if this is a compact representation
    pub fn is_compact(&self) -> bool {
        matches!(self, Representation::Compact(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const URI: &str = "https://s/rm/resources/1";
    const SUBJECT: &str = "http://purl.org/dc/terms/subject";

    fn document() -> Graph {
        let body = format!(
            r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
                     xmlns:dcterms="http://purl.org/dc/terms/"
                     xmlns:oslc="http://open-services.net/ns/core#"
                     xmlns:rtc_ext="http://jazz.net/xmlns/prod/jazz/rtc/ext/1.0/">
  <rdf:Description rdf:about="{uri}">
    <dcterms:identifier>1</dcterms:identifier>
    <dcterms:title>First</dcterms:title>
    <dcterms:subject>a</dcterms:subject>
    <dcterms:subject>b</dcterms:subject>
    <oslc:serviceProvider rdf:resource="https://s/rm/sp"/>
    <rtc_ext:com.ibm.team.apt.attribute.complexity>3</rtc_ext:com.ibm.team.apt.attribute.complexity>
  </rdf:Description>
  <rdf:Description rdf:about="https://s/rm/resources/2">
    <dcterms:title>Second</dcterms:title>
  </rdf:Description>
</rdf:RDF>"#,
            uri = URI
        );
        parse_rdf_xml(&body, URI).unwrap()
    }

    fn as_set(value: PropertyValue) -> HashSet<Value> {
        value.into_values().into_iter().collect()
    }

    #[test]
    fn test_from_graph_keeps_only_own_statements() {
        let resource = Resource::from_graph(URI, &document(), Some("\"7\"".into())).unwrap();
        assert_eq!(resource.uri(), URI);
        assert_eq!(resource.etag(), Some("\"7\""));
        assert_eq!(resource.statements().len(), 5);
        assert_eq!(resource.get_title().as_deref(), Some("First"));
    }

    #[test]
    fn test_unserializable_predicates_dropped() {
        let resource = Resource::from_graph(URI, &document(), None).unwrap();
        assert!(resource
            .get(&RTC_EXT.term("com.ibm.team.apt.attribute.complexity"))
            .is_none());
    }

    #[test]
    fn test_get_single_multiple_and_missing() {
        let resource = Resource::from_graph(URI, &document(), None).unwrap();
        assert_eq!(
            resource.get_identifier(),
            Some(PropertyValue::Single(Value::literal("1")))
        );
        let subjects = as_set(resource.get(SUBJECT).unwrap());
        assert_eq!(subjects, HashSet::from([Value::literal("a"), Value::literal("b")]));
        assert!(resource.get("http://purl.org/dc/terms/creator").is_none());
    }

    #[test]
    fn test_set_replaces_previous_values() {
        let mut resource = Resource::from_graph(URI, &document(), None).unwrap();

        resource.set(SUBJECT, "only").unwrap();
        assert_eq!(resource.get(SUBJECT), Some(PropertyValue::Single(Value::literal("only"))));

        let list = vec![Value::literal("x"), Value::uri("https://s/y")];
        resource.set(SUBJECT, list.clone()).unwrap();
        assert_eq!(as_set(resource.get(SUBJECT).unwrap()), list.into_iter().collect());
    }

    #[test]
    fn test_set_invalid_predicate_keeps_values() {
        let mut resource = Resource::from_graph(URI, &document(), None).unwrap();
        assert!(resource.set("not a predicate", "x").is_err());
        assert!(resource.set(SUBJECT, Value::uri("bad iri")).is_err());
        assert_eq!(resource.get(SUBJECT).unwrap().values().len(), 2);
    }

    #[test]
    fn test_remove_property() {
        let mut resource = Resource::from_graph(URI, &document(), None).unwrap();
        resource.remove_property(SUBJECT);
        assert!(resource.get(SUBJECT).is_none());
        assert_eq!(resource.get_title().as_deref(), Some("First"));
    }

    #[test]
    fn test_get_properties_and_links() {
        let resource = Resource::from_graph(URI, &document(), None).unwrap();
        let props = resource.get_properties();
        assert_eq!(props.len(), 4);
        assert!(matches!(props.get(SUBJECT), Some(PropertyValue::Multiple(v)) if v.len() == 2));

        let links = resource.get_object_properties();
        assert_eq!(
            links.into_iter().collect::<Vec<_>>(),
            vec!["http://open-services.net/ns/core#serviceProvider".to_string()]
        );
    }

    #[test]
    fn test_blank_resource() {
        let mut resource = Resource::blank();
        assert!(resource.uri().starts_with("_:"));
        resource.set_description("draft").unwrap();
        assert_eq!(resource.get_description().as_deref(), Some("draft"));
        assert!(resource.get_short_title().is_none());
    }
}
