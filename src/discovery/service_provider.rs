use crate::error::Result;
use crate::protocol::constants::PROJECT_AREA_PATTERN;
use crate::protocol::namespaces::OSLC;
use crate::resource::{as_subject, object, objects, term_value, Resource};
use oxrdf::{Graph, NamedNodeRef, SubjectRef, TermRef};
use regex::Regex;
use url::Url;

/// The services document of one service provider (e.g. a project area)
#[derive(Debug, Clone)]
pub struct ServiceProvider {
    resource: Resource,
    document: Graph,
}

impl ServiceProvider {
    /// Build from the parsed document served at `uri`
    pub fn from_graph(uri: &str, document: Graph) -> Result<Self> {
        Ok(ServiceProvider {
            resource: Resource::from_graph(uri, &document, None)?,
            document,
        })
    }

    /// The service provider resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// `queryBase` of the first query capability declaring `resource_type` among its types
    pub fn query_base(&self, resource_type: &str) -> Option<String> {
        self.capability("queryCapability", "queryBase", |types| {
            types.contains(&resource_type)
        })
    }

    /// `creation` URI of the first creation factory declaring exactly one type, `resource_type`.
    ///
    /// Creation factories must be unambiguous about what they create, so a factory declaring
    /// several types never matches.
    pub fn creation_factory(&self, resource_type: &str) -> Option<String> {
        self.capability("creationFactory", "creation", |types| {
            types.len() == 1 && types[0] == resource_type
        })
    }

    fn capability(
        &self,
        kind: &str,
        target: &str,
        matches: impl Fn(&[&str]) -> bool,
    ) -> Option<String> {
        let uri = self.resource.uri();
        let provider = NamedNodeRef::new_unchecked(&uri);
        let (service_iri, kind_iri, type_iri, target_iri) = (
            OSLC.term("service"),
            OSLC.term(kind),
            OSLC.term("resourceType"),
            OSLC.term(target),
        );

        for service in self.nodes(provider.into(), &service_iri) {
            for capability in self.nodes(service, &kind_iri) {
                let types: Vec<&str> = objects(&self.document, capability, &type_iri)
                    .into_iter()
                    .filter_map(|t| match t {
                        TermRef::NamedNode(node) => Some(node.as_str()),
                        _ => None,
                    })
                    .collect();
                if matches(&types) {
                    return object(&self.document, capability, &target_iri).map(term_value);
                }
            }
        }
        None
    }

    fn nodes<'a>(&'a self, subject: SubjectRef<'a>, predicate: &'a str) -> Vec<SubjectRef<'a>> {
        objects(&self.document, subject, predicate)
            .into_iter()
            .filter_map(as_subject)
            .collect()
    }

    /// The `oslc:details` link of this provider
    pub fn details_url(&self) -> Option<String> {
        self.resource
            .get(&OSLC.term("details"))
            .and_then(|v| v.as_str().map(str::to_string))
    }

    /// Jazz project area identifier: the last segment of a details URL ending in
    /// `/process/project-areas/{id}`
    pub fn project_area_id(&self) -> Result<Option<String>> {
        let Some(details) = self.details_url() else {
            return Ok(None);
        };
        let url = Url::parse(&details)?;
        let pattern = Regex::new(PROJECT_AREA_PATTERN)?;
        Ok(pattern
            .captures(url.path())
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string()))
    }
}
