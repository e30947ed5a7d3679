use crate::error::Result;
use crate::protocol::namespaces::{DCTERMS, OSLC};
use crate::resource::{object, term_value, Resource};
use crate::types::ServiceProviderDetails;
use oxrdf::vocab::rdf;
use oxrdf::{Graph, LiteralRef, NamedNodeRef, SubjectRef, TermRef};

/// A service provider catalog, kept with its whole document so nested providers can be searched
#[derive(Debug, Clone)]
pub struct ServiceProviderCatalog {
    resource: Resource,
    document: Graph,
}

impl ServiceProviderCatalog {
    /// Build from the parsed document served at `uri`
    pub fn from_graph(uri: &str, document: Graph) -> Result<Self> {
        Ok(ServiceProviderCatalog {
            resource: Resource::from_graph(uri, &document, None)?,
            document,
        })
    }

    /// The catalog resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// URI of the service provider titled `title`.
    ///
    /// Jazz servers publish titles as XML literals, so those are matched first; plain
    /// literals are the fallback.
    pub fn service_provider(&self, title: &str) -> Option<String> {
        let title_iri = DCTERMS.term("title");
        let title_predicate = NamedNodeRef::new_unchecked(&title_iri);
        let candidates = [
            LiteralRef::new_typed_literal(title, rdf::XML_LITERAL),
            LiteralRef::new_simple_literal(title),
        ];
        candidates.into_iter().find_map(|literal| {
            self.document
                .subjects_for_predicate_object(title_predicate, literal)
                .find_map(|subject| match subject {
                    SubjectRef::NamedNode(node) => Some(node.as_str().to_string()),
                    _ => None,
                })
        })
    }

    /// Every service provider listed in the catalog.
    ///
    /// Entries without a title or a details link are skipped.
    pub fn service_providers(&self) -> Vec<ServiceProviderDetails> {
        let title = DCTERMS.term("title");
        let details = OSLC.term("details");
        let mut seen = Vec::new();
        let mut providers = Vec::new();

        let entry_iri = OSLC.term("serviceProvider");
        let entries = self
            .document
            .triples_for_predicate(NamedNodeRef::new_unchecked(&entry_iri));
        for triple in entries {
            let TermRef::NamedNode(provider) = triple.object else {
                continue;
            };
            if seen.contains(&provider) {
                continue;
            }
            seen.push(provider);

            let name = object(&self.document, provider, &title).map(term_value);
            let details_url = object(&self.document, provider, &details).map(term_value);
            if let (Some(name), Some(details_url)) = (name, details_url) {
                providers.push(ServiceProviderDetails {
                    services_url: provider.as_str().to_string(),
                    service_provider_name: name,
                    details_url,
                });
            }
        }
        providers
    }
}
