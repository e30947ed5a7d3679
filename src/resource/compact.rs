//! OSLC compact representation, used for resource previews.

use super::{as_subject, object, term_value, PropertyValue, Resource};
use crate::error::Result;
use crate::protocol::namespaces::OSLC;
use oxrdf::{Graph, NamedNodeRef};

/// Dimensions and location of a preview document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// URI of the preview document
    pub document: Option<String>,
    /// Suggested height, e.g. `"20em"`
    pub hint_height: Option<String>,
    /// Suggested width
    pub hint_width: Option<String>,
}

/// Preview-only view of a resource read as `application/x-oslc-compact+xml`.
///
/// Previews are nested (usually blank) nodes, so the document graph is kept next to the
/// resource's own statements.
#[derive(Debug, Clone)]
pub struct Compact {
    resource: Resource,
    document: Graph,
}

impl Compact {
    /// Build the compact view of `uri` from its parsed document
    pub fn from_graph(uri: &str, document: Graph, etag: Option<String>) -> Result<Self> {
        Ok(Compact {
            resource: Resource::from_graph(uri, &document, etag)?,
            document,
        })
    }

    /// The resource's own statements
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Consume into the resource
    pub fn into_resource(self) -> Resource {
        self.resource
    }

    /// `oslc:icon`
    pub fn icon(&self) -> Option<PropertyValue> {
        self.resource.get(&OSLC.term("icon"))
    }

    /// `oslc:iconTitle`
    pub fn icon_title(&self) -> Option<PropertyValue> {
        self.resource.get(&OSLC.term("iconTitle"))
    }

    /// `oslc:iconSrcSet`
    pub fn icon_src_set(&self) -> Option<PropertyValue> {
        self.resource.get(&OSLC.term("iconSrcSet"))
    }

    /// `oslc:smallPreview`
    pub fn small_preview(&self) -> Option<Preview> {
        self.preview(&OSLC.term("smallPreview"))
    }

    /// `oslc:largePreview`
    pub fn large_preview(&self) -> Option<Preview> {
        self.preview(&OSLC.term("largePreview"))
    }

    fn preview(&self, predicate: &str) -> Option<Preview> {
        let uri = self.resource.uri();
        let subject = NamedNodeRef::new_unchecked(&uri);
        let node = as_subject(object(&self.document, subject, predicate)?)?;

        let hint = |local: &str| {
            let iri = OSLC.term(local);
            object(&self.document, node, &iri).map(term_value)
        };
        Some(Preview {
            document: hint("document"),
            hint_height: hint("hintHeight"),
            hint_width: hint("hintWidth"),
        })
    }
}
