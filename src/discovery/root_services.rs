use crate::error::Result;
use crate::resource::{Resource, Value};
use oxrdf::Graph;

/// A Jazz root services document
#[derive(Debug, Clone)]
pub struct RootServices {
    resource: Resource,
}

impl RootServices {
    /// Build from the parsed document served at `uri`
    pub fn from_graph(uri: &str, document: &Graph) -> Result<Self> {
        Ok(RootServices {
            resource: Resource::from_graph(uri, document, None)?,
        })
    }

    /// The root services resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// URI of the service provider catalog advertised under `catalog_predicate`
    /// (e.g. `oslc_rm10:rmServiceProviders`)
    pub fn service_provider_catalog_uri(&self, catalog_predicate: &str) -> Option<String> {
        self.resource
            .get(catalog_predicate)?
            .values()
            .iter()
            .find(|v| matches!(v, Value::Resource(_)))
            .map(|v| v.as_str().to_string())
    }
}
