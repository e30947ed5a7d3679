//! The session facade tying discovery, queries and reads together.
//!
//! [`OslcServer`] holds the discovery state of one session. Its fields form a strict chain:
//! the catalog is only set by a successful [`OslcServer::connect`], the service provider only
//! by a successful [`OslcServer::use_service_provider`], which in turn needs the catalog.
//!
//! ```text
//! new ──▶ connect(catalog predicate) ──▶ use_service_provider(title) ──▶ query / read_by_id
//!                                                                     └─▶ get_jazz_project_area_id
//! ```
//!
//! [`OslcServer::read`] and [`OslcServer::query`] only need a connected transport.

use crate::client::{ClientConfig, OslcClient, RequestKind};
use crate::discovery::{RootServices, ServiceProvider, ServiceProviderCatalog};
use crate::error::{OslcError, Result};
use crate::protocol::constants::ROOT_SERVICES_PATH;
use crate::protocol::is_compact_media_type;
use crate::protocol::namespaces::{prefix_declarations, RDFS};
use crate::query::run_query;
use crate::resource::{parse_rdf_xml, Compact, Representation, Resource};
use crate::types::{OslcResponse, QueryOptions, QueryResponse, ServiceProviderDetails};
use oxrdf::Graph;

/// Map a non-success status of a discovery or read GET to an error
fn status_error(status: u16, url: &str) -> OslcError {
    match status {
        401 => OslcError::Unauthorized(format!("401 : Unauthorized while requesting: {}", url)),
        404 => OslcError::NotFound(format!("Resource not found: {}", url)),
        status => OslcError::Http {
            status,
            url: url.to_string(),
        },
    }
}

/// `oslc.where` clause matching `dcterms:identifier` against `id` as a quoted string literal
fn identifier_clause(id: &str) -> String {
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("dcterms:identifier=\"{}\"", escaped)
}

/// An OSLC server session.
///
/// # Examples
///
/// ```ignore
/// use oslc_client::{ClientConfig, OslcServer, QueryOptions};
/// use oslc_client::protocol::namespaces::{OSLC_RM, OSLC_RM10, RDFS};
///
/// #[tokio::main]
/// async fn main() -> oslc_client::Result<()> {
///     let mut server = OslcServer::new(
///         "https://jazz.example/rm",
///         ClientConfig::with_credentials("alice", "secret"),
///     )?;
///     server.connect(&OSLC_RM10.term("rmServiceProviders")).await?;
///     server.use_service_provider("JKE Banking (Requirements Management)").await?;
///
///     let from = server.query_base(&OSLC_RM.term("Requirement"))?;
///     let results = server
///         .query(&QueryOptions::new(from, RDFS.term("member")).with_select("dcterms:title"))
///         .await?;
///     println!("{} requirements", results.resources.len());
///     Ok(())
/// }
/// ```
pub struct OslcServer {
    server_uri: String,
    client: OslcClient,
    root_services: Option<RootServices>,
    service_provider_catalog: Option<ServiceProviderCatalog>,
    service_provider_title: Option<String>,
    service_provider: Option<ServiceProvider>,
}

impl OslcServer {
    /// Create a session for the application rooted at `server_uri` (e.g. `https://host/rm`)
    pub fn new(server_uri: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let server_uri = server_uri.into().trim_end_matches('/').to_string();
        Ok(OslcServer {
            server_uri,
            client: OslcClient::new(config)?,
            root_services: None,
            service_provider_catalog: None,
            service_provider_title: None,
            service_provider: None,
        })
    }

    /// Resolve the service provider catalog advertised under `catalog_predicate` in the
    /// server's root services document, and load it.
    ///
    /// # Errors
    ///
    /// [`OslcError::NotFound`] if the root services document has no such catalog link. On any
    /// error the previous discovery state is left untouched; on success the active service
    /// provider is cleared.
    pub async fn connect(&mut self, catalog_predicate: &str) -> Result<()> {
        let root_uri = format!("{}/{}", self.server_uri, ROOT_SERVICES_PATH);
        let (_, graph) = self.fetch_document(&root_uri).await?;
        let root_services = RootServices::from_graph(&root_uri, &graph)?;

        let catalog_uri = root_services
            .service_provider_catalog_uri(catalog_predicate)
            .ok_or_else(|| {
                OslcError::NotFound("Service Provider Catalog URI could not be resolved".into())
            })?;

        let (_, graph) = self.fetch_document(&catalog_uri).await?;
        let catalog = ServiceProviderCatalog::from_graph(&catalog_uri, graph)?;

        // a new catalog invalidates the provider selected from the previous one
        self.root_services = Some(root_services);
        self.service_provider_catalog = Some(catalog);
        self.service_provider = None;
        self.service_provider_title = None;
        if self.client.config().enable_logging {
            tracing::info!("Connected to {} (catalog {})", self.server_uri, catalog_uri);
        }
        Ok(())
    }

    /// Make the service provider titled `title` the active one.
    ///
    /// # Errors
    ///
    /// - [`OslcError::InvalidState`] before a successful [`OslcServer::connect`]
    /// - [`OslcError::NotFound`] if the catalog lists no provider with that title
    pub async fn use_service_provider(&mut self, title: &str) -> Result<()> {
        let catalog = self.service_provider_catalog.as_ref().ok_or_else(|| {
            OslcError::InvalidState("Must connect before selecting a service provider".into())
        })?;
        let provider_uri = catalog.service_provider(title).ok_or_else(|| {
            OslcError::NotFound(format!("Service provider '{}' not found", title))
        })?;

        let (_, graph) = self.fetch_document(&provider_uri).await?;
        self.service_provider = Some(ServiceProvider::from_graph(&provider_uri, graph)?);
        self.service_provider_title = Some(title.to_string());
        if self.client.config().enable_logging {
            tracing::info!("Using service provider '{}' ({})", title, provider_uri);
        }
        Ok(())
    }

    /// Every service provider listed in the catalog
    pub fn get_service_providers_list(&self) -> Result<Vec<ServiceProviderDetails>> {
        let catalog = self.service_provider_catalog.as_ref().ok_or_else(|| {
            OslcError::InvalidState("Must connect before listing service providers".into())
        })?;
        Ok(catalog.service_providers())
    }

    /// Jazz project area identifier of the active service provider, `None` if its details
    /// link is missing or is not a project area URL
    pub fn get_jazz_project_area_id(&self) -> Result<Option<String>> {
        self.active_provider()?.project_area_id()
    }

    /// Query base of the active service provider for `resource_type`
    pub fn query_base(&self, resource_type: &str) -> Result<String> {
        self.active_provider()?.query_base(resource_type).ok_or_else(|| {
            OslcError::NotFound(format!("No query capability for {}", resource_type))
        })
    }

    /// Creation factory of the active service provider for `resource_type`
    pub fn creation_factory(&self, resource_type: &str) -> Result<String> {
        self.active_provider()?
            .creation_factory(resource_type)
            .ok_or_else(|| {
                OslcError::NotFound(format!("No creation factory for {}", resource_type))
            })
    }

    /// Run a query
    pub async fn query(&self, options: &QueryOptions) -> Result<QueryResponse> {
        if self.client.config().enable_logging {
            tracing::debug!("Querying {}", options.from);
        }
        run_query(&self.client, options).await
    }

    /// Read `uri`. A compact response yields [`Representation::Compact`]; anything else a full
    /// resource carrying the response's `ETag`.
    pub async fn read(&self, uri: &str) -> Result<Representation> {
        let (response, graph) = self.fetch_document(uri).await?;
        let etag = response.etag().map(str::to_string);
        let compact = response
            .content_type()
            .map(|ct| is_compact_media_type(&ct))
            .unwrap_or(false);

        if compact {
            Ok(Representation::Compact(Compact::from_graph(uri, graph, etag)?))
        } else {
            Ok(Representation::Resource(Resource::from_graph(uri, &graph, etag)?))
        }
    }

    /// Find the resource of `resource_type` whose `dcterms:identifier` is `id` and read it.
    ///
    /// Members are collected through `what`, `rdfs:member` by default.
    ///
    /// # Errors
    ///
    /// [`OslcError::NotFound`] if there is no query capability for the type, or no match.
    pub async fn read_by_id(
        &self,
        resource_type: &str,
        id: &str,
        what: Option<&str>,
    ) -> Result<Representation> {
        let from = self.query_base(resource_type)?;
        let what = what.map(str::to_string).unwrap_or_else(|| RDFS.term("member"));
        let options = QueryOptions::new(from, what)
            .with_prefix(prefix_declarations(&["dcterms"]))
            .with_select("*")
            .with_where(identifier_clause(id));

        let results = self.query(&options).await?;
        let first = results.resources.first().ok_or_else(|| {
            OslcError::NotFound(format!(
                "No {} resource with identifier {}",
                resource_type, id
            ))
        })?;
        if self.client.config().enable_logging && results.resources.len() > 1 {
            tracing::warn!(
                "{} resources match identifier {}, reading the first",
                results.resources.len(),
                id
            );
        }
        self.read(&first.uri()).await
    }

    fn active_provider(&self) -> Result<&ServiceProvider> {
        self.service_provider.as_ref().ok_or_else(|| {
            OslcError::InvalidState("Must select a service provider first".into())
        })
    }

    /// GET an RDF document and parse it against its own URI
    async fn fetch_document(&self, uri: &str) -> Result<(OslcResponse, Graph)> {
        let response = self.client.get(uri, RequestKind::Oslc).await?;
        if !response.is_success() {
            return Err(status_error(response.status, uri));
        }
        let graph = parse_rdf_xml(&response.text(), uri)?;
        Ok((response, graph))
    }

    /// Server URI, without trailing slash
    pub fn server_uri(&self) -> &str {
        &self.server_uri
    }

    /// The underlying transport
    pub fn client(&self) -> &OslcClient {
        &self.client
    }

    /// The root services document, after [`OslcServer::connect`]
    pub fn root_services(&self) -> Option<&RootServices> {
        self.root_services.as_ref()
    }

    /// The service provider catalog, after [`OslcServer::connect`]
    pub fn service_provider_catalog(&self) -> Option<&ServiceProviderCatalog> {
        self.service_provider_catalog.as_ref()
    }

    /// Title passed to the last successful [`OslcServer::use_service_provider`]
    pub fn service_provider_title(&self) -> Option<&str> {
        self.service_provider_title.as_deref()
    }

    /// The active service provider
    pub fn service_provider(&self) -> Option<&ServiceProvider> {
        self.service_provider.as_ref()
    }
}
