//! Protocol constants shared by the transport, discovery and query layers.

/// HTTP header names
pub mod headers {
    /// OSLC protocol version header sent with RDF requests
    pub const OSLC_CORE_VERSION: &str = "OSLC-Core-Version";

    /// Jazz form-authentication status header
    pub const JAZZ_AUTH_MSG: &str = "x-com-ibm-team-repository-web-auth-msg";

    /// Standard authentication challenge header
    pub const WWW_AUTHENTICATE: &str = "www-authenticate";

    /// Entity tag header
    pub const ETAG: &str = "etag";

    /// Content type header
    pub const CONTENT_TYPE: &str = "content-type";
}

/// Values of the Jazz form-authentication header
pub mod auth {
    /// The server wants a form login before serving the request
    pub const AUTH_REQUIRED: &str = "authrequired";

    /// The form login was rejected
    pub const AUTH_FAILED: &str = "authfailed";

    /// Path appended to the context root to reach the form login endpoint
    pub const FORM_LOGIN_PATH: &str = "auth/authrequired/j_security_check";

    /// Form field carrying the user name
    pub const USERNAME_FIELD: &str = "j_username";

    /// Form field carrying the password
    pub const PASSWORD_FIELD: &str = "j_password";
}

/// Media types
pub mod media_types {
    /// RDF/XML, the reliably available OSLC representation
    pub const RDF_XML: &str = "application/rdf+xml";

    /// Generic REST XML
    pub const XML: &str = "application/xml";

    /// Jazz REST JSON
    pub const TEXT_JSON: &str = "text/json";

    /// Accepted image formats for binary assets
    pub const IMAGES: &str = "image/jpeg,image/png";

    /// HTML, accepted from the form login endpoint
    pub const HTML: &str = "text/html";

    /// Form-encoded request bodies
    pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

    /// OSLC resource preview representation
    pub const OSLC_COMPACT: &str = "application/x-oslc-compact+xml";
}

/// OSLC query string keys, in the order they are appended to a query base
pub mod query {
    /// Enables server-side paging
    pub const PAGING: &str = "oslc.paging";

    /// Page size when paging is enabled
    pub const PAGE_SIZE: &str = "oslc.pageSize";

    /// Namespace prefix declarations
    pub const PREFIX: &str = "oslc.prefix";

    /// Properties to return
    pub const PROPERTIES: &str = "oslc.properties";

    /// Properties to select
    pub const SELECT: &str = "oslc.select";

    /// Filter expression
    pub const WHERE: &str = "oslc.where";

    /// Sort expression
    pub const ORDER_BY: &str = "oslc.orderBy";
}

/// Version string sent in the `OSLC-Core-Version` header
pub const OSLC_CORE_VERSION_2: &str = "2.0";

/// Path of the Jazz root services document, relative to the server URI
pub const ROOT_SERVICES_PATH: &str = "rootservices";

/// Path segments preceding the project area identifier in a Jazz details URL
pub const PROJECT_AREA_PATTERN: &str = r"/process/project-areas/([^/]+)/?$";
