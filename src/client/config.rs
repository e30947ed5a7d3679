//! Transport configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Configuration of the authenticating transport.
///
/// # Examples
///
/// ```
/// use oslc_client::client::ClientConfig;
///
/// let config = ClientConfig {
///     proxy_url: "http://proxy.internal:3128".into(),
///     ..ClientConfig::with_credentials("alice", "secret")
/// };
/// assert_eq!(config.username, "alice");
/// assert!(config.accept_invalid_certs);
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// User name for form and basic authentication
    pub username: String,
    /// Password for form and basic authentication
    pub password: String,
    /// Proxy for every request; empty means a direct connection
    pub proxy_url: String,
    /// Local address outgoing connections bind to
    pub local_address: Option<IpAddr>,
    /// How long a connection may stay idle while reading a response before the request
    /// fails, in milliseconds
    pub read_timeout_ms: u64,
    /// How long an idle pooled connection is kept alive, in seconds
    pub pool_idle_timeout_secs: u64,
    /// Maximum idle connections kept per host
    pub max_idle_connections: usize,
    /// Skip TLS certificate validation. Lifecycle servers commonly run with self-signed or
    /// internal CA certificates, so this is on by default.
    pub accept_invalid_certs: bool,
    /// Emit tracing events for requests and authentication handshakes
    pub enable_logging: bool,
}

impl ClientConfig {
    /// Default configuration with the given credentials
    pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        ClientConfig {
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            username: String::new(),
            password: String::new(),
            proxy_url: String::new(),
            local_address: None,
            read_timeout_ms: 180_000,
            pool_idle_timeout_secs: 90,
            max_idle_connections: 32,
            accept_invalid_certs: true,
            enable_logging: true,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("proxy_url", &self.proxy_url)
            .field("local_address", &self.local_address)
            .field("read_timeout_ms", &self.read_timeout_ms)
            .field("pool_idle_timeout_secs", &self.pool_idle_timeout_secs)
            .field("max_idle_connections", &self.max_idle_connections)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("enable_logging", &self.enable_logging)
            .finish()
    }
}
