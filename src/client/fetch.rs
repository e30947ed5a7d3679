//! The authenticating HTTP transport.
//!
//! [`OslcClient`] performs GETs against lifecycle servers and transparently answers the two
//! authentication challenges they use:
//!
//! 1. **Form challenge**: the response carries
//!    `x-com-ibm-team-repository-web-auth-msg: authrequired`. The client POSTs the
//!    credentials to `{origin}/{context-root}/auth/authrequired/j_security_check`; an
//!    `authfailed` answer is an [`OslcError::Unauthorized`], anything else stores the session
//!    cookie and the original GET is issued once more.
//! 2. **Basic challenge**: the response carries `WWW-Authenticate`. The GET is issued once more
//!    with basic credentials.
//!
//! A GET is retried at most once. HTTP error statuses are returned as responses, never as
//! errors; only transport failures and rejected logins fail.
//!
//! # Examples
//!
//! ```ignore
//! use oslc_client::client::{ClientConfig, OslcClient, RequestKind};
//!
//! #[tokio::main]
//! async fn main() -> oslc_client::Result<()> {
//!     let client = OslcClient::new(ClientConfig::with_credentials("alice", "secret"))?;
//!     let response = client.get("https://jazz.example/rm/rootservices", RequestKind::Oslc).await?;
//!     println!("Status: {}", response.status);
//!     Ok(())
//! }
//! ```

use crate::client::config::ClientConfig;
use crate::client::headers::{auth_message, form_login_headers, RequestKind};
use crate::client::utils::{form_login_body, form_login_url};
use crate::error::{OslcError, Result};
use crate::protocol::constants::{auth, headers};
use crate::protocol::header_map_to_btree;
use crate::types::{OslcResponse, ResponseBody};
use reqwest::cookie::Jar;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// HTTP client that keeps a cookie session and answers authentication challenges.
///
/// Cloning is cheap: clones share the connection pool, the cookie jar and the
/// authentication lock.
///
/// # Concurrency
///
/// Authentication handshakes are serialized. Each GET records the session generation
/// before it is sent; when it then hits a form challenge and acquires the lock after another
/// task already logged in, it skips the login POST and only re-issues its GET.
#[derive(Clone)]
pub struct OslcClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
    cookies: Arc<Jar>,
    auth_lock: Arc<Mutex<()>>,
    session_generation: Arc<AtomicU64>,
}

impl OslcClient {
    /// Create a client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let cookies = Arc::new(Jar::default());
        let mut builder = reqwest::Client::builder()
            .cookie_provider(cookies.clone())
            .read_timeout(Duration::from_millis(config.read_timeout_ms))
            .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_secs))
            .pool_max_idle_per_host(config.max_idle_connections)
            .tcp_keepalive(Duration::from_secs(1))
            .danger_accept_invalid_certs(config.accept_invalid_certs);

        if !config.proxy_url.is_empty() {
            builder = builder.proxy(reqwest::Proxy::all(&config.proxy_url)?);
        }
        if let Some(address) = config.local_address {
            builder = builder.local_address(address);
        }

        Ok(OslcClient {
            client: builder.build()?,
            config: Arc::new(config),
            cookies,
            auth_lock: Arc::new(Mutex::new(())),
            session_generation: Arc::new(AtomicU64::new(0)),
        })
    }

    /// GET `url` as the given kind of request, answering authentication challenges.
    ///
    /// # Errors
    ///
    /// - [`OslcError::Unauthorized`] if the form login is rejected, or the retried GET is
    ///   challenged again
    /// - [`OslcError::Internal`] on transport failures or a malformed URL
    pub async fn get(&self, url: &str, kind: RequestKind) -> Result<OslcResponse> {
        let generation = self.session_generation.load(Ordering::Acquire);
        let response = self.send_get(url, kind, false).await?;

        let response = if auth_message(response.headers()) == Some(auth::AUTH_REQUIRED) {
            if self.config.enable_logging {
                tracing::warn!("Form authentication required for {}", url);
            }
            self.form_authenticate(url, kind, generation).await?
        } else if response.headers().contains_key(headers::WWW_AUTHENTICATE) {
            if self.config.enable_logging {
                tracing::warn!("Authentication challenge for {}, retrying with basic credentials", url);
            }
            self.send_get(url, kind, true).await?
        } else {
            response
        };

        self.read_response(response, kind).await
    }

    /// Log in through the form endpoint (unless a concurrent task already did) and re-issue the GET
    async fn form_authenticate(
        &self,
        url: &str,
        kind: RequestKind,
        generation: u64,
    ) -> Result<reqwest::Response> {
        let _guard = self.auth_lock.lock().await;

        if self.session_generation.load(Ordering::Acquire) == generation {
            let login = self.form_login(url).await?;
            if auth_message(login.headers()) == Some(auth::AUTH_FAILED) {
                if self.config.enable_logging {
                    tracing::warn!("Form authentication failed for {}", url);
                }
                return Err(OslcError::Unauthorized(format!(
                    "401 : Authentication failed while requesting: {}",
                    url
                )));
            }
            self.session_generation.fetch_add(1, Ordering::AcqRel);
        } else if self.config.enable_logging {
            tracing::debug!("Session already refreshed, skipping form login for {}", url);
        }

        let retried = self.send_get(url, kind, false).await?;
        if auth_message(retried.headers()) == Some(auth::AUTH_REQUIRED) {
            return Err(OslcError::Unauthorized(format!(
                "401 : Authentication still required after login while requesting: {}",
                url
            )));
        }
        Ok(retried)
    }

    /// POST the credentials to the form login endpoint derived from `url`
    async fn form_login(&self, url: &str) -> Result<reqwest::Response> {
        let login_url = form_login_url(url)?;
        if self.config.enable_logging {
            tracing::debug!("POST {}", login_url);
        }
        let response = self
            .client
            .post(&login_url)
            .headers(form_login_headers())
            .body(form_login_body(&self.config.username, &self.config.password))
            .send()
            .await?;
        Ok(response)
    }

    async fn send_get(&self, url: &str, kind: RequestKind, basic: bool) -> Result<reqwest::Response> {
        if self.config.enable_logging {
            tracing::debug!("GET {} ({:?}{})", url, kind, if basic { ", basic auth" } else { "" });
        }
        let mut request = self.client.get(url).headers(kind.headers());
        if basic {
            request = request.basic_auth(&self.config.username, Some(&self.config.password));
        }
        Ok(request.send().await?)
    }

    async fn read_response(
        &self,
        response: reqwest::Response,
        kind: RequestKind,
    ) -> Result<OslcResponse> {
        let url = response.url().to_string();
        let status = response.status().as_u16();
        let headers = header_map_to_btree(response.headers());
        let body = if kind.is_binary() {
            ResponseBody::Binary(response.bytes().await?)
        } else {
            ResponseBody::Text(response.text().await?)
        };
        Ok(OslcResponse {
            url,
            status,
            headers,
            body,
        })
    }

    /// The cookie jar holding the session; shared by every request of this client
    pub fn cookies(&self) -> &Arc<Jar> {
        &self.cookies
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
