//! API client and generic dispatch
//!
//! `Client` turns catalog rows into HTTP calls: it renders the path
//! template, issues the request through the shared transport, and decodes
//! the `{ code, msg, data }` envelope. Paginated endpoints are bound into
//! a [`FetchPage`] capability and driven by the pagination module.

use crate::catalog::{self, Endpoint};
use crate::envelope::Envelope;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{FetchPage, PageStream, PagedFetcher};
use crate::resources::{Attachments, Comments, CustomFields, Sections, Tasklists, Tasks};
use crate::template::{self, PathParams};
use crate::types::{JsonObject, Method};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Client for the platform's task API
///
/// Cheap to clone; all clones share one transport.
#[derive(Debug, Clone)]
pub struct Client {
    http: Arc<HttpClient>,
}

impl Client {
    /// Create a client from transport configuration
    pub fn new(config: HttpClientConfig) -> Self {
        Self {
            http: Arc::new(HttpClient::with_config(config)),
        }
    }

    /// Create a client from an existing transport
    pub fn from_http(http: HttpClient) -> Self {
        Self {
            http: Arc::new(http),
        }
    }

    /// The underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Invoke a non-paginated endpoint by catalog name.
    ///
    /// Returns the envelope's `data` payload; a non-zero envelope code
    /// becomes `Error::Api`.
    pub async fn call(
        &self,
        endpoint: &str,
        params: &PathParams,
        request: RequestConfig,
    ) -> Result<JsonObject> {
        let endpoint = catalog::find(endpoint).ok_or_else(|| Error::unknown_endpoint(endpoint))?;
        self.dispatch(endpoint, params, request).await
    }

    /// Open a lazy page stream over a paginated endpoint.
    ///
    /// `request` holds the caller's static filters and page-size hint; the
    /// pagination loop injects the cursor. Each call starts a fresh
    /// traversal from the cursorless request.
    pub fn list(
        &self,
        endpoint: &str,
        params: &PathParams,
        request: RequestConfig,
    ) -> Result<PageStream> {
        let endpoint = catalog::find(endpoint).ok_or_else(|| Error::unknown_endpoint(endpoint))?;
        if !endpoint.paginated {
            return Err(Error::config(format!(
                "endpoint '{}' is not paginated",
                endpoint.name
            )));
        }

        let path = template::render(endpoint.path, params)?;
        let bound = BoundEndpoint {
            http: self.http.clone(),
            name: endpoint.name,
            method: endpoint.method,
            path,
        };
        Ok(PagedFetcher::new(bound, request).into_stream())
    }

    async fn dispatch(
        &self,
        endpoint: &'static Endpoint,
        params: &PathParams,
        request: RequestConfig,
    ) -> Result<JsonObject> {
        let path = template::render(endpoint.path, params)?;
        debug!(endpoint = endpoint.name, %path, "dispatching");

        let envelope: Envelope = self
            .http
            .request_json(endpoint.method.into(), &path, request)
            .await?;
        envelope.into_data()
    }

    // ========================================================================
    // Resource handles
    // ========================================================================

    /// Task operations
    pub fn tasks(&self) -> Tasks<'_> {
        Tasks::new(self)
    }

    /// Tasklist operations
    pub fn tasklists(&self) -> Tasklists<'_> {
        Tasklists::new(self)
    }

    /// Tasklist section operations
    pub fn sections(&self) -> Sections<'_> {
        Sections::new(self)
    }

    /// Comment operations
    pub fn comments(&self) -> Comments<'_> {
        Comments::new(self)
    }

    /// Attachment operations
    pub fn attachments(&self) -> Attachments<'_> {
        Attachments::new(self)
    }

    /// Custom field operations
    pub fn custom_fields(&self) -> CustomFields<'_> {
        CustomFields::new(self)
    }
}

/// A paginated endpoint bound to its URL and verb
///
/// Per the pagination contract, fetch errors are logged here, at the
/// wrapper, before they surface to the page stream.
struct BoundEndpoint {
    http: Arc<HttpClient>,
    name: &'static str,
    method: Method,
    path: String,
}

#[async_trait]
impl FetchPage for BoundEndpoint {
    async fn fetch_page(&self, request: RequestConfig) -> Result<Envelope> {
        let outcome: Result<Envelope> = self
            .http
            .request_json(self.method.into(), &self.path, request)
            .await;

        if let Err(ref err) = outcome {
            warn!(endpoint = self.name, path = %self.path, error = %err, "page fetch failed");
        }
        outcome
    }
}
