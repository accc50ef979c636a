//! Pagination types and the fetch seam
//!
//! Defines the page model, per-iterator state, and the `FetchPage`
//! capability that endpoint wrappers implement.

use crate::envelope::Envelope;
use crate::error::Result;
use crate::http::RequestConfig;
use crate::types::{JsonObject, JsonValue};
use async_trait::async_trait;
use std::future::Future;

/// Query parameter carrying the continuation cursor on requests
pub const CURSOR_PARAM: &str = "page_token";

/// Response field signalling more pages
const HAS_MORE_FIELD: &str = "has_more";

/// Response field carrying the cursor
const PAGE_TOKEN_FIELD: &str = "page_token";

/// Alias some endpoints use for the cursor field
const NEXT_PAGE_TOKEN_FIELD: &str = "next_page_token";

/// Single-page fetch capability supplied by an endpoint wrapper.
///
/// The implementation is already bound to its URL and HTTP verb; the
/// pagination loop only varies the request's cursor parameter. Logging of
/// fetch errors, timeouts, and transport concerns belong to the
/// implementation, not to the pagination loop.
#[async_trait]
pub trait FetchPage: Send + Sync {
    /// Fetch one page with the given request parameters
    async fn fetch_page(&self, request: RequestConfig) -> Result<Envelope>;
}

/// Adapter turning a plain async function or closure into a [`FetchPage`]
#[derive(Debug, Clone)]
pub struct FetchFn<F>(pub F);

#[async_trait]
impl<F, Fut> FetchPage for FetchFn<F>
where
    F: Fn(RequestConfig) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Envelope>> + Send,
{
    async fn fetch_page(&self, request: RequestConfig) -> Result<Envelope> {
        (self.0)(request).await
    }
}

/// One page of a listing
///
/// The payload is the response `data` object stripped of the three
/// pagination-control fields. Domain items are opaque JSON; this module
/// never interprets their shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// `data` minus `has_more`, `page_token`, `next_page_token`
    pub payload: JsonObject,
    /// Whether the server reported more pages
    pub has_more: bool,
    /// Selected continuation token (`page_token` wins over
    /// `next_page_token`; empty strings are treated as absent)
    pub page_token: Option<String>,
}

impl Page {
    /// Build a page from a response `data` object, extracting and removing
    /// the pagination-control fields.
    ///
    /// `has_more` is accepted only as JSON boolean `true`; any other value
    /// (missing, `false`, string, number) stops pagination. Servers that
    /// encode the flag as a string would otherwise paginate forever.
    pub fn from_data(mut data: JsonObject) -> Self {
        let has_more = data
            .remove(HAS_MORE_FIELD)
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        let primary = take_token(&mut data, PAGE_TOKEN_FIELD);
        let alias = take_token(&mut data, NEXT_PAGE_TOKEN_FIELD);
        let page_token = primary.or(alias);

        Self {
            payload: data,
            has_more,
            page_token,
        }
    }

    /// The `items` array of the payload, empty if absent
    pub fn items(&self) -> &[JsonValue] {
        self.payload
            .get("items")
            .and_then(JsonValue::as_array)
            .map_or(&[], Vec::as_slice)
    }

    /// Whether the payload carries no items
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// Remove a token field, treating non-strings and empty strings as absent
fn take_token(data: &mut JsonObject, field: &str) -> Option<String> {
    match data.remove(field) {
        Some(JsonValue::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Transient state owned by one iterator instance
#[derive(Debug, Clone)]
pub struct IterationState {
    /// Whether another page should be requested
    pub has_more: bool,
    /// Cursor captured from the previous page
    pub cursor: Option<String>,
}

impl Default for IterationState {
    fn default() -> Self {
        Self {
            has_more: true,
            cursor: None,
        }
    }
}

impl IterationState {
    /// Create the initial state (no cursor, first fetch pending)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one successful step
    pub fn advance(&mut self, page: &Page) {
        self.has_more = page.has_more;
        self.cursor = page.page_token.clone();
    }

    /// Terminate iteration
    pub fn finish(&mut self) {
        self.has_more = false;
    }
}

/// Strip request fields whose value is empty before dispatch.
///
/// Omitted optional filters must be absent on the wire, not sent as empty
/// strings. Applies to query parameters, headers, and top-level JSON body
/// fields (null or empty string).
pub(crate) fn strip_empty(mut request: RequestConfig) -> RequestConfig {
    request.query.retain(|(_, value)| !value.is_empty());
    request.headers.retain(|_, value| !value.is_empty());

    if let Some(JsonValue::Object(map)) = request.body.as_mut() {
        map.retain(|_, value| match value {
            JsonValue::Null => false,
            JsonValue::String(s) => !s.is_empty(),
            _ => true,
        });
    }

    request
}
