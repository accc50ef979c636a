//! The pagination loop

use super::types::{strip_empty, FetchPage, IterationState, Page, CURSOR_PARAM};
use crate::error::Result;
use crate::http::RequestConfig;
use futures::stream::{self, Stream};
use std::pin::Pin;
use tracing::debug;

/// Boxed lazy sequence of pages
///
/// A failed fetch appears as one `Err` element followed by end-of-stream;
/// it is never retried and never panics across the stream boundary.
pub type PageStream = Pin<Box<dyn Stream<Item = Result<Page>> + Send>>;

/// Single-pass cursor pagination over a [`FetchPage`] capability.
///
/// Owns its [`IterationState`] exclusively; a new traversal requires a new
/// fetcher, which restarts from the cursorless initial request. Steps are
/// strictly sequential: the next fetch is not issued until the previous
/// one has resolved.
pub struct PagedFetcher<F> {
    fetch: F,
    initial: RequestConfig,
    state: IterationState,
}

impl<F: FetchPage> PagedFetcher<F> {
    /// Create a fetcher from a fetch capability and the caller's initial
    /// request (cursor excluded; the fetcher injects it).
    pub fn new(fetch: F, initial: RequestConfig) -> Self {
        Self {
            fetch,
            initial,
            state: IterationState::new(),
        }
    }

    /// Current iteration state
    pub fn state(&self) -> &IterationState {
        &self.state
    }

    /// Perform one fetch-and-update step.
    ///
    /// Returns `None` once the sequence is exhausted. A fetch failure
    /// yields `Some(Err(_))` exactly once and marks the sequence finished;
    /// the capability is not invoked again afterwards.
    pub async fn next_page(&mut self) -> Option<Result<Page>> {
        if !self.state.has_more {
            return None;
        }

        let mut request = self.initial.clone();
        if let Some(cursor) = &self.state.cursor {
            request.query.retain(|(key, _)| key != CURSOR_PARAM);
            request.query.push((CURSOR_PARAM.to_string(), cursor.clone()));
        }
        let request = strip_empty(request);

        let outcome = self.fetch.fetch_page(request).await;
        match outcome.and_then(|envelope| envelope.into_data()) {
            Ok(data) => {
                let page = Page::from_data(data);
                self.state.advance(&page);
                debug!(
                    has_more = page.has_more,
                    items = page.items().len(),
                    "fetched page"
                );
                Some(Ok(page))
            }
            Err(err) => {
                // Swallow-and-sentinel: surface the failure as a data
                // value, end the sequence, never retry.
                self.state.finish();
                Some(Err(err))
            }
        }
    }

    /// Drive the whole sequence eagerly, collecting pages.
    ///
    /// Stops at the first failure and returns it; pages fetched before the
    /// failure are lost to the caller, so prefer [`Self::into_stream`]
    /// when partial results matter.
    pub async fn collect_pages(mut self) -> Result<Vec<Page>> {
        let mut pages = Vec::new();
        while let Some(step) = self.next_page().await {
            pages.push(step?);
        }
        Ok(pages)
    }

    /// Convert into a lazy [`PageStream`]
    pub fn into_stream(self) -> PageStream
    where
        F: 'static,
    {
        Box::pin(stream::unfold(self, |mut fetcher| async move {
            fetcher
                .next_page()
                .await
                .map(|step| (step, fetcher))
        }))
    }
}

impl<F> std::fmt::Debug for PagedFetcher<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedFetcher")
            .field("initial", &self.initial)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Collect every item across all pages of a stream, stopping at the first
/// failure.
pub async fn collect_items(mut stream: PageStream) -> Result<Vec<crate::types::JsonValue>> {
    use futures::StreamExt;

    let mut items = Vec::new();
    while let Some(step) = stream.next().await {
        let page = step?;
        items.extend(page.items().iter().cloned());
    }
    Ok(items)
}
