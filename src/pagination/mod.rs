//! Cursor pagination
//!
//! Turns a single-page fetch capability into a lazy, single-pass sequence
//! of pages.
//!
//! # Overview
//!
//! Every list endpoint on the platform paginates the same way: the response
//! `data` object carries `has_more` plus a continuation token
//! (`page_token`, aliased by some endpoints as `next_page_token`), and the
//! next request resends the caller's initial parameters with the token in
//! the `page_token` query parameter. [`PagedFetcher`] implements that loop
//! once; endpoint wrappers only supply a [`FetchPage`] implementation bound
//! to their URL and verb.
//!
//! Fetch failures do not propagate as panics or early returns from the
//! stream: the sequence yields a single `Err` element and then ends. A
//! consumer therefore sees either all pages followed by termination, or a
//! prefix of pages, one `Err`, and termination.

mod fetcher;
mod types;

pub use fetcher::{collect_items, PageStream, PagedFetcher};
pub use types::{FetchFn, FetchPage, IterationState, Page, CURSOR_PARAM};
