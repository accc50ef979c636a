//! # taskwire
//!
//! Rust client bindings for a collaboration platform's task management
//! REST API: tasks, tasklists, sections, comments, attachments, and
//! custom fields.
//!
//! ## Features
//!
//! - **Declarative endpoints**: every API operation is a row in a static
//!   catalog consumed by one generic dispatcher, not a hand-written
//!   method body
//! - **Cursor pagination**: list endpoints expose a lazy page stream that
//!   tracks the continuation token and terminates on exhaustion or error
//! - **Opaque payloads**: request and response bodies stay `serde_json`
//!   values; the crate does not pin the platform's resource schemas
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use taskwire::{Client, HttpClientConfig, RequestConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new(
//!         HttpClientConfig::builder()
//!             .base_url("https://open.example.com")
//!             .bearer_token("t-...")
//!             .build(),
//!     );
//!
//!     // One-shot call
//!     let task = client.tasks().get("task-guid").await?;
//!
//!     // Lazy pagination
//!     let mut pages = client
//!         .tasks()
//!         .list(RequestConfig::new().query("page_size", "50"))?;
//!     while let Some(page) = pages.next().await {
//!         let page = page?;
//!         for item in page.items() {
//!             // process item
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Resource handles                      │
//! │  tasks() tasklists() sections() comments() attachments() │
//! └──────────────────────────┬───────────────────────────────┘
//! ┌──────────────────────────┴───────────────────────────────┐
//! │            Client: catalog row → dispatch                │
//! │  call() → data object        list() → PageStream         │
//! └───────┬───────────────┬──────────────────┬───────────────┘
//! │  Catalog       │  Pagination      │  HTTP transport      │
//! │  name → verb,  │  PagedFetcher    │  base URL, headers,  │
//! │  path, paged?  │  cursor loop     │  envelope decoding   │
//! ```
//!
//! Pagination failure policy: a page stream never panics or short-circuits
//! mid-iteration; a failed fetch is delivered as one `Err` element and the
//! stream ends. See [`pagination`] for the full contract.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Shared HTTP transport
pub mod http;

/// Response envelope decoding
pub mod envelope;

/// Path template interpolation
pub mod template;

/// Declarative endpoint catalog
pub mod catalog;

/// Cursor pagination
pub mod pagination;

/// API client and generic dispatch
pub mod client;

/// Typed resource handles
pub mod resources;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use http::{HttpClient, HttpClientConfig, RequestConfig};
pub use pagination::{FetchFn, FetchPage, Page, PageStream, PagedFetcher};
pub use template::PathParams;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
