//! Shared HTTP transport
//!
//! A thin wrapper over reqwest that every endpoint call goes through:
//! base URL joining, default headers, per-request query/header/body
//! assembly, and response status checking. Retries, rate limiting, and
//! token lifecycle management are out of scope; callers needing them wrap
//! this client.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
