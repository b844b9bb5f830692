//! Resilient HTTP request executor for the Recipez API.
//!
//! This crate owns transport policy: authentication, per-request
//! timeouts, retry with backoff for server errors, a fast retry for
//! network failures, and a typed error taxonomy keyed to HTTP status
//! codes. Endpoint wrappers live in `recipez-api`; this crate only
//! knows how to get a request to the server and back reliably.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod retry;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use request::{FilePart, Method, RequestBody, RequestSpec};
pub use retry::{RetryPolicy, TimeoutPolicy};
