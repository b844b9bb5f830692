//! The request executor.
//!
//! [`ApiClient`] owns the connection pool, credentials, and the retry
//! and timeout policies, and drives every request through the same
//! state machine:
//!
//! - 2xx responses are parsed as JSON and returned.
//! - 5xx responses are retried with backoff until the attempt budget
//!   runs out, then surface as [`ApiError::Internal`].
//! - Network failures (connection refused, reset, DNS) get one fast
//!   retry; a second failure surfaces as [`ApiError::Internal`].
//! - Transport timeouts are terminal and surface as
//!   [`ApiError::Timeout`] without retrying.
//! - Everything else fails fast with the variant for its status code.

use std::time::{Duration, Instant};

use reqwest::{header, multipart, Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::request::{RequestBody, RequestSpec};
use crate::retry::{RetryPolicy, TimeoutPolicy};

/// HTTP client for the Recipez API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    retry: RetryPolicy,
    timeouts: TimeoutPolicy,
}

impl ApiClient {
    /// Creates a client with the default retry and timeout policies.
    ///
    /// Timeouts are applied per request rather than on the pool, so
    /// AI endpoints can run longer than the rest of the API. Redirects
    /// are not followed; a redirect status is reported to the caller.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("recipez-client/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            retry: RetryPolicy::default(),
            timeouts: TimeoutPolicy::default(),
        })
    }

    /// Replaces the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Replaces the timeout policy.
    pub fn with_timeout_policy(mut self, timeouts: TimeoutPolicy) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Executes a request through the retry state machine and returns
    /// the parsed JSON body.
    pub async fn request(&self, spec: &RequestSpec) -> Result<Value, ApiError> {
        let timeout = self.timeouts.timeout_for(&spec.path, spec.timeout);
        let started = Instant::now();
        let mut attempt: u32 = 0;
        let mut network_retried = false;

        loop {
            attempt += 1;
            debug!(
                method = spec.method.as_str(),
                path = %spec.path,
                attempt,
                "sending request"
            );

            let request = self.build_request(spec, timeout)?;
            match request.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();

                    if response.status().is_success() {
                        let body = Self::read_body(response, timeout).await?;
                        debug!(
                            method = spec.method.as_str(),
                            path = %spec.path,
                            status,
                            elapsed_ms = started.elapsed().as_millis() as u64,
                            "request completed"
                        );
                        return Ok(serde_json::from_str(&body)?);
                    }

                    if self.retry.is_retryable_status(status) && attempt < self.retry.max_attempts
                    {
                        let delay = self.retry.backoff_before(attempt);
                        warn!(
                            path = %spec.path,
                            status,
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            "server error, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    let retry_after = retry_after_secs(&response);
                    let body = Self::read_body(response, timeout).await?;
                    let message = extract_error_message(status, &body);
                    warn!(
                        path = %spec.path,
                        status,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "request failed"
                    );
                    return Err(if status == 429 {
                        ApiError::rate_limited(message, retry_after)
                    } else {
                        ApiError::from_status(status, message)
                    });
                }
                Err(e) => {
                    // A timeout is a signal the server is overloaded;
                    // retrying would pile on more load.
                    if e.is_timeout() {
                        warn!(
                            path = %spec.path,
                            timeout_secs = timeout.as_secs(),
                            "request timed out"
                        );
                        return Err(ApiError::Timeout(timeout));
                    }

                    if !network_retried {
                        network_retried = true;
                        // The fast retry does not consume a server-error attempt
                        attempt -= 1;
                        warn!(path = %spec.path, error = %e, "network error, retrying once");
                        tokio::time::sleep(self.retry.network_retry_delay).await;
                        continue;
                    }

                    warn!(path = %spec.path, error = %e, "network error after retry");
                    return Err(ApiError::Internal(format!("Network error: {e}")));
                }
            }
        }
    }

    /// Executes a request and deserializes the body into `T`.
    pub async fn request_typed<T: DeserializeOwned>(
        &self,
        spec: &RequestSpec,
    ) -> Result<T, ApiError> {
        let value = self.request(spec).await?;
        Ok(serde_json::from_value(value)?)
    }

    // ========================================================================
    // Convenience wrappers
    // ========================================================================

    /// Sends a GET request.
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(&RequestSpec::get(path)).await
    }

    /// Sends a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.request(&RequestSpec::post_json(path, body)).await
    }

    /// Sends a PUT request with a JSON body.
    pub async fn put(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.request(&RequestSpec::put_json(path, body)).await
    }

    /// Sends a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(&RequestSpec::delete(path)).await
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn build_request(
        &self,
        spec: &RequestSpec,
        timeout: Duration,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let url = format!("{}{}", self.config.base_url(), spec.path);
        let mut builder = self
            .http
            .request(spec.method.to_reqwest(), url)
            .bearer_auth(self.config.token())
            .timeout(timeout);

        match &spec.body {
            RequestBody::Empty => {}
            RequestBody::Json(value) => builder = builder.json(value),
            RequestBody::Multipart { fields, files } => {
                let mut form = multipart::Form::new();
                for (name, value) in fields {
                    form = form.text(name.clone(), value.clone());
                }
                for file in files {
                    let mut part = multipart::Part::bytes(file.bytes.clone())
                        .file_name(file.file_name.clone());
                    if let Some(content_type) = &file.content_type {
                        part = part.mime_str(content_type).map_err(|e| {
                            ApiError::Config(format!(
                                "invalid content type '{content_type}': {e}"
                            ))
                        })?;
                    }
                    form = form.part(file.field.clone(), part);
                }
                builder = builder.multipart(form);
            }
        }

        Ok(builder)
    }

    async fn read_body(response: Response, timeout: Duration) -> Result<String, ApiError> {
        response.text().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout(timeout)
            } else {
                ApiError::Internal(format!("failed to read response body: {e}"))
            }
        })
    }
}

/// Pulls the API's error message out of an error response body.
///
/// Error bodies follow the `{"response": {"error": "..."}}` shape; if
/// the body is not JSON or is missing that field, a generic
/// `HTTP <status>` message is used instead.
fn extract_error_message(status: u16, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| v.get("response"))
        .and_then(|r| r.get("error"))
        .and_then(|e| e.as_str())
        .map(ToString::to_string)
        .unwrap_or_else(|| format!("HTTP {status}"))
}

fn retry_after_secs(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

// ============================================================================
// Tests
// ============================================================================
