//! Client error types.
//!
//! Every terminal outcome of a request maps to exactly one [`ApiError`]
//! variant, so callers can render a distinct message per failure kind
//! instead of matching on a generic error string. Each variant carries
//! the HTTP status it represents, available through [`ApiError::status`].

use std::time::Duration;
use thiserror::Error;

/// Error type for Recipez API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request parameters were rejected by the API (HTTP 400).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Bearer token missing, invalid, or expired (HTTP 401).
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Authenticated but lacking the required scope (HTTP 403).
    #[error("Insufficient permissions: {0}")]
    Forbidden(String),

    /// Requested resource does not exist (HTTP 404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Request conflicts with existing state, e.g. a duplicate name (HTTP 409).
    #[error("Resource conflict: {0}")]
    Conflict(String),

    /// Rate limit exceeded (HTTP 429).
    #[error("Rate limited: {message}")]
    RateLimited {
        /// Error message from the API.
        message: String,
        /// Seconds until the limit resets, when the server said so.
        retry_after: Option<u64>,
    },

    /// Server error after retries were exhausted, or a network failure
    /// that survived the fast retry (HTTP 5xx).
    #[error("Server error: {0}")]
    Internal(String),

    /// The request timed out at the transport level. Carries the
    /// timeout that was in effect.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// A status code outside the mapped set, below 500.
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// Raw HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// A 2xx response carried a body that was not valid JSON.
    #[error("Invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Maps an HTTP status code to the matching error variant.
    ///
    /// Specifically-mapped codes get their own variant; anything else
    /// in 500-599 becomes [`ApiError::Internal`], and remaining codes
    /// fall back to [`ApiError::UnexpectedStatus`].
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => Self::Validation(message),
            401 => Self::Auth(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            429 => Self::RateLimited {
                message,
                retry_after: None,
            },
            500..=599 => Self::Internal(message),
            _ => Self::UnexpectedStatus { status, message },
        }
    }

    /// Creates a rate-limit error with a retry-after hint.
    pub fn rate_limited(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Self::RateLimited {
            message: message.into(),
            retry_after,
        }
    }

    /// Returns the HTTP status analogue this error carries.
    pub fn status(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Auth(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::RateLimited { .. } => 429,
            Self::Internal(_) | Self::Json(_) | Self::Config(_) => 500,
            Self::Timeout(_) => 504,
            Self::UnexpectedStatus { status, .. } => *status,
        }
    }

    /// Returns the retry-after hint, if this is a rate-limit error
    /// and the server provided one.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
