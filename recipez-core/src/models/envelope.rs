//! The API response envelope.

use serde::{Deserialize, Serialize};

/// Wrapper for the `{"response": ...}` convention used by every
/// Recipez endpoint except the health checks.
///
/// The payload type is generic so callers can deserialize straight to
/// the model they expect:
///
/// ```
/// use recipez_core::{Category, Envelope};
///
/// let body = r#"{
///     "response": [{
///         "category_id": "3d9f1c0a-2a60-4c5e-9d4e-6f0d3a9b1c2d",
///         "category_name": "Desserts",
///         "category_author_id": "a2b4c6d8-1111-2222-3333-444455556666",
///         "created_at": "2024-06-01T12:00:00Z"
///     }]
/// }"#;
/// let parsed: Envelope<Vec<Category>> = serde_json::from_str(body).unwrap();
/// assert_eq!(parsed.response[0].category_name, "Desserts");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped payload.
    pub response: T,
}

impl<T> Envelope<T> {
    /// Unwraps the envelope, returning the payload.
    pub fn into_inner(self) -> T {
        self.response
    }
}
