//! API key management endpoints.

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use recipez_client::{ApiClient, ApiError, RequestSpec};
use recipez_core::{ApiKeyMetadata, Envelope};

/// Payload for creating an API key.
///
/// Exactly one of `expires_at` and `never_expires` should be set; the
/// server rejects keys that specify both.
#[derive(Debug, Clone, Serialize)]
pub struct NewApiKey {
    /// Human-readable key name.
    pub name: String,
    /// Scopes granted to the key, e.g. `recipes:read`.
    pub scopes: Vec<String>,
    /// Expiry timestamp in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    /// Marks the key as non-expiring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub never_expires: Option<bool>,
}

/// Handle for the `/api/profile/api-keys` endpoints.
#[derive(Debug)]
pub struct ApiKeysApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ApiKeysApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Creates an API key. The response is the only place the secret
    /// value ever appears; listing returns metadata only.
    #[instrument(skip(self, key), fields(name = %key.name))]
    pub async fn create(&self, key: &NewApiKey) -> Result<Value, ApiError> {
        self.client
            .post("/api/profile/api-keys", serde_json::to_value(key)?)
            .await
    }

    /// Lists the user's API keys.
    pub async fn list(&self) -> Result<Vec<ApiKeyMetadata>, ApiError> {
        let envelope: Envelope<Vec<ApiKeyMetadata>> = self
            .client
            .request_typed(&RequestSpec::get("/api/profile/api-keys"))
            .await?;
        Ok(envelope.into_inner())
    }

    /// Revokes an API key.
    #[instrument(skip(self))]
    pub async fn delete(&self, api_key_id: &str) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/api/profile/api-keys/{api_key_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_key_omits_unset_expiry_fields() {
        let key = NewApiKey {
            name: "automation".to_string(),
            scopes: vec!["recipes:read".to_string()],
            expires_at: None,
            never_expires: Some(true),
        };

        let value = serde_json::to_value(&key).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "automation",
                "scopes": ["recipes:read"],
                "never_expires": true,
            })
        );
    }
}
