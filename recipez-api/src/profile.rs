//! Profile endpoints.

use serde_json::{json, Value};
use tracing::instrument;

use recipez_client::{ApiClient, ApiError, RequestSpec};
use recipez_core::{Envelope, ProfileData};

/// Handle for the `/api/profile` endpoints.
#[derive(Debug)]
pub struct ProfileApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProfileApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetches the authenticated user's profile.
    pub async fn me(&self) -> Result<ProfileData, ApiError> {
        let envelope: Envelope<ProfileData> = self
            .client
            .request_typed(&RequestSpec::get("/api/profile/me"))
            .await?;
        Ok(envelope.into_inner())
    }

    /// Points the profile at a new image URL.
    #[instrument(skip(self, image_url))]
    pub async fn update_image(&self, image_url: &str) -> Result<Value, ApiError> {
        self.client
            .put("/api/profile/image", json!({ "image_url": image_url }))
            .await
    }
}
