//! Image endpoints.
//!
//! Uploads send the image as base64 in a JSON body rather than as a
//! multipart form, matching what the backend accepts on
//! `/api/image/create`.

use serde_json::{json, Value};
use tracing::instrument;

use recipez_client::{ApiClient, ApiError};

/// Handle for the `/api/image` endpoints.
#[derive(Debug)]
pub struct ImagesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ImagesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Uploads an image.
    ///
    /// `image_data` is the base64-encoded file contents and
    /// `image_path` the original file name, used to derive the stored
    /// object's name and type.
    #[instrument(skip(self, image_data), fields(path = %image_path))]
    pub async fn create(
        &self,
        image_data: &str,
        image_path: &str,
        author_id: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .post(
                "/api/image/create",
                json!({
                    "image_data": image_data,
                    "image_path": image_path,
                    "author_id": author_id,
                }),
            )
            .await
    }

    /// Deletes an image.
    #[instrument(skip(self))]
    pub async fn delete(&self, image_id: &str) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/api/image/delete/{image_id}"))
            .await
    }
}
