//! Category endpoints.

use serde_json::{json, Value};
use tracing::instrument;

use recipez_client::{ApiClient, ApiError, RequestSpec};
use recipez_core::{Category, Envelope};

/// Handle for the `/api/category` endpoints.
#[derive(Debug)]
pub struct CategoriesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CategoriesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Creates a category.
    #[instrument(skip(self))]
    pub async fn create(&self, category_name: &str, author_id: &str) -> Result<Value, ApiError> {
        self.client
            .post(
                "/api/category/create",
                json!({ "category_name": category_name, "author_id": author_id }),
            )
            .await
    }

    /// Fetches a single category.
    pub async fn get(&self, category_id: &str) -> Result<Category, ApiError> {
        let envelope: Envelope<Category> = self
            .client
            .request_typed(&RequestSpec::get(format!("/api/category/{category_id}")))
            .await?;
        Ok(envelope.into_inner())
    }

    /// Lists all categories.
    pub async fn list(&self) -> Result<Vec<Category>, ApiError> {
        let envelope: Envelope<Vec<Category>> = self
            .client
            .request_typed(&RequestSpec::get("/api/category/all"))
            .await?;
        Ok(envelope.into_inner())
    }

    /// Renames a category.
    #[instrument(skip(self))]
    pub async fn update(&self, category_id: &str, category_name: &str) -> Result<Value, ApiError> {
        self.client
            .put(
                &format!("/api/category/update/{category_id}"),
                json!({ "category_name": category_name }),
            )
            .await
    }

    /// Deletes a category.
    #[instrument(skip(self))]
    pub async fn delete(&self, category_id: &str) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/api/category/delete/{category_id}"))
            .await
    }

    /// Reports which recipes would be affected by deleting a category,
    /// without deleting anything.
    pub async fn delete_preview(&self, category_id: &str) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/api/category/delete/{category_id}/preview"))
            .await
    }
}
