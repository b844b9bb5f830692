//! AI recipe generation endpoints.
//!
//! These calls proxy to a language model on the backend and routinely
//! run for a minute or more, so the client's timeout policy gives any
//! path under `/api/ai/` an elevated timeout automatically.

use serde_json::{json, Value};
use tracing::instrument;

use recipez_client::{ApiClient, ApiError};

/// Handle for the `/api/ai` endpoints.
#[derive(Debug)]
pub struct AiApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AiApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Generates a new recipe from a natural-language prompt.
    #[instrument(skip(self, message))]
    pub async fn create(&self, message: &str) -> Result<Value, ApiError> {
        self.client
            .post("/api/ai/create", json!({ "message": message }))
            .await
    }

    /// Modifies an existing recipe according to a prompt.
    #[instrument(skip(self, message))]
    pub async fn modify(&self, message: &str, recipe_id: &str) -> Result<Value, ApiError> {
        self.client
            .post(
                "/api/ai/modify",
                json!({ "message": message, "recipe_id": recipe_id }),
            )
            .await
    }
}
