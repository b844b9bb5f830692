//! Grocery list endpoints.

use serde_json::{json, Value};
use tracing::instrument;

use recipez_client::{ApiClient, ApiError};

/// Handle for the `/api/grocery` endpoints.
#[derive(Debug)]
pub struct GroceryApi<'a> {
    client: &'a ApiClient,
}

impl<'a> GroceryApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Emails the user a combined grocery list for the given recipes.
    #[instrument(skip(self, recipe_ids), fields(count = recipe_ids.len()))]
    pub async fn send(&self, recipe_ids: &[String]) -> Result<Value, ApiError> {
        self.client
            .post("/api/grocery/send", json!({ "recipe_ids": recipe_ids }))
            .await
    }
}
