//! Preparation step endpoints.
//!
//! Steps mirror ingredients: batch create against a recipe, then
//! per-step update and delete. Listing is per recipe, not per step.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::instrument;

use recipez_client::{ApiClient, ApiError, RequestSpec};
use recipez_core::{Envelope, Step};

/// One step in a batch create.
#[derive(Debug, Clone, Serialize)]
pub struct NewStep {
    /// Instruction text.
    pub step_description: String,
}

/// Handle for the `/api/step` endpoints.
#[derive(Debug)]
pub struct StepsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StepsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Adds a batch of steps to a recipe.
    #[instrument(skip(self, steps), fields(count = steps.len()))]
    pub async fn batch_create(
        &self,
        recipe_id: &str,
        author_id: &str,
        steps: &[NewStep],
    ) -> Result<Value, ApiError> {
        self.client
            .post(
                "/api/step/create",
                json!({
                    "recipe_id": recipe_id,
                    "author_id": author_id,
                    "steps": steps,
                }),
            )
            .await
    }

    /// Lists the steps of a recipe.
    pub async fn list_for_recipe(&self, recipe_id: &str) -> Result<Vec<Step>, ApiError> {
        let envelope: Envelope<Vec<Step>> = self
            .client
            .request_typed(&RequestSpec::get(format!("/api/step/{recipe_id}")))
            .await?;
        Ok(envelope.into_inner())
    }

    /// Rewrites a step's instruction text.
    #[instrument(skip(self, step_description))]
    pub async fn update(&self, step_id: &str, step_description: &str) -> Result<Value, ApiError> {
        self.client
            .put(
                &format!("/api/step/update/{step_id}"),
                json!({ "step_description": step_description }),
            )
            .await
    }

    /// Deletes a step.
    #[instrument(skip(self))]
    pub async fn delete(&self, step_id: &str) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/api/step/delete/{step_id}"))
            .await
    }
}
