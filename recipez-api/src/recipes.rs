//! Recipe endpoints.
//!
//! Covers recipe CRUD plus the batch category reassignment used when a
//! category is deleted and its recipes need a new home.

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use recipez_client::{ApiClient, ApiError, RequestSpec};
use recipez_core::{Envelope, RecipeWithRelations};

/// Payload for creating a recipe.
#[derive(Debug, Clone, Serialize)]
pub struct NewRecipe {
    /// Recipe name.
    pub recipe_name: String,
    /// Recipe description.
    pub recipe_description: String,
    /// Category to file the recipe under.
    pub recipe_category_id: String,
    /// Cover image, if one was uploaded first.
    pub recipe_image_id: Option<String>,
    /// Owning user.
    pub recipe_author_id: String,
}

/// Partial update for a recipe. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecipeUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_description: Option<String>,
    /// New category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_category_id: Option<String>,
    /// New cover image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_image_id: Option<String>,
}

/// One entry in a batch category reassignment.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryAssignment {
    /// Recipe to move.
    pub recipe_id: String,
    /// Category to move it into.
    pub category_id: String,
}

/// Handle for the `/api/recipe` endpoints.
#[derive(Debug)]
pub struct RecipesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RecipesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Creates a recipe.
    #[instrument(skip(self, recipe), fields(recipe_name = %recipe.recipe_name))]
    pub async fn create(&self, recipe: &NewRecipe) -> Result<Value, ApiError> {
        self.client
            .post("/api/recipe/create", serde_json::to_value(recipe)?)
            .await
    }

    /// Fetches a recipe with its ingredients, steps, category, and author.
    pub async fn get(&self, recipe_id: &str) -> Result<RecipeWithRelations, ApiError> {
        let envelope: Envelope<RecipeWithRelations> = self
            .client
            .request_typed(&RequestSpec::get(format!("/api/recipe/{recipe_id}")))
            .await?;
        Ok(envelope.into_inner())
    }

    /// Lists all recipes visible to the authenticated user.
    pub async fn list(&self) -> Result<Vec<RecipeWithRelations>, ApiError> {
        let envelope: Envelope<Vec<RecipeWithRelations>> = self
            .client
            .request_typed(&RequestSpec::get("/api/recipe/all"))
            .await?;
        Ok(envelope.into_inner())
    }

    /// Updates the provided fields of a recipe.
    #[instrument(skip(self, update))]
    pub async fn update(&self, recipe_id: &str, update: &RecipeUpdate) -> Result<Value, ApiError> {
        self.client
            .put(
                &format!("/api/recipe/update/{recipe_id}"),
                serde_json::to_value(update)?,
            )
            .await
    }

    /// Deletes a recipe.
    #[instrument(skip(self))]
    pub async fn delete(&self, recipe_id: &str) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/api/recipe/delete/{recipe_id}"))
            .await
    }

    /// Moves several recipes into new categories in one call.
    pub async fn batch_update_category(
        &self,
        updates: &[CategoryAssignment],
    ) -> Result<Value, ApiError> {
        self.client
            .post(
                "/api/recipe/batch-update-category",
                serde_json::json!({ "updates": updates }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_skips_absent_fields() {
        let update = RecipeUpdate {
            recipe_name: Some("Gazpacho".to_string()),
            ..RecipeUpdate::default()
        };

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({ "recipe_name": "Gazpacho" }));
    }

    #[test]
    fn test_new_recipe_serializes_all_fields() {
        let recipe = NewRecipe {
            recipe_name: "Gazpacho".to_string(),
            recipe_description: "Cold tomato soup".to_string(),
            recipe_category_id: "cat-1".to_string(),
            recipe_image_id: None,
            recipe_author_id: "user-1".to_string(),
        };

        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["recipe_image_id"], Value::Null);
        assert_eq!(value["recipe_author_id"], "user-1");
    }

    #[test]
    fn test_category_assignment_shape() {
        let updates = vec![CategoryAssignment {
            recipe_id: "r1".to_string(),
            category_id: "c1".to_string(),
        }];

        let value = json!({ "updates": updates });
        assert_eq!(value["updates"][0]["recipe_id"], "r1");
    }
}
