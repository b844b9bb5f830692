//! Ingredient endpoints.
//!
//! Ingredients are created in batches tied to a recipe; updates and
//! deletes address single ingredients by id.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::instrument;

use recipez_client::{ApiClient, ApiError, RequestSpec};
use recipez_core::{Envelope, Ingredient};

/// One ingredient in a batch create.
#[derive(Debug, Clone, Serialize)]
pub struct NewIngredient {
    /// Ingredient name, e.g. "Tomatoes".
    pub ingredient_name: String,
    /// Quantity as a free-form string, e.g. "2" or "1/2".
    pub ingredient_quantity: String,
    /// Unit of measure, e.g. "cups".
    pub ingredient_measurement: String,
}

/// Handle for the `/api/ingredient` endpoints.
#[derive(Debug)]
pub struct IngredientsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> IngredientsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Adds a batch of ingredients to a recipe.
    #[instrument(skip(self, ingredients), fields(count = ingredients.len()))]
    pub async fn batch_create(
        &self,
        recipe_id: &str,
        author_id: &str,
        ingredients: &[NewIngredient],
    ) -> Result<Value, ApiError> {
        self.client
            .post(
                "/api/ingredient/create",
                json!({
                    "recipe_id": recipe_id,
                    "author_id": author_id,
                    "ingredients": ingredients,
                }),
            )
            .await
    }

    /// Fetches a single ingredient.
    pub async fn get(&self, ingredient_id: &str) -> Result<Ingredient, ApiError> {
        let envelope: Envelope<Ingredient> = self
            .client
            .request_typed(&RequestSpec::get(format!("/api/ingredient/{ingredient_id}")))
            .await?;
        Ok(envelope.into_inner())
    }

    /// Replaces an ingredient's name, quantity, and measurement.
    #[instrument(skip(self, ingredient))]
    pub async fn update(
        &self,
        ingredient_id: &str,
        ingredient: &NewIngredient,
    ) -> Result<Value, ApiError> {
        self.client
            .put(
                &format!("/api/ingredient/update/{ingredient_id}"),
                serde_json::to_value(ingredient)?,
            )
            .await
    }

    /// Deletes an ingredient.
    #[instrument(skip(self))]
    pub async fn delete(&self, ingredient_id: &str) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/api/ingredient/delete/{ingredient_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_payload_shape() {
        let ingredients = vec![NewIngredient {
            ingredient_name: "Flour".to_string(),
            ingredient_quantity: "2".to_string(),
            ingredient_measurement: "cups".to_string(),
        }];

        let value = json!({
            "recipe_id": "r1",
            "author_id": "u1",
            "ingredients": ingredients,
        });
        assert_eq!(value["ingredients"][0]["ingredient_measurement"], "cups");
    }
}
