//! Recipe entities and their relations.
//!
//! This module contains the recipe aggregate and everything hanging off
//! it: [`Category`], [`Image`], [`Ingredient`] and [`Step`]. The flat
//! [`Recipe`] shape is what create/update endpoints return; list and
//! detail endpoints return [`RecipeWithRelations`] with nested entities
//! resolved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

// ============================================================================
// Category
// ============================================================================

/// A recipe category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier.
    pub category_id: Uuid,
    /// Display name.
    pub category_name: String,
    /// User that created the category.
    pub category_author_id: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Image
// ============================================================================

/// An uploaded recipe image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Image identifier.
    pub image_id: Uuid,
    /// Public URL of the stored image.
    pub image_url: String,
    /// User that uploaded the image.
    pub image_author_id: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Ingredient
// ============================================================================

/// A single ingredient line belonging to a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient identifier.
    pub ingredient_id: Uuid,
    /// Ingredient name (e.g. "flour").
    pub ingredient_name: String,
    /// Quantity as entered by the user (kept as text, e.g. "1 1/2").
    pub ingredient_quantity: String,
    /// Unit of measurement (e.g. "cups").
    pub ingredient_measurement: String,
    /// User that created the ingredient.
    pub ingredient_author_id: Uuid,
    /// Recipe the ingredient belongs to.
    pub ingredient_recipe_id: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Step
// ============================================================================

/// A preparation step belonging to a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Step identifier.
    pub step_id: Uuid,
    /// Step instruction text.
    pub step_description: String,
    /// User that created the step.
    pub step_author_id: Uuid,
    /// Recipe the step belongs to.
    pub step_recipe_id: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Recipe
// ============================================================================

/// Flat recipe shape, as returned by create/update endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe identifier.
    pub recipe_id: Uuid,
    /// Recipe title.
    pub recipe_name: String,
    /// Free-form description.
    pub recipe_description: String,
    /// Category the recipe is filed under.
    pub recipe_category_id: Uuid,
    /// Cover image, if one was attached.
    #[serde(default)]
    pub recipe_image_id: Option<Uuid>,
    /// User that owns the recipe.
    pub recipe_author_id: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Recipe with nested relations resolved, as returned by detail and
/// list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeWithRelations {
    /// Recipe identifier.
    pub recipe_id: Uuid,
    /// Recipe title.
    pub recipe_name: String,
    /// Free-form description.
    pub recipe_description: String,
    /// Category the recipe is filed under.
    pub recipe_category_id: Uuid,
    /// Cover image, if one was attached.
    #[serde(default)]
    pub recipe_image_id: Option<Uuid>,
    /// User that owns the recipe.
    pub recipe_author_id: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Resolved category.
    #[serde(default)]
    pub recipe_category: Option<Category>,
    /// Resolved cover image.
    #[serde(default)]
    pub recipe_image: Option<Image>,
    /// Resolved author. Some endpoints emit this under `author` instead.
    #[serde(default, alias = "author")]
    pub recipe_author: Option<User>,
    /// Ingredient lines.
    #[serde(default)]
    pub recipe_ingredients: Vec<Ingredient>,
    /// Preparation steps.
    #[serde(default)]
    pub recipe_steps: Vec<Step>,
}

impl RecipeWithRelations {
    /// Returns the flat recipe portion, discarding relations.
    pub fn to_recipe(&self) -> Recipe {
        Recipe {
            recipe_id: self.recipe_id,
            recipe_name: self.recipe_name.clone(),
            recipe_description: self.recipe_description.clone(),
            recipe_category_id: self.recipe_category_id,
            recipe_image_id: self.recipe_image_id,
            recipe_author_id: self.recipe_author_id,
            created_at: self.created_at,
        }
    }

    /// Returns true if the recipe has no ingredients and no steps.
    pub fn is_empty(&self) -> bool {
        self.recipe_ingredients.is_empty() && self.recipe_steps.is_empty()
    }
}
