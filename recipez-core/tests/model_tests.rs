//! Integration tests for the public model surface.

use recipez_core::{Envelope, Recipe, RecipeWithRelations};
use serde_json::json;

#[test]
fn test_recipe_serialization_roundtrip() {
    let body = json!({
        "recipe_id": "0a1b2c3d-4e5f-6071-8293-a4b5c6d7e8f9",
        "recipe_name": "Shakshuka",
        "recipe_description": "Eggs poached in spiced tomato sauce",
        "recipe_category_id": "11111111-2222-3333-4444-555555555555",
        "recipe_author_id": "99999999-8888-7777-6666-555555555555",
        "created_at": "2024-03-10T09:30:00Z"
    });

    let recipe: Recipe = serde_json::from_value(body).unwrap();
    let reserialized = serde_json::to_value(&recipe).unwrap();
    let parsed_again: Recipe = serde_json::from_value(reserialized).unwrap();
    assert_eq!(recipe, parsed_again);
}

#[test]
fn test_enveloped_detail_response_via_public_api() {
    let body = json!({
        "response": {
            "recipe_id": "0a1b2c3d-4e5f-6071-8293-a4b5c6d7e8f9",
            "recipe_name": "Shakshuka",
            "recipe_description": "Eggs poached in spiced tomato sauce",
            "recipe_category_id": "11111111-2222-3333-4444-555555555555",
            "recipe_author_id": "99999999-8888-7777-6666-555555555555",
            "created_at": "2024-03-10T09:30:00Z",
            "recipe_steps": [{
                "step_id": "bbbbbbbb-cccc-dddd-eeee-ffffffffffff",
                "step_description": "Simmer the sauce",
                "step_author_id": "99999999-8888-7777-6666-555555555555",
                "step_recipe_id": "0a1b2c3d-4e5f-6071-8293-a4b5c6d7e8f9",
                "created_at": "2024-03-10T09:30:00Z"
            }]
        }
    });

    let envelope: Envelope<RecipeWithRelations> = serde_json::from_value(body).unwrap();
    let recipe = envelope.into_inner();
    assert!(!recipe.is_empty());
    assert_eq!(recipe.recipe_steps[0].step_description, "Simmer the sauce");
}
