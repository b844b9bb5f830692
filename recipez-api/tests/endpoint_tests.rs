//! Integration tests driving the endpoint wrappers against a mock server.

use recipez_api::RecipezApi;
use recipez_client::{ApiError, ClientConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> RecipezApi {
    let config = ClientConfig::new(server.uri(), "test-token").unwrap();
    RecipezApi::new(config).unwrap()
}

#[tokio::test]
async fn test_list_recipes_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipe/all"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{
                "recipe_id": "0a1b2c3d-4e5f-6071-8293-a4b5c6d7e8f9",
                "recipe_name": "Shakshuka",
                "recipe_description": "Eggs in tomato sauce",
                "recipe_category_id": "11111111-2222-3333-4444-555555555555",
                "recipe_author_id": "99999999-8888-7777-6666-555555555555",
                "created_at": "2024-03-10T09:30:00Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let recipes = api_for(&server).recipes().list().await.unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].recipe_name, "Shakshuka");
}

#[tokio::test]
async fn test_update_recipe_sends_only_changed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/recipe/update/r1"))
        .and(body_json(json!({ "recipe_name": "Gazpacho" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let update = recipez_api::recipes::RecipeUpdate {
        recipe_name: Some("Gazpacho".to_string()),
        ..Default::default()
    };
    api_for(&server).recipes().update("r1", &update).await.unwrap();
}

#[tokio::test]
async fn test_profile_me_returns_typed_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {
                "user_id": "99999999-8888-7777-6666-555555555555",
                "user_name": "Cook",
                "user_email": "cook@example.com",
                "profile_image_url": null
            }
        })))
        .mount(&server)
        .await;

    let profile = api_for(&server).profile().me().await.unwrap();
    assert_eq!(profile.user_email, "cook@example.com");
}

#[tokio::test]
async fn test_health_probe_is_unwrapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "checks": { "app": "ok", "database": "ok" }
        })))
        .mount(&server)
        .await;

    let health = api_for(&server).health().check().await.unwrap();
    assert!(health.is_healthy());
}

#[tokio::test]
async fn test_conflict_surfaces_through_wrapper() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/category/create"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "response": { "error": "Category 'Desserts' already exists" }
        })))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .categories()
        .create("Desserts", "user-1")
        .await
        .unwrap_err();
    match err {
        ApiError::Conflict(message) => {
            assert_eq!(message, "Category 'Desserts' already exists");
        }
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn test_grocery_send_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/grocery/send"))
        .and(body_json(json!({ "recipe_ids": ["r1", "r2"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "sent" })))
        .expect(1)
        .mount(&server)
        .await;

    let value = api_for(&server)
        .grocery()
        .send(&["r1".to_string(), "r2".to_string()])
        .await
        .unwrap();
    assert_eq!(value["response"], "sent");
}
