//! Typed endpoint wrappers for the Recipez API.
//!
//! [`RecipezApi`] is the entry point: it owns an
//! [`ApiClient`](recipez_client::ApiClient) and hands out borrowed
//! per-resource handles, so transport policy lives in one place while
//! each endpoint group stays a small module.
//!
//! ```no_run
//! use recipez_api::RecipezApi;
//! use recipez_client::ClientConfig;
//!
//! # async fn run() -> Result<(), recipez_client::ApiError> {
//! let api = RecipezApi::new(ClientConfig::from_env()?)?;
//! let recipes = api.recipes().list().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod ai;
pub mod api_keys;
pub mod categories;
pub mod email;
pub mod grocery;
pub mod health;
pub mod images;
pub mod ingredients;
pub mod profile;
pub mod recipes;
pub mod steps;

use recipez_client::{ApiClient, ApiError, ClientConfig};

pub use ai::AiApi;
pub use api_keys::ApiKeysApi;
pub use categories::CategoriesApi;
pub use email::EmailApi;
pub use grocery::GroceryApi;
pub use health::HealthApi;
pub use images::ImagesApi;
pub use ingredients::IngredientsApi;
pub use profile::ProfileApi;
pub use recipes::RecipesApi;
pub use steps::StepsApi;

/// High-level entry point for the Recipez API.
#[derive(Debug, Clone)]
pub struct RecipezApi {
    client: ApiClient,
}

impl RecipezApi {
    /// Creates an API handle from connection settings.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: ApiClient::new(config)?,
        })
    }

    /// Wraps an already-configured client, e.g. one with custom retry
    /// or timeout policies.
    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Recipe CRUD and batch category assignment.
    pub fn recipes(&self) -> RecipesApi<'_> {
        RecipesApi::new(&self.client)
    }

    /// Category CRUD and deletion previews.
    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi::new(&self.client)
    }

    /// Ingredient CRUD.
    pub fn ingredients(&self) -> IngredientsApi<'_> {
        IngredientsApi::new(&self.client)
    }

    /// Preparation step CRUD.
    pub fn steps(&self) -> StepsApi<'_> {
        StepsApi::new(&self.client)
    }

    /// Image upload and deletion.
    pub fn images(&self) -> ImagesApi<'_> {
        ImagesApi::new(&self.client)
    }

    /// AI recipe generation and modification.
    pub fn ai(&self) -> AiApi<'_> {
        AiApi::new(&self.client)
    }

    /// Grocery list delivery.
    pub fn grocery(&self) -> GroceryApi<'_> {
        GroceryApi::new(&self.client)
    }

    /// Profile data and profile image.
    pub fn profile(&self) -> ProfileApi<'_> {
        ProfileApi::new(&self.client)
    }

    /// API key management.
    pub fn api_keys(&self) -> ApiKeysApi<'_> {
        ApiKeysApi::new(&self.client)
    }

    /// Invitation and recipe-sharing emails.
    pub fn email(&self) -> EmailApi<'_> {
        EmailApi::new(&self.client)
    }

    /// Service health and readiness probes.
    pub fn health(&self) -> HealthApi<'_> {
        HealthApi::new(&self.client)
    }
}
