//! Data models for the Recipez API.
//!
//! This module contains serde representations of the payloads the API
//! returns. The types mirror the OpenAPI schemas field-for-field.
//!
//! ## Submodules
//!
//! - [`recipe`] - Recipe entities and their relations (Category, Image, Ingredient, Step)
//! - [`user`] - Account types (User, ProfileData, ApiKeyMetadata)
//! - [`health`] - Health and readiness check payloads
//! - [`envelope`] - The `{"response": ...}` wrapper

mod envelope;
mod health;
mod recipe;
mod user;

// Re-export everything at the models level
pub use envelope::Envelope;
pub use health::{HealthChecks, HealthStatus, ReadinessChecks, ReadinessStatus};
pub use recipe::{Category, Image, Ingredient, Recipe, RecipeWithRelations, Step};
pub use user::{ApiKeyMetadata, ProfileData, User};
