// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Recipez Core
//!
//! Core types and API data models for the Recipez client crates.
//!
//! This crate provides the value types shared across the workspace:
//!
//! - Entity models mirroring the Recipez OpenAPI schemas (recipes,
//!   categories, ingredients, steps, images, users, API keys)
//! - Health and readiness check payloads
//! - The [`Envelope`] wrapper for the API's `{"response": ...}` convention
//!
//! All models are plain serde types with no I/O. Field names match the
//! API schemas exactly (snake_case), so they deserialize directly from
//! response bodies.

pub mod models;

// Re-export all model types
pub use models::{
    // Entities
    ApiKeyMetadata,
    Category,
    Image,
    Ingredient,
    ProfileData,
    Recipe,
    RecipeWithRelations,
    Step,
    User,
    // Health
    HealthChecks,
    HealthStatus,
    ReadinessChecks,
    ReadinessStatus,
    // Response wrapper
    Envelope,
};
