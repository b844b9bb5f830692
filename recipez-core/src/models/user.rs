//! Account types.
//!
//! This module contains the user-facing account models:
//! - [`User`] - Full user record as embedded in recipe relations
//! - [`ProfileData`] - The authenticated user's own profile
//! - [`ApiKeyMetadata`] - API key listing entries (never the token itself)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// User
// ============================================================================

/// A user record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub user_id: Uuid,
    /// Identity-provider subject.
    pub user_sub: Uuid,
    /// Email address.
    pub user_email: String,
    /// Display name.
    pub user_name: String,
    /// Account creation timestamp.
    #[serde(default)]
    pub user_created_at: Option<DateTime<Utc>>,
    /// Profile image URL, if set.
    #[serde(default)]
    pub user_profile_image_url: Option<String>,
}

// ============================================================================
// Profile
// ============================================================================

/// The authenticated user's own profile, from `/api/profile/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    /// User identifier.
    pub user_id: Uuid,
    /// Display name.
    pub user_name: String,
    /// Email address.
    pub user_email: String,
    /// Profile image URL, if set.
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

// ============================================================================
// API Keys
// ============================================================================

/// Metadata for an issued API key. The token itself is only returned
/// once, at creation time, and never appears in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyMetadata {
    /// Key identifier.
    pub api_key_id: Uuid,
    /// Human-readable key name.
    pub api_key_name: String,
    /// Granted scopes.
    pub api_key_scopes: Vec<String>,
    /// Expiry timestamp, absent for non-expiring keys.
    #[serde(default)]
    pub api_key_expires_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub api_key_created_at: DateTime<Utc>,
    /// True if the key is past its expiry.
    pub is_expired: bool,
}

impl ApiKeyMetadata {
    /// Returns true if the key never expires.
    pub fn never_expires(&self) -> bool {
        self.api_key_expires_at.is_none()
    }
}
