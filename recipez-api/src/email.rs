//! Email endpoints.
//!
//! Three flavors: an account invitation, a share by link, and a share
//! that embeds the full recipe so the recipient needs no account.

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use recipez_client::{ApiClient, ApiError};

/// Payload for an account invitation email.
#[derive(Debug, Clone, Serialize)]
pub struct InviteEmail {
    /// Recipient address.
    pub email: String,
    /// Signup link to embed.
    pub invite_link: String,
    /// Name shown as the sender.
    pub sender_name: String,
}

/// Payload for sharing a recipe by link.
#[derive(Debug, Clone, Serialize)]
pub struct ShareLinkEmail {
    /// Recipient address.
    pub email: String,
    /// Name of the shared recipe.
    pub recipe_name: String,
    /// Link to the recipe.
    pub recipe_link: String,
    /// Name shown as the sender.
    pub sender_name: String,
}

/// Payload for sharing a full recipe inline.
#[derive(Debug, Clone, Serialize)]
pub struct ShareFullEmail {
    /// Recipient address.
    pub email: String,
    /// Name of the shared recipe.
    pub recipe_name: String,
    /// Ingredient lines, already rendered as text.
    pub recipe_ingredients: Vec<String>,
    /// Step lines, already rendered as text.
    pub recipe_steps: Vec<String>,
    /// Name shown as the sender.
    pub sender_name: String,
    /// Optional description paragraph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_description: Option<String>,
}

/// Handle for the `/api/email` endpoints.
#[derive(Debug)]
pub struct EmailApi<'a> {
    client: &'a ApiClient,
}

impl<'a> EmailApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Sends an account invitation.
    #[instrument(skip(self, invite))]
    pub async fn invite(&self, invite: &InviteEmail) -> Result<Value, ApiError> {
        self.client
            .post("/api/email/invite", serde_json::to_value(invite)?)
            .await
    }

    /// Shares a recipe by link.
    #[instrument(skip(self, share))]
    pub async fn share_link(&self, share: &ShareLinkEmail) -> Result<Value, ApiError> {
        self.client
            .post("/api/email/recipe-share", serde_json::to_value(share)?)
            .await
    }

    /// Shares a full recipe inline.
    #[instrument(skip(self, share))]
    pub async fn share_full(&self, share: &ShareFullEmail) -> Result<Value, ApiError> {
        self.client
            .post("/api/email/recipe-share-full", serde_json::to_value(share)?)
            .await
    }
}
