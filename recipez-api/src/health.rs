//! Health and readiness probes.
//!
//! These are the only endpoints that return their payload without the
//! response envelope.

use recipez_client::{ApiClient, ApiError, RequestSpec};
use recipez_core::{HealthStatus, ReadinessStatus};

/// Handle for the `/health` endpoints.
#[derive(Debug)]
pub struct HealthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> HealthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Checks liveness of the service and its database.
    pub async fn check(&self) -> Result<HealthStatus, ApiError> {
        self.client.request_typed(&RequestSpec::get("/health")).await
    }

    /// Checks whether the service is ready to take traffic.
    pub async fn ready(&self) -> Result<ReadinessStatus, ApiError> {
        self.client
            .request_typed(&RequestSpec::get("/health/ready"))
            .await
    }
}
