//! Health and readiness check payloads.
//!
//! Unlike the rest of the API, `/health` and `/health/ready` return
//! their payloads without the `{"response": ...}` wrapper.

use serde::{Deserialize, Serialize};

// ============================================================================
// Health
// ============================================================================

/// Per-subsystem health check results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthChecks {
    /// Application status ("ok" when healthy).
    pub app: String,
    /// Database connectivity status.
    pub database: String,
}

/// Response from `/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Overall status string ("healthy" / "unhealthy").
    pub status: String,
    /// Per-subsystem details.
    pub checks: HealthChecks,
}

impl HealthStatus {
    /// Returns true if the service reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

// ============================================================================
// Readiness
// ============================================================================

/// Per-subsystem readiness check results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessChecks {
    /// Database connectivity status.
    pub database: String,
    /// Schema migration status.
    pub schema: String,
}

/// Response from `/health/ready`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessStatus {
    /// True once the service can accept traffic.
    pub ready: bool,
    /// Per-subsystem details.
    pub checks: ReadinessChecks,
}
