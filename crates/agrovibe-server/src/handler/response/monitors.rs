//! Response types for health monitoring.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    /// Always `"ok"` while the server answers at all.
    pub status: String,
    /// Configured service name.
    pub service: String,
}

impl HealthResponse {
    /// Creates a healthy response for the named service.
    pub fn ok(service: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.into(),
        }
    }
}
