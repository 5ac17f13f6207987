//! Path parameter types for HTTP handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Path parameters for workflow lookup.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowPathParams {
    /// Workflow name, matched exactly against the catalog.
    pub name: String,
}

/// Path parameters for run operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RunPathParams {
    /// Unique identifier of the run.
    pub id: Uuid,
}
