//! Request types for run handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display name used when the caller does not give one.
const DEFAULT_RUN_NAME: &str = "Untitled";

/// Default page size for the run listing.
const DEFAULT_PAGE_SIZE: usize = 50;

/// Body of a run submission.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SubmitRunRequest {
    /// Workflow to invoke. Stored as given, not validated against the
    /// catalog.
    pub workflow: String,
    /// Display name for the run.
    #[serde(default = "default_run_name")]
    pub name: String,
    /// Opaque parameters echoed back on every fetch.
    #[serde(default)]
    pub parameters: serde_json::Map<String, serde_json::Value>,
}

fn default_run_name() -> String {
    DEFAULT_RUN_NAME.to_string()
}

/// Query parameters for the paged run listing.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct PageQuery {
    /// Number of runs to skip.
    #[serde(default)]
    pub skip: usize,
    /// Maximum number of runs to return.
    #[serde(default = "default_take")]
    pub take: usize,
}

fn default_take() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            take: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_defaults_name_and_parameters() {
        let request: SubmitRunRequest =
            serde_json::from_str(r#"{"workflow": "carbon"}"#).expect("deserializes");

        assert_eq!(request.workflow, "carbon");
        assert_eq!(request.name, "Untitled");
        assert!(request.parameters.is_empty());
    }

    #[test]
    fn submission_requires_a_workflow() {
        let result = serde_json::from_str::<SubmitRunRequest>(r#"{"name": "No workflow"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn page_query_defaults() {
        let query: PageQuery = serde_json::from_str("{}").expect("deserializes");
        assert_eq!(query.skip, 0);
        assert_eq!(query.take, 50);
    }
}
