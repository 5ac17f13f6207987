//! Response types for run handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::service::Run;

/// One page of the run listing, sorted by start time descending.
///
/// Echoes the paging window back so the frontend can derive the next
/// request without extra state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RunsPage {
    /// Runs in this page.
    pub items: Vec<Run>,
    /// Total number of runs before paging.
    pub total: usize,
    /// Number of runs skipped, echoed from the query.
    pub skip: usize,
    /// Page size, echoed from the query.
    pub take: usize,
}

/// Plain acknowledgement body for cancel and delete operations.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AckResponse {
    /// Always `"ok"`.
    pub status: String,
}

impl AckResponse {
    /// Creates the standard `{"status": "ok"}` acknowledgement.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_serializes_to_status_ok() {
        let json = serde_json::to_value(AckResponse::ok()).expect("serializes");
        assert_eq!(json, serde_json::json!({"status": "ok"}));
    }
}
