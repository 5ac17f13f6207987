//! In-memory run table with lazy status simulation.
//!
//! Submitted runs live in a single map behind a lock owned by [`RunStore`];
//! handlers receive a cloned handle through the application state instead of
//! a process-wide singleton. Status progression is not driven by a
//! scheduler: it is derived from elapsed wall-clock time whenever a run is
//! fetched.

use std::collections::HashMap;
use std::sync::Arc;

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::service::{ServiceConfig, fixtures};

/// Tracing target for run store operations.
const TRACING_TARGET: &str = "agrovibe_server::service::run_store";

/// Lifecycle status of a run.
///
/// Progression is monotonic: `submitted → running → completed`, driven by
/// elapsed time. `cancelled` can interrupt at any point and is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RunStatus {
    /// Accepted, waiting for (simulated) worker pickup.
    Submitted,
    /// The (simulated) computation is in flight.
    Running,
    /// Finished; output artifacts are attached.
    Completed,
    /// Cancelled by the caller. Terminal regardless of prior status.
    Cancelled,
}

impl RunStatus {
    /// Returns whether this status admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Kind of visualization carried by an output artifact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ArtifactKind {
    /// Time-series chart data.
    Timeseries,
    /// Categorical map data.
    Categorical,
}

/// A single output artifact of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OutputArtifact {
    /// Artifact file name.
    pub name: String,
    /// MIME type of the artifact.
    pub mime_type: String,
    /// Visualization kind.
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    /// Fixture visualization payload for frontend charts.
    pub visualization: serde_json::Value,
    /// Download URL (fixture, never fetched).
    pub url: String,
}

/// One invocation instance of a workflow.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Run {
    /// Unique run identifier.
    pub id: Uuid,
    /// Name of the invoked workflow. Stored as given, never validated
    /// against the catalog.
    pub workflow: String,
    /// Display name supplied by the caller.
    pub name: String,
    /// Submission timestamp (UTC).
    pub start_time: Timestamp,
    /// Current lifecycle status.
    pub status: RunStatus,
    /// Completion timestamp, set when the run reaches `completed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Timestamp>,
    /// Output artifacts, empty until completion.
    pub output: Vec<OutputArtifact>,
    /// Opaque parameters echoed back to the caller.
    pub parameters: serde_json::Map<String, serde_json::Value>,
}

/// Elapsed-time thresholds (in seconds from submission) at which the lazy
/// status simulation advances a run.
#[derive(Debug, Clone, Copy)]
struct StatusTimeline {
    running_after: i64,
    completed_after: i64,
}

/// Shared handle to the in-memory run table.
///
/// Clones share the same underlying map. The lock is never held across an
/// await point.
#[must_use = "store does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct RunStore {
    runs: Arc<RwLock<HashMap<Uuid, Run>>>,
    timeline: StatusTimeline,
}

impl RunStore {
    /// Creates an empty run store with thresholds from the configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            runs: Arc::new(RwLock::new(HashMap::new())),
            timeline: StatusTimeline {
                running_after: config.running_after_secs,
                completed_after: config.completed_after_secs,
            },
        }
    }

    /// Stores a new run and returns the created record.
    ///
    /// The run starts in the `submitted` status with a fresh id and the
    /// current timestamp; the display name defaults upstream.
    pub async fn submit(
        &self,
        workflow: String,
        name: String,
        parameters: serde_json::Map<String, serde_json::Value>,
    ) -> Run {
        let run = Run {
            id: Uuid::new_v4(),
            workflow,
            name,
            start_time: Timestamp::now(),
            status: RunStatus::Submitted,
            end_time: None,
            output: Vec::new(),
            parameters,
        };

        tracing::info!(
            target: TRACING_TARGET,
            run_id = %run.id,
            workflow = %run.workflow,
            "Run submitted"
        );

        self.runs.write().await.insert(run.id, run.clone());
        run
    }

    /// Fetches a run by id, advancing its simulated status first.
    pub async fn get(&self, id: Uuid) -> Option<Run> {
        let mut runs = self.runs.write().await;
        let run = runs.get_mut(&id)?;
        advance_status(run, self.timeline);
        Some(run.clone())
    }

    /// Returns a page of runs sorted by start time descending, plus the
    /// total count before paging.
    pub async fn list(&self, skip: usize, take: usize) -> (Vec<Run>, usize) {
        let runs = self.runs.read().await;
        let total = runs.len();

        let mut items: Vec<Run> = runs.values().cloned().collect();
        items.sort_by(|a, b| b.start_time.cmp(&a.start_time));

        let items = items.into_iter().skip(skip).take(take).collect();
        (items, total)
    }

    /// Cancels a run unconditionally. Returns `false` when the id is
    /// unknown.
    ///
    /// Cancellation is terminal: later fetches never advance the status
    /// again.
    pub async fn cancel(&self, id: Uuid) -> bool {
        let mut runs = self.runs.write().await;
        let Some(run) = runs.get_mut(&id) else {
            return false;
        };

        run.status = RunStatus::Cancelled;
        tracing::info!(target: TRACING_TARGET, run_id = %id, "Run cancelled");
        true
    }

    /// Removes a run from the table. Returns `false` when the id is
    /// unknown.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.runs.write().await.remove(&id).is_some();
        if removed {
            tracing::info!(target: TRACING_TARGET, run_id = %id, "Run deleted");
        }
        removed
    }
}

/// Advances a run's status according to the elapsed time since submission.
///
/// Both transitions may fire in a single call when the run has been idle
/// past the completion threshold. Terminal statuses are never touched.
fn advance_status(run: &mut Run, timeline: StatusTimeline) {
    if run.status.is_terminal() {
        return;
    }

    let elapsed = Timestamp::now().as_second() - run.start_time.as_second();

    if run.status == RunStatus::Submitted && elapsed >= timeline.running_after {
        run.status = RunStatus::Running;
    }

    if run.status == RunStatus::Running && elapsed >= timeline.completed_after {
        run.status = RunStatus::Completed;
        run.end_time = Some(Timestamp::now());
        run.output = fixtures::artifacts_for(&run.workflow);

        tracing::debug!(
            target: TRACING_TARGET,
            run_id = %run.id,
            workflow = %run.workflow,
            artifacts = run.output.len(),
            "Run completed"
        );
    }
}
