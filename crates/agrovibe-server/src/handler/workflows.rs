//! Workflow catalog handlers.
//!
//! The catalog is static: listing always returns the same fixed set, and
//! lookups match descriptor names exactly.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;

use crate::extract::{Json, Path};
use crate::handler::request::WorkflowPathParams;
use crate::handler::response::ErrorResponse;
use crate::handler::{ErrorKind, Result};
use crate::service::{ServiceState, Workflow, WorkflowCatalog};

/// Tracing target for workflow operations.
const TRACING_TARGET: &str = "agrovibe_server::handler::workflows";

/// Lists all workflow descriptors.
#[tracing::instrument(skip_all)]
async fn list_workflows(State(catalog): State<WorkflowCatalog>) -> Json<Vec<Workflow>> {
    tracing::debug!(
        target: TRACING_TARGET,
        workflow_count = catalog.len(),
        "Workflows listed"
    );

    Json(catalog.all().to_vec())
}

fn list_workflows_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List workflows")
        .description("Returns the full static workflow catalog.")
        .response::<200, Json<Vec<Workflow>>>()
}

/// Describes a single workflow.
#[tracing::instrument(skip_all, fields(workflow = %path_params.name))]
async fn describe_workflow(
    State(catalog): State<WorkflowCatalog>,
    Path(path_params): Path<WorkflowPathParams>,
) -> Result<Json<Workflow>> {
    let Some(workflow) = catalog.find(&path_params.name) else {
        return Err(ErrorKind::NotFound.with_message("Workflow not found"));
    };

    tracing::debug!(target: TRACING_TARGET, "Workflow described");
    Ok(Json(workflow.clone()))
}

fn describe_workflow_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Describe workflow")
        .description("Returns the descriptor for a workflow by exact name match.")
        .response::<200, Json<Workflow>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all workflow catalog routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/v0/workflows", get_with(list_workflows, list_workflows_docs))
        .api_route(
            "/v0/workflows/{name}",
            get_with(describe_workflow, describe_workflow_docs),
        )
        .with_path_items(|item| item.tag("Workflows"))
}
