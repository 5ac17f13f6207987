//! Run lifecycle handlers.
//!
//! Runs are fixture records in an in-memory table. Submission stores the
//! record as `submitted`; fetching a run advances its status from elapsed
//! wall-clock time and, once completed, attaches workflow-specific fixture
//! artifacts. Nothing is ever executed.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;

use crate::extract::{Json, Path, Query};
use crate::handler::request::{PageQuery, RunPathParams, SubmitRunRequest};
use crate::handler::response::{AckResponse, ErrorResponse, RunsPage};
use crate::handler::{ErrorKind, Result};
use crate::service::{Run, RunStore, ServiceState};

/// Tracing target for run operations.
const TRACING_TARGET: &str = "agrovibe_server::handler::runs";

/// Lists runs, newest first.
#[tracing::instrument(skip_all, fields(skip = page.skip, take = page.take))]
async fn list_runs(
    State(run_store): State<RunStore>,
    Query(page): Query<PageQuery>,
) -> Json<RunsPage> {
    let (items, total) = run_store.list(page.skip, page.take).await;

    tracing::debug!(
        target: TRACING_TARGET,
        run_count = items.len(),
        total = total,
        "Runs listed"
    );

    Json(RunsPage {
        items,
        total,
        skip: page.skip,
        take: page.take,
    })
}

fn list_runs_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List runs")
        .description("Returns a page of runs sorted by start time descending.")
        .response::<200, Json<RunsPage>>()
}

/// Submits a new run.
#[tracing::instrument(skip_all, fields(workflow = %request.workflow))]
async fn submit_run(
    State(run_store): State<RunStore>,
    Json(request): Json<SubmitRunRequest>,
) -> (StatusCode, Json<Run>) {
    let run = run_store
        .submit(request.workflow, request.name, request.parameters)
        .await;

    (StatusCode::CREATED, Json(run))
}

fn submit_run_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Submit run")
        .description(
            "Stores a new run in the submitted status and returns the created record. \
             The workflow name is not validated against the catalog.",
        )
        .response::<201, Json<Run>>()
        .response::<400, Json<ErrorResponse>>()
}

/// Fetches a run, advancing its simulated status.
#[tracing::instrument(skip_all, fields(run_id = %path_params.id))]
async fn get_run(
    State(run_store): State<RunStore>,
    Path(path_params): Path<RunPathParams>,
) -> Result<Json<Run>> {
    let Some(run) = run_store.get(path_params.id).await else {
        return Err(ErrorKind::NotFound.with_message("Run not found"));
    };

    tracing::debug!(target: TRACING_TARGET, status = %run.status, "Run fetched");
    Ok(Json(run))
}

fn get_run_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get run")
        .description(
            "Returns a run by id. The simulated status is advanced from elapsed time \
             before the record is returned.",
        )
        .response::<200, Json<Run>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Cancels a run unconditionally.
#[tracing::instrument(skip_all, fields(run_id = %path_params.id))]
async fn cancel_run(
    State(run_store): State<RunStore>,
    Path(path_params): Path<RunPathParams>,
) -> Result<Json<AckResponse>> {
    if !run_store.cancel(path_params.id).await {
        return Err(ErrorKind::NotFound.with_message("Run not found"));
    }

    Ok(Json(AckResponse::ok()))
}

fn cancel_run_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Cancel run")
        .description("Sets the run status to cancelled regardless of its prior status.")
        .response::<200, Json<AckResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Deletes a run from the table.
#[tracing::instrument(skip_all, fields(run_id = %path_params.id))]
async fn delete_run(
    State(run_store): State<RunStore>,
    Path(path_params): Path<RunPathParams>,
) -> Result<Json<AckResponse>> {
    if !run_store.remove(path_params.id).await {
        return Err(ErrorKind::NotFound.with_message("Run not found"));
    }

    Ok(Json(AckResponse::ok()))
}

fn delete_run_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete run")
        .description("Removes the run record from the in-memory table.")
        .response::<200, Json<AckResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all run lifecycle routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/v0/runs",
            get_with(list_runs, list_runs_docs).post_with(submit_run, submit_run_docs),
        )
        .api_route(
            "/v0/runs/{id}",
            get_with(get_run, get_run_docs).delete_with(delete_run, delete_run_docs),
        )
        .api_route(
            "/v0/runs/{id}/cancel",
            post_with(cancel_run, cancel_run_docs),
        )
        .with_path_items(|item| item.tag("Runs"))
}
