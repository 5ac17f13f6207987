//! Health check handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;

use crate::extract::Json;
use crate::handler::response::HealthResponse;
use crate::service::{ServiceConfig, ServiceState};

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "agrovibe_server::handler::monitors";

/// Reports that the mock is up.
#[tracing::instrument(skip_all)]
async fn health_status(State(config): State<ServiceConfig>) -> Json<HealthResponse> {
    tracing::debug!(target: TRACING_TARGET, "Health check requested");
    Json(HealthResponse::ok(config.service_name))
}

fn health_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Health check")
        .description("Returns a static status object while the server is up.")
        .response::<200, Json<HealthResponse>>()
}

/// Returns a [`Router`] with the health check route.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/v0/", get_with(health_status, health_status_docs))
        .with_path_items(|item| item.tag("Health"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn health_check_reports_ok() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/v0/").await;
        response.assert_status_ok();

        let health = response.json::<HealthResponse>();
        assert_eq!(health.status, "ok");
        assert_eq!(health.service, "agrovibe-mock-api");

        Ok(())
    }
}
