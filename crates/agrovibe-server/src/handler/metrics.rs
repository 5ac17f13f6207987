//! Host metrics handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;

use crate::extract::Json;
use crate::service::{ServiceState, SystemMetrics};

/// Tracing target for metrics operations.
const TRACING_TARGET: &str = "agrovibe_server::handler::metrics";

/// Reports host resource usage.
///
/// Probing is synchronous and can block for the CPU sampling interval, so
/// it runs on the blocking pool. Any probe failure degrades to the static
/// fallback payload instead of an error status.
#[tracing::instrument(skip_all)]
async fn system_metrics() -> Json<SystemMetrics> {
    let metrics = tokio::task::spawn_blocking(SystemMetrics::snapshot)
        .await
        .unwrap_or_else(|error| {
            tracing::warn!(target: TRACING_TARGET, %error, "Metrics probe panicked");
            SystemMetrics::fallback()
        });

    Json(metrics)
}

fn system_metrics_docs(op: TransformOperation) -> TransformOperation {
    op.summary("System metrics")
        .description(
            "Returns host CPU, memory and disk usage. Falls back to static \
             values when probing is unavailable.",
        )
        .response::<200, Json<SystemMetrics>>()
}

/// Returns a [`Router`] with all metrics routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/v0/system-metrics", get_with(system_metrics, system_metrics_docs))
        .with_path_items(|item| item.tag("Metrics"))
}

#[cfg(test)]
mod tests {
    use crate::handler::test::create_test_server;
    use crate::service::SystemMetrics;

    #[tokio::test]
    async fn metrics_report_plausible_percentages() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/v0/system-metrics").await;
        response.assert_status_ok();

        let metrics = response.json::<SystemMetrics>();
        assert!(metrics.cpu_percent >= 0.0);
        assert!((0.0..=100.0).contains(&metrics.memory_percent));
        assert!((0.0..=100.0).contains(&metrics.disk_percent));
        assert!(metrics.total_memory_gb > 0.0);
        assert!(metrics.available_memory_gb <= metrics.total_memory_gb);

        Ok(())
    }
}
