#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use agrovibe_server::handler;
use agrovibe_server::middleware::{RouterExt, RouterOpenApiExt};
use agrovibe_server::service::ServiceState;
use anyhow::Context;
use axum::Router;
use clap::Parser;

use crate::config::{Cli, MiddlewareConfig, ServerConfig};

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "agrovibe_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "agrovibe_cli::server::shutdown";

/// Tracing target for configuration events.
pub const TRACING_TARGET_CONFIG: &str = "agrovibe_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );

        if let Some(suggestion) = error
            .downcast_ref::<server::ServerError>()
            .and_then(server::ServerError::suggestion)
        {
            tracing::info!(
                target: TRACING_TARGET_SHUTDOWN,
                suggestion = suggestion,
                "Recovery suggestion"
            );
        }
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    Cli::init_tracing();
    cli.validate()?;
    cli.log();

    let service_config = cli
        .simulation
        .to_service_config()
        .context("failed to build service configuration")?;
    let state = ServiceState::from_config(&service_config);
    let router = create_router(state, &cli.middleware, &cli.server);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Error handling (outermost) - catches panics and enforces timeouts
/// 2. Observability - request IDs and tracing spans
/// 3. CORS - permissive cross-origin headers
/// 4. Routes (innermost) - handlers plus the OpenAPI/Scalar endpoints
fn create_router(
    state: ServiceState,
    middleware: &MiddlewareConfig,
    server: &ServerConfig,
) -> Router {
    let api_routes: Router = handler::routes()
        .with_state(state)
        .with_open_api(middleware.openapi.clone());

    api_routes
        .with_cors_layer(&middleware.cors)
        .with_observability_layer()
        .with_error_handling_layer(server.request_timeout())
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use clap::Parser;

    use super::*;

    #[tokio::test]
    async fn assembled_router_serves_the_contract() -> anyhow::Result<()> {
        let cli = Cli::parse_from(["agrovibe"]);
        let service_config = cli.simulation.to_service_config()?;
        let state = ServiceState::from_config(&service_config);
        let router = create_router(state, &cli.middleware, &cli.server);

        let server = TestServer::new(router)?;

        server.get("/v0/").await.assert_status_ok();
        server.get("/v0/workflows").await.assert_status_ok();
        server.get("/api/openapi.json").await.assert_status_ok();

        Ok(())
    }
}
