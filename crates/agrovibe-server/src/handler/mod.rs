//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust
//! use agrovibe_server::handler;
//! use agrovibe_server::service::{ServiceConfig, ServiceState};
//! use aide::openapi::OpenApi;
//!
//! let config = ServiceConfig::default();
//! let state = ServiceState::from_config(&config);
//!
//! let mut api = OpenApi::default();
//! let router: axum::Router = handler::routes()
//!     .with_state(state)
//!     .finish_api(&mut api);
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod error;
mod metrics;
mod monitors;
pub mod request;
mod response;
mod runs;
mod workflows;

use aide::axum::ApiRouter;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
pub(crate) use crate::handler::response::ErrorResponse;
pub use crate::handler::response::{AckResponse, HealthResponse, RunsPage};
use crate::service::ServiceState;

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an [`ApiRouter`] with all routes.
pub fn routes() -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .merge(monitors::routes())
        .merge(workflows::routes())
        .merge(runs::routes())
        .merge(metrics::routes())
        .fallback(handler)
}

#[cfg(test)]
mod test {
    use aide::openapi::OpenApi;
    use axum_test::TestServer;

    use crate::handler::routes;
    use crate::service::{ServiceConfig, ServiceState};

    /// Returns a new [`TestServer`] with the given state.
    pub fn create_test_server_with_state(state: ServiceState) -> anyhow::Result<TestServer> {
        let mut api = OpenApi::default();
        let app = routes().with_state(state).finish_api(&mut api);
        let server = TestServer::new(app)?;
        Ok(server)
    }

    /// Returns a new [`TestServer`] with the default state.
    pub fn create_test_server() -> anyhow::Result<TestServer> {
        let config = ServiceConfig::default();
        let state = ServiceState::from_config(&config);
        create_test_server_with_state(state)
    }

    #[tokio::test]
    async fn handlers() -> anyhow::Result<()> {
        let server = create_test_server()?;
        assert!(server.is_running());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_routes_report_not_found() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/v0/no-such-route").await;
        response.assert_status_not_found();

        let body = response.json::<serde_json::Value>();
        assert!(body.get("error").is_some());

        Ok(())
    }
}
