//! OpenAPI specification middleware with Scalar UI integration.
//!
//! Generates the OpenAPI document from [`aide`]'s [`ApiRouter`] annotations
//! and serves it as JSON along with a Scalar UI for interactive exploration.
//!
//! # Usage
//!
//! ```rust
//! use aide::axum::ApiRouter;
//! use axum::Router;
//! use agrovibe_server::middleware::{OpenApiConfig, RouterOpenApiExt};
//!
//! let app: Router<()> = ApiRouter::new()
//!     .with_open_api(OpenApiConfig::default());
//! ```
//!
//! [`aide`]: https://docs.rs/aide
//! [`ApiRouter`]: aide::axum::ApiRouter

use aide::axum::ApiRouter;
use aide::openapi::{Contact, Info, OpenApi};
use aide::scalar::Scalar;
use axum::routing::{Router, get};
use axum::{Extension, Json};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

/// OpenAPI configuration for aide integration.
///
/// Configures the paths where the OpenAPI JSON specification and
/// Scalar UI will be served.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct OpenApiConfig {
    /// Path which exposes the OpenAPI JSON specification.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "OPENAPI_JSON_PATH", default_value = "/api/openapi.json")
    )]
    pub open_api_json: String,

    /// Path which exposes the Scalar API reference UI.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "OPENAPI_SCALAR_PATH", default_value = "/api/scalar")
    )]
    pub scalar_ui: String,
}

impl Default for OpenApiConfig {
    fn default() -> Self {
        Self {
            open_api_json: "/api/openapi.json".to_owned(),
            scalar_ui: "/api/scalar".to_owned(),
        }
    }
}

/// Extension trait for [`ApiRouter`] to add OpenAPI documentation with Scalar UI.
///
/// [`ApiRouter`]: aide::axum::ApiRouter
pub trait RouterOpenApiExt<S> {
    /// Adds OpenAPI documentation routes with default API info.
    ///
    /// This method:
    /// - Generates the OpenAPI specification from the router's API routes
    /// - Adds a route to serve the OpenAPI JSON specification
    /// - Adds a route to serve the Scalar API reference UI
    fn with_open_api(self, config: OpenApiConfig) -> Router<S>;

    /// Adds OpenAPI documentation routes with custom OpenAPI info.
    ///
    /// Use this method for full control over the OpenAPI [`Info`] object.
    ///
    /// [`Info`]: aide::openapi::Info
    fn with_open_api_info(self, config: OpenApiConfig, info: Info) -> Router<S>;
}

impl<S> RouterOpenApiExt<S> for ApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_open_api(self, config: OpenApiConfig) -> Router<S> {
        let info = Info {
            title: "Agrovibe Mock API".to_owned(),
            summary: Some("Mock geospatial workflow orchestration API".to_owned()),
            description: Some(
                "Stand-in for the Agrovibe workflow platform. Serves a static \
                workflow catalog, an in-memory run table with simulated status \
                progression, and fixture visualization payloads for frontend \
                development without the real backend."
                    .to_owned(),
            ),
            contact: Some(Contact {
                name: Some("Agrovibe".to_owned()),
                url: Some("https://github.com/agrovibe/mock-api".to_owned()),
                email: Some("contact@agrovibe.dev".to_owned()),
                ..Contact::default()
            }),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            ..Info::default()
        };

        self.with_open_api_info(config, info)
    }

    fn with_open_api_info(self, config: OpenApiConfig, info: Info) -> Router<S> {
        async fn serve_openapi(Extension(api): Extension<OpenApi>) -> Json<OpenApi> {
            Json(api)
        }

        let mut api = OpenApi {
            info,
            ..OpenApi::default()
        };

        let scalar = Scalar::new(&config.open_api_json);
        let router = self
            .route(&config.scalar_ui, scalar.axum_route())
            .route(&config.open_api_json, get(serve_openapi));

        router.finish_api(&mut api).layer(Extension(api))
    }
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    use super::*;
    use crate::handler;
    use crate::service::ServiceState;

    #[tokio::test]
    async fn openapi_document_covers_the_api_surface() -> anyhow::Result<()> {
        let config = OpenApiConfig::default();
        let app = handler::routes()
            .with_state(ServiceState::default())
            .with_open_api(config.clone());
        let server = TestServer::new(app)?;

        let response = server.get(&config.open_api_json).await;
        response.assert_status_ok();

        let spec = response.json::<serde_json::Value>();
        assert_eq!(spec["info"]["title"], "Agrovibe Mock API");

        let paths = spec["paths"].as_object().expect("paths object");
        assert!(paths.contains_key("/v0/workflows"));
        assert!(paths.contains_key("/v0/runs"));
        assert!(paths.contains_key("/v0/system-metrics"));

        Ok(())
    }

    #[tokio::test]
    async fn fallible_operations_document_their_error_responses() -> anyhow::Result<()> {
        let config = OpenApiConfig::default();
        let app = handler::routes()
            .with_state(ServiceState::default())
            .with_open_api(config.clone());
        let server = TestServer::new(app)?;

        let spec = server
            .get(&config.open_api_json)
            .await
            .json::<serde_json::Value>();
        let paths = spec["paths"].as_object().expect("paths object");

        // Handlers returning Result<_, Error> register with both their
        // success and error responses.
        let get_run = &paths["/v0/runs/{id}"]["get"]["responses"];
        assert!(get_run.get("200").is_some());
        assert!(get_run.get("404").is_some());

        let cancel_run = &paths["/v0/runs/{id}/cancel"]["post"]["responses"];
        assert!(cancel_run.get("404").is_some());

        let describe = &paths["/v0/workflows/{name}"]["get"]["responses"];
        assert!(describe.get("404").is_some());

        Ok(())
    }

    #[tokio::test]
    async fn scalar_ui_is_served() -> anyhow::Result<()> {
        let config = OpenApiConfig::default();
        let app = handler::routes()
            .with_state(ServiceState::default())
            .with_open_api(config.clone());
        let server = TestServer::new(app)?;

        let response = server.get(&config.scalar_ui).await;
        response.assert_status_ok();

        Ok(())
    }
}
