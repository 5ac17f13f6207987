//! Extension traits for `axum::Router` to easily apply middleware layers.

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::header::HeaderName;
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{CorsConfig, create_cors_layer};
use crate::middleware::error_handling::{catch_panic, handle_error};

/// Header carrying the generated request id.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extension trait for `axum::`[`Router`] for layering middleware.
pub trait RouterExt<S> {
    /// Layers [`HandleError`], [`CatchPanic`] and [`Timeout`] middlewares.
    ///
    /// Panicking handlers and requests exceeding the timeout both answer
    /// with the API's JSON error object instead of a bare 500.
    ///
    /// [`HandleError`]: axum::error_handling::HandleErrorLayer
    /// [`CatchPanic`]: tower_http::catch_panic::CatchPanicLayer
    /// [`Timeout`]: tower::timeout::TimeoutLayer
    fn with_error_handling_layer(self, timeout: Duration) -> Self;

    /// Layers [`SetRequestId`], [`Trace`] and [`PropagateRequestId`] middlewares.
    ///
    /// Every request gets a UUID `x-request-id`, a tracing span, and the id
    /// propagated onto the response.
    ///
    /// [`SetRequestId`]: tower_http::request_id::SetRequestIdLayer
    /// [`Trace`]: tower_http::trace::TraceLayer
    /// [`PropagateRequestId`]: tower_http::request_id::PropagateRequestIdLayer
    fn with_observability_layer(self) -> Self;

    /// Layers the CORS middleware built from the given configuration.
    ///
    /// With the default (empty) origin list this is fully permissive, which
    /// is what a mock standing in for a remote backend wants.
    fn with_cors_layer(self, config: &CorsConfig) -> Self;
}

impl<S> RouterExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_error_handling_layer(self, timeout: Duration) -> Self {
        let middlewares = ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_error))
            .layer(CatchPanicLayer::custom(catch_panic))
            .layer(TimeoutLayer::new(timeout));

        self.layer(middlewares)
    }

    fn with_observability_layer(self) -> Self {
        // Applied in reverse order (last layer wraps first).
        self.layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
    }

    fn with_cors_layer(self, config: &CorsConfig) -> Self {
        self.layer(create_cors_layer(config))
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::http::{Method, StatusCode, header};
    use axum::routing::get;
    use axum_test::TestServer;

    use super::*;

    async fn ping() -> &'static str {
        "pong"
    }

    fn layered_app() -> Router {
        Router::new()
            .route("/ping", get(ping))
            .with_cors_layer(&CorsConfig::default())
            .with_observability_layer()
    }

    #[tokio::test]
    async fn responses_carry_cors_and_request_id_headers() -> anyhow::Result<()> {
        let server = TestServer::new(layered_app())?;

        let response = server
            .get("/ping")
            .add_header(header::ORIGIN, "https://app.example")
            .await;
        response.assert_status_ok();

        assert!(
            response
                .maybe_header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_some()
        );
        assert!(response.maybe_header("x-request-id").is_some());

        Ok(())
    }

    #[tokio::test]
    async fn preflight_requests_succeed() -> anyhow::Result<()> {
        let server = TestServer::new(layered_app())?;

        let response = server
            .method(Method::OPTIONS, "/ping")
            .add_header(header::ORIGIN, "https://app.example")
            .add_header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(
            response
                .maybe_header(header::ACCESS_CONTROL_ALLOW_METHODS)
                .is_some()
        );

        Ok(())
    }
}
