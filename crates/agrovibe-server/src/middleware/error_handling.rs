//! Error handling middleware for transforming errors into responses.

use std::any::Any;
use std::future::ready;

use axum::response::{IntoResponse, Response};
use futures::future::{BoxFuture, FutureExt};

use crate::handler::{Error, ErrorKind};

/// Tracing target for middleware error handling.
const TRACING_TARGET: &str = "agrovibe_server::middleware::error_handling";

type ResponseFut = BoxFuture<'static, Response>;

type Panic = Box<dyn Any + Send + 'static>;

/// Transforms any [`tower::BoxError`] into an [`Error`] response.
///
/// Timeouts get a dedicated message; everything else surfaces as a generic
/// internal server error so the `{"error": ...}` contract holds even for
/// middleware failures.
pub fn handle_error(err: tower::BoxError) -> ResponseFut {
    use tower::timeout::error::Elapsed;

    let error = if err.downcast_ref::<Elapsed>().is_some() {
        tracing::error!(
            target: TRACING_TARGET,
            error = %err,
            "Request timeout exceeded"
        );

        Error::new(ErrorKind::InternalServerError)
            .with_message("Request timeout")
            .with_context("The request took too long to process and was terminated")
    } else {
        tracing::error!(
            target: TRACING_TARGET,
            error = %err,
            "Unknown middleware error"
        );

        Error::new(ErrorKind::InternalServerError)
            .with_message("An unexpected error occurred")
            .with_context(err.to_string())
    };

    ready(error.into_response()).boxed()
}

/// Transforms any panic into an [`Error`] and then a [`Response`].
pub fn catch_panic(err: Panic) -> Response {
    if let Some(panic) = err.downcast_ref::<String>() {
        tracing::error!(target: TRACING_TARGET, "handler panic: {}", panic);
    } else if let Some(panic) = err.downcast_ref::<&str>() {
        tracing::error!(target: TRACING_TARGET, "handler panic: {}", panic);
    } else {
        tracing::error!(target: TRACING_TARGET, "handler panic: unknown panic type");
    }

    ErrorKind::InternalServerError.into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[tokio::test]
    async fn timeouts_become_internal_errors() {
        let err: tower::BoxError = Box::new(tower::timeout::error::Elapsed::new());
        let response = handle_error(err).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn panics_become_internal_errors() {
        let panic: Panic = Box::new("boom".to_string());
        let response = catch_panic(panic);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
