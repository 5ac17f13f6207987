//! Path parameter extractor with JSON error responses.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path as AxumPath};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Path extractor whose rejections match the API error shape.
///
/// A malformed path parameter (for example a run id that is not a UUID)
/// answers with the `{"error": ...}` object and a 400 status.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
    /// Creates a new [`Path`] wrapper around the provided parameters.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumPath::<T>::from_request_parts(parts, state).await {
            Ok(AxumPath(params)) => Ok(Self(params)),
            Err(rejection) => Err(map_path_rejection(rejection)),
        }
    }
}

fn map_path_rejection(rejection: PathRejection) -> Error<'static> {
    match rejection {
        PathRejection::FailedToDeserializePathParams(err) => ErrorKind::BadRequest
            .with_message("Invalid path parameter")
            .with_context(format!("Path deserialization failed: {err}")),
        PathRejection::MissingPathParams(err) => ErrorKind::BadRequest
            .with_message("Missing required path parameter")
            .with_context(err.to_string()),
        rejection => ErrorKind::InternalServerError
            .with_message("Failed to read path parameters")
            .with_context(format!("Path rejection: {rejection}")),
    }
}

impl<T> aide::OperationInput for Path<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumPath::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        AxumPath::<T>::inferred_early_responses(ctx, operation)
    }
}
