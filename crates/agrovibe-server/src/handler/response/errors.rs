//! Wire representation of handler errors.

use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// HTTP error response body.
///
/// Serializes to the `{"error": <message>}` object the frontend contract
/// expects; the status code travels out of band.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse<'a> {
    /// User-facing error message.
    pub error: Cow<'a, str>,
    /// HTTP status code (not serialized in JSON).
    #[serde(skip)]
    #[schemars(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new(
        "The request could not be processed due to invalid data",
        StatusCode::BAD_REQUEST,
    );
    // 5xx Server Errors
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "An internal server error occurred. Please try again later",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const NOT_FOUND: Self = Self::new(
        "The requested resource was not found",
        StatusCode::NOT_FOUND,
    );

    /// Creates a new error response.
    #[inline]
    pub const fn new(error: &'a str, status: StatusCode) -> Self {
        Self {
            error: Cow::Borrowed(error),
            status,
        }
    }

    /// Replaces the user-facing message.
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.error = message.into();
        self
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse<'_> {
    #[inline]
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_the_contract_shape() {
        let response = ErrorResponse::NOT_FOUND.with_message("Run not found");
        let json = serde_json::to_value(&response).expect("serializes");

        assert_eq!(json, serde_json::json!({"error": "Run not found"}));
    }

    #[test]
    fn status_is_not_serialized() {
        let json = serde_json::to_string(&ErrorResponse::BAD_REQUEST).expect("serializes");
        assert!(!json.contains("status"));
        assert!(!json.contains("400"));
    }
}
