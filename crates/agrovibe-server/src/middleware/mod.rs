//! Middleware for `axum::Router` and HTTP request processing.
//!
//! This module provides middleware for:
//! - CORS (permissive by default, matching the mock's contract)
//! - Observability (tracing, request IDs)
//! - Error handling (panics, timeouts)
//! - OpenAPI documentation with Scalar UI
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use axum::Router;
//! use agrovibe_server::middleware::{CorsConfig, RouterExt};
//!
//! let app: Router<()> = Router::new()
//!     .with_cors_layer(&CorsConfig::default())
//!     .with_observability_layer()
//!     .with_error_handling_layer(Duration::from_secs(30));
//! ```

mod cors;
mod error_handling;
mod extensions;
mod specification;

pub use cors::{CorsConfig, create_cors_layer};
pub use extensions::RouterExt;
pub use specification::{OpenApiConfig, RouterOpenApiExt};
