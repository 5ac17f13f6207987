//! Middleware configuration for the HTTP server.
//!
//! Groups the CLI-configurable middleware settings (CORS and OpenAPI
//! documentation paths) re-exported from `agrovibe-server`.
//!
//! # Example
//!
//! ```bash
//! # Restrict CORS to one origin and move the Scalar UI
//! agrovibe-cli --cors-origins "https://app.agrovibe.dev" \
//!     --openapi-scalar-path /docs
//! ```

use agrovibe_server::middleware::{CorsConfig, OpenApiConfig};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Middleware configuration combining CORS and OpenAPI settings.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// CORS (Cross-Origin Resource Sharing) configuration.
    ///
    /// Permissive when no origins are configured, which is the contract the
    /// frontend under test expects from the mock.
    #[clap(flatten)]
    pub cors: CorsConfig,

    /// OpenAPI documentation configuration.
    ///
    /// Configures the paths where the OpenAPI JSON specification and the
    /// Scalar UI are served.
    #[clap(flatten)]
    pub openapi: OpenApiConfig,
}

impl MiddlewareConfig {
    /// Logs middleware configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            origins = ?self.cors.allowed_origins,
            credentials = self.cors.allow_credentials,
            "CORS configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            openapi_path = %self.openapi.open_api_json,
            scalar_path = %self.openapi.scalar_ui,
            "OpenAPI configuration"
        );
    }
}
