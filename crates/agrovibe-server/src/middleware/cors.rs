//! CORS (Cross-Origin Resource Sharing) middleware configuration.
//!
//! The mock's contract is permissive by default: every response carries
//! cross-origin headers and OPTIONS preflights succeed for any origin, so
//! a frontend under development can talk to it from anywhere. Explicit
//! origins can still be configured to exercise a stricter setup.

use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer based on the provided configuration.
///
/// With no configured origins the layer mirrors any request origin.
/// Credentials are only allowed together with an explicit origin list,
/// since the CORS protocol forbids combining them with a wildcard.
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = config.to_header_values();

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(config.max_age());

    match origins {
        Some(origins) => layer
            .allow_origin(origins)
            .allow_credentials(config.allow_credentials),
        None => layer.allow_origin(AllowOrigin::any()),
    }
}

/// CORS (Cross-Origin Resource Sharing) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct CorsConfig {
    /// List of allowed CORS origins. If empty, any origin is allowed.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "CORS_ORIGINS", value_delimiter = ',')
    )]
    pub allowed_origins: Vec<String>,

    /// Maximum age for CORS preflight requests in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "CORS_MAX_AGE", default_value_t = 3600)
    )]
    pub max_age_seconds: u64,

    /// Whether to allow credentials in CORS requests.
    ///
    /// Only honored together with an explicit origin list.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "CORS_ALLOW_CREDENTIALS", default_value_t = false)
    )]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age_seconds: 3600,
            allow_credentials: false,
        }
    }
}

impl CorsConfig {
    /// Returns the CORS max age as a [`Duration`].
    #[must_use]
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_seconds)
    }

    /// Converts configured origins to a [`HeaderValue`] list.
    ///
    /// Returns `None` when no origins are configured, which callers map to
    /// a wildcard.
    pub fn to_header_values(&self) -> Option<Vec<HeaderValue>> {
        if self.allowed_origins.is_empty() {
            return None;
        }

        Some(
            self.allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect(),
        )
    }
}
