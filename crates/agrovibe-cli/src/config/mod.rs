//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── server: ServerConfig          # Host, port, timeouts
//! ├── middleware: MiddlewareConfig  # CORS, OpenAPI paths
//! └── simulation: SimulationConfig  # Service name, status delays
//! ```
//!
//! All configuration can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.

mod middleware;
mod server;
mod simulation;

use std::process;

use anyhow::Context;
use clap::Parser;
pub use middleware::MiddlewareConfig;
pub use server::ServerConfig;
use serde::{Deserialize, Serialize};
pub use simulation::SimulationConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::TRACING_TARGET_STARTUP;

/// Complete CLI configuration.
///
/// Combines all configuration groups for the mock server:
/// - [`ServerConfig`]: Network binding and lifecycle timeouts
/// - [`MiddlewareConfig`]: HTTP middleware (CORS, OpenAPI)
/// - [`SimulationConfig`]: Run status simulation behavior
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "agrovibe")]
#[command(about = "Agrovibe mock API server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// HTTP middleware configuration (CORS, OpenAPI).
    #[clap(flatten)]
    pub middleware: MiddlewareConfig,

    /// Run status simulation configuration.
    #[clap(flatten)]
    pub simulation: SimulationConfig,
}

impl Cli {
    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        self.simulation
            .validate()
            .context("invalid simulation configuration")?;
        Ok(())
    }

    /// Logs configuration at startup.
    pub fn log(&self) {
        Self::log_build_info();
        self.server.log();
        self.middleware.log();
        self.simulation.log();
    }

    /// Logs build information at debug level.
    fn log_build_info() {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            live_metrics = cfg!(feature = "sysinfo"),
            "Build information"
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_arguments_are_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_parse_and_validate() {
        let cli = Cli::parse_from(["agrovibe"]);
        assert!(cli.validate().is_ok());
        assert_eq!(cli.server.port, 31108);
    }

    #[test]
    fn simulation_delays_are_configurable() {
        let cli = Cli::parse_from([
            "agrovibe",
            "--running-after-secs",
            "0",
            "--completed-after-secs",
            "0",
        ]);
        assert!(cli.validate().is_ok());
        assert_eq!(cli.simulation.running_after_secs, 0);
    }
}
