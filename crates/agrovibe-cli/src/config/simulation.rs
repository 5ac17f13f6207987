//! Run status simulation configuration.

use agrovibe_server::service::ServiceConfig;
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Configuration for the lazy run status simulation.
///
/// Runs advance `submitted → running → completed` based on elapsed time
/// since submission, evaluated whenever a run is fetched. Setting both
/// delays to zero completes every run on its first fetch, which is handy
/// for frontend tests.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct SimulationConfig {
    /// Service name reported by the health check endpoint.
    #[arg(long, env = "SERVICE_NAME", default_value = "agrovibe-mock-api")]
    pub service_name: String,

    /// Seconds after submission before a run reports `running`.
    #[arg(long, env = "RUNNING_AFTER_SECS", default_value_t = 2)]
    pub running_after_secs: i64,

    /// Seconds after submission before a run reports `completed`.
    #[arg(long, env = "COMPLETED_AFTER_SECS", default_value_t = 5)]
    pub completed_after_secs: i64,
}

impl SimulationConfig {
    /// Validates the simulation delays by building the service config.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.to_service_config()?;
        Ok(())
    }

    /// Builds the library-level [`ServiceConfig`] from the CLI values.
    pub fn to_service_config(&self) -> anyhow::Result<ServiceConfig> {
        let config = ServiceConfig::builder()
            .with_service_name(self.service_name.clone())
            .with_running_after_secs(self.running_after_secs)
            .with_completed_after_secs(self.completed_after_secs)
            .build()
            .map_err(|err| anyhow::anyhow!("{err}"))?;

        Ok(config)
    }

    /// Logs simulation configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            service_name = %self.service_name,
            running_after_secs = self.running_after_secs,
            completed_after_secs = self.completed_after_secs,
            "Simulation configuration"
        );
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            service_name: "agrovibe-mock-api".to_string(),
            running_after_secs: 2,
            completed_after_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_a_service_config() {
        let config = SimulationConfig::default();
        let service = config.to_service_config().expect("valid config");
        assert_eq!(service.service_name, "agrovibe-mock-api");
        assert_eq!(service.running_after_secs, 2);
    }

    #[test]
    fn inverted_delays_fail_validation() {
        let config = SimulationConfig {
            running_after_secs: 10,
            completed_after_secs: 5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
