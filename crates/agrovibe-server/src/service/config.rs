use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Default values for configuration options.
mod defaults {
    /// Default service name reported by the health check endpoint.
    pub const SERVICE_NAME: &str = "agrovibe-mock-api";

    /// Default seconds after submission before a run reports `running`.
    pub const RUNNING_AFTER_SECS: i64 = 2;

    /// Default seconds after submission before a run reports `completed`.
    pub const COMPLETED_AFTER_SECS: i64 = 5;
}

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[must_use = "config does nothing unless you use it"]
#[builder(
    pattern = "owned",
    setter(into, prefix = "with"),
    build_fn(validate = "Self::validate")
)]
pub struct ServiceConfig {
    /// Service name reported by the health check endpoint.
    #[builder(default = "defaults::SERVICE_NAME.to_string()")]
    pub service_name: String,

    /// Seconds after submission before a run reports the `running` status.
    ///
    /// The status simulation is lazy: transitions are evaluated against the
    /// elapsed wall-clock time whenever a run is fetched.
    #[builder(default = "defaults::RUNNING_AFTER_SECS")]
    pub running_after_secs: i64,

    /// Seconds after submission before a run reports the `completed` status
    /// and receives its fixture output artifacts.
    #[builder(default = "defaults::COMPLETED_AFTER_SECS")]
    pub completed_after_secs: i64,
}

impl ServiceConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: defaults::SERVICE_NAME.to_string(),
            running_after_secs: defaults::RUNNING_AFTER_SECS,
            completed_after_secs: defaults::COMPLETED_AFTER_SECS,
        }
    }
}

impl ServiceConfigBuilder {
    /// Validates the configuration before constructing [`ServiceConfig`].
    fn validate(&self) -> Result<(), String> {
        let running = self
            .running_after_secs
            .unwrap_or(defaults::RUNNING_AFTER_SECS);
        let completed = self
            .completed_after_secs
            .unwrap_or(defaults::COMPLETED_AFTER_SECS);

        if running < 0 || completed < 0 {
            return Err("simulation delays must be non-negative".to_string());
        }

        if completed < running {
            return Err(format!(
                "completed_after_secs ({completed}) must not be below running_after_secs ({running})"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ServiceConfig::default();
        assert_eq!(config.service_name, "agrovibe-mock-api");
        assert!(config.running_after_secs <= config.completed_after_secs);
    }

    #[test]
    fn builder_applies_overrides() {
        let config = ServiceConfig::builder()
            .with_service_name("test-api")
            .with_running_after_secs(0i64)
            .with_completed_after_secs(0i64)
            .build()
            .expect("valid config");

        assert_eq!(config.service_name, "test-api");
        assert_eq!(config.running_after_secs, 0);
        assert_eq!(config.completed_after_secs, 0);
    }

    #[test]
    fn builder_rejects_inverted_delays() {
        let result = ServiceConfig::builder()
            .with_running_after_secs(10i64)
            .with_completed_after_secs(5i64)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn builder_rejects_negative_delays() {
        let result = ServiceConfig::builder()
            .with_running_after_secs(-1i64)
            .build();

        assert!(result.is_err());
    }
}
