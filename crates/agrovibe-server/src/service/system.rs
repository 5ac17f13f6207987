//! Host resource snapshot for the system-metrics endpoint.
//!
//! Live values come from [`sysinfo`] when the `sysinfo` feature is enabled.
//! When the feature is off, or the probe cannot produce sensible numbers,
//! a fixed fallback payload is served instead so the endpoint always
//! answers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tracing target for system metric operations.
const TRACING_TARGET: &str = "agrovibe_server::service::system";

/// Bytes per gibibyte.
const BYTES_PER_GB: f64 = (1024 * 1024 * 1024) as f64;

/// Point-in-time host resource utilization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SystemMetrics {
    /// Overall CPU utilization in percent.
    pub cpu_percent: f64,
    /// Memory utilization in percent.
    pub memory_percent: f64,
    /// Disk utilization in percent, summed over all mounted disks.
    pub disk_percent: f64,
    /// Available memory in GiB.
    pub available_memory_gb: f64,
    /// Total memory in GiB.
    pub total_memory_gb: f64,
}

impl SystemMetrics {
    /// Fixed payload served when live probing is unavailable.
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            cpu_percent: 25.5,
            memory_percent: 45.2,
            disk_percent: 62.1,
            available_memory_gb: 8.5,
            total_memory_gb: 16.0,
        }
    }

    /// Takes a host snapshot, falling back to the fixed payload.
    ///
    /// Probing blocks for a short CPU sampling interval; callers on an
    /// async runtime should wrap this in a blocking task.
    #[must_use]
    pub fn snapshot() -> Self {
        match Self::probe() {
            Some(metrics) => metrics,
            None => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    "Host probe unavailable, serving fallback metrics"
                );
                Self::fallback()
            }
        }
    }

    #[cfg(feature = "sysinfo")]
    fn probe() -> Option<Self> {
        use sysinfo::{Disks, System};

        let mut system = System::new();
        system.refresh_memory();

        // CPU utilization needs two samples a short interval apart.
        system.refresh_cpu_usage();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        system.refresh_cpu_usage();

        let total_memory = system.total_memory();
        if total_memory == 0 {
            return None;
        }
        let available_memory = system.available_memory();
        let used_memory = total_memory.saturating_sub(available_memory);

        let disks = Disks::new_with_refreshed_list();
        let (disk_total, disk_available) = disks
            .iter()
            .fold((0u64, 0u64), |(total, available), disk| {
                (
                    total + disk.total_space(),
                    available + disk.available_space(),
                )
            });
        let disk_percent = if disk_total == 0 {
            0.0
        } else {
            (disk_total.saturating_sub(disk_available)) as f64 / disk_total as f64 * 100.0
        };

        Some(Self {
            cpu_percent: f64::from(system.global_cpu_usage()),
            memory_percent: used_memory as f64 / total_memory as f64 * 100.0,
            disk_percent,
            available_memory_gb: available_memory as f64 / BYTES_PER_GB,
            total_memory_gb: total_memory as f64 / BYTES_PER_GB,
        })
    }

    #[cfg(not(feature = "sysinfo"))]
    fn probe() -> Option<Self> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_matches_the_documented_payload() {
        let metrics = SystemMetrics::fallback();
        assert_eq!(metrics.cpu_percent, 25.5);
        assert_eq!(metrics.memory_percent, 45.2);
        assert_eq!(metrics.disk_percent, 62.1);
        assert_eq!(metrics.available_memory_gb, 8.5);
        assert_eq!(metrics.total_memory_gb, 16.0);
    }

    #[test]
    fn snapshot_yields_plausible_percentages() {
        let metrics = SystemMetrics::snapshot();

        assert!((0.0..=100.0).contains(&metrics.memory_percent));
        assert!((0.0..=100.0).contains(&metrics.disk_percent));
        assert!(metrics.cpu_percent >= 0.0);
        assert!(metrics.total_memory_gb >= metrics.available_memory_gb);
    }

    #[test]
    fn serializes_with_contract_field_names() {
        let json = serde_json::to_value(SystemMetrics::fallback()).expect("serializes");
        assert!(json.get("cpu_percent").is_some());
        assert!(json.get("memory_percent").is_some());
        assert!(json.get("disk_percent").is_some());
        assert!(json.get("available_memory_gb").is_some());
        assert!(json.get("total_memory_gb").is_some());
    }
}
