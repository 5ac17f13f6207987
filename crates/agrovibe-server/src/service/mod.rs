//! Service layer: configuration, state, and the mock's data sources.

mod catalog;
mod config;
pub mod fixtures;
mod run_store;
mod state;
mod system;

pub use crate::service::catalog::{Workflow, WorkflowCatalog, WorkflowInput, WorkflowOutput};
pub use crate::service::config::{ServiceConfig, ServiceConfigBuilder};
pub use crate::service::run_store::{ArtifactKind, OutputArtifact, Run, RunStatus, RunStore};
pub use crate::service::state::ServiceState;
pub use crate::service::system::SystemMetrics;
