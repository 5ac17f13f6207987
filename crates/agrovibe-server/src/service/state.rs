//! Application state and dependency injection.

use crate::service::{RunStore, ServiceConfig, WorkflowCatalog};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    config: ServiceConfig,
    catalog: WorkflowCatalog,
    run_store: RunStore,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Seeds the static workflow catalog and an empty run table.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            config: config.clone(),
            catalog: WorkflowCatalog::seeded(),
            run_store: RunStore::from_config(config),
        }
    }
}

impl Default for ServiceState {
    fn default() -> Self {
        Self::from_config(&ServiceConfig::default())
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+ $(,)?) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(config: ServiceConfig);
impl_di!(catalog: WorkflowCatalog);
impl_di!(run_store: RunStore);

#[cfg(test)]
mod tests {
    use axum::extract::FromRef;

    use super::*;

    #[test]
    fn state_exposes_its_services() {
        let state = ServiceState::default();

        let catalog = WorkflowCatalog::from_ref(&state);
        assert!(!catalog.is_empty());

        let config = ServiceConfig::from_ref(&state);
        assert_eq!(config.service_name, "agrovibe-mock-api");
    }

    #[test]
    fn cloned_states_share_the_run_table() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .expect("runtime");

        runtime.block_on(async {
            let state = ServiceState::default();
            let store = RunStore::from_ref(&state);
            let run = store
                .submit(
                    "carbon".to_string(),
                    "Untitled".to_string(),
                    serde_json::Map::new(),
                )
                .await;

            let other = RunStore::from_ref(&state.clone());
            assert!(other.get(run.id).await.is_some());
        });
    }
}
