//! Static workflow catalog seeded at startup.
//!
//! The catalog is the read-only half of the mock's data model: a fixed set
//! of workflow descriptors with their declared inputs and outputs. It never
//! changes after construction, so handlers share it through a cheap
//! reference-counted slice.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named input declaration of a workflow.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowInput {
    /// Parameter name.
    pub name: String,
    /// Declared value type (`string`, `integer`, `float`, `raster`, ...).
    #[serde(rename = "type")]
    pub data_type: String,
    /// Human-readable description.
    pub description: String,
    /// Whether the caller must supply this input.
    ///
    /// Omitted from the wire when the descriptor does not declare it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// A named output declaration of a workflow.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowOutput {
    /// Output name.
    pub name: String,
    /// Declared value type.
    #[serde(rename = "type")]
    pub data_type: String,
    /// Human-readable description.
    pub description: String,
}

/// A statically described unit of (mock) computation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Workflow {
    /// Unique workflow name, used as the lookup key.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Ordered input declarations.
    pub inputs: Vec<WorkflowInput>,
    /// Ordered output declarations.
    pub outputs: Vec<WorkflowOutput>,
}

impl Workflow {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    fn with_input(mut self, name: &str, data_type: &str, description: &str) -> Self {
        self.inputs.push(WorkflowInput {
            name: name.to_string(),
            data_type: data_type.to_string(),
            description: description.to_string(),
            required: None,
        });
        self
    }

    /// Like [`Workflow::with_input`], but with the `required` flag declared.
    fn with_optional_input(mut self, name: &str, data_type: &str, description: &str) -> Self {
        self.inputs.push(WorkflowInput {
            name: name.to_string(),
            data_type: data_type.to_string(),
            description: description.to_string(),
            required: Some(false),
        });
        self
    }

    fn with_output(mut self, name: &str, data_type: &str, description: &str) -> Self {
        self.outputs.push(WorkflowOutput {
            name: name.to_string(),
            data_type: data_type.to_string(),
            description: description.to_string(),
        });
        self
    }
}

/// Shared handle to the static workflow catalog.
///
/// Seeded once at startup and immutable afterwards, so clones only bump a
/// reference count.
#[must_use = "catalog does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct WorkflowCatalog {
    workflows: Arc<[Workflow]>,
}

impl WorkflowCatalog {
    /// Returns the catalog seeded with the fixed workflow set.
    pub fn seeded() -> Self {
        Self {
            workflows: seed_workflows().into(),
        }
    }

    /// Returns all workflow descriptors in seed order.
    pub fn all(&self) -> &[Workflow] {
        &self.workflows
    }

    /// Finds a workflow descriptor by exact name match.
    pub fn find(&self, name: &str) -> Option<&Workflow> {
        self.workflows.iter().find(|workflow| workflow.name == name)
    }

    /// Returns the number of seeded workflows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}

impl Default for WorkflowCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Builds the fixed workflow set the frontend expects.
fn seed_workflows() -> Vec<Workflow> {
    vec![
        Workflow::new("helloworld", "Simple example to get started with Agrovibe")
            .with_optional_input("region", "string", "Region name")
            .with_output("result", "string", "Result data"),
        Workflow::new(
            "harvest_period",
            "Detect harvest dates using NDVI time-series from Sentinel 2 data",
        )
        .with_output("ndvi_data", "raster", "NDVI time series"),
        Workflow::new(
            "carbon",
            "Estimate soil carbon footprint based on agriculture practices",
        )
        .with_input("practice", "string", "Agricultural practice")
        .with_output("carbon_estimate", "float", "Carbon estimate in tons"),
        Workflow::new(
            "crop_segmentation",
            "Train and apply crop identification models based on NDVI data",
        )
        .with_input("model_name", "string", "Model identifier")
        .with_output("segmentation_map", "raster", "Crop segmentation map"),
        Workflow::new(
            "irrigation_classification",
            "Classify irrigated vs rain-fed fields",
        )
        .with_output("irrigation_map", "raster", "Irrigation classification"),
        Workflow::new(
            "weed_detection",
            "Identify and map weed presence in agricultural fields",
        )
        .with_output("weed_map", "raster", "Weed detection map"),
        Workflow::new(
            "forest_change_detection",
            "Monitor forest coverage changes over time using satellite data",
        )
        .with_input("start_year", "integer", "Start year")
        .with_input("end_year", "integer", "End year")
        .with_output("change_map", "raster", "Forest change map"),
        Workflow::new(
            "ghg_fluxes",
            "Calculate greenhouse gas emissions from agricultural activities",
        )
        .with_output("ghg_estimate", "float", "GHG emissions estimate"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_seeded_with_fixed_set() {
        let catalog = WorkflowCatalog::seeded();
        assert_eq!(catalog.len(), 8);
        assert!(!catalog.is_empty());

        // Seed order is part of the contract the frontend relies on.
        assert_eq!(catalog.all()[0].name, "helloworld");
        assert_eq!(catalog.all()[7].name, "ghg_fluxes");
    }

    #[test]
    fn find_matches_exact_names_only() {
        let catalog = WorkflowCatalog::seeded();

        let carbon = catalog.find("carbon").expect("carbon is seeded");
        assert_eq!(carbon.inputs.len(), 1);
        assert_eq!(carbon.inputs[0].name, "practice");
        assert_eq!(carbon.outputs[0].data_type, "float");

        assert!(catalog.find("carb").is_none());
        assert!(catalog.find("CARBON").is_none());
    }

    #[test]
    fn clones_share_the_same_seed() {
        let catalog = WorkflowCatalog::seeded();
        let clone = catalog.clone();
        assert_eq!(catalog.len(), clone.len());
    }

    #[test]
    fn input_type_serializes_under_type_key() {
        let catalog = WorkflowCatalog::seeded();
        let json = serde_json::to_value(catalog.find("helloworld").expect("seeded"))
            .expect("workflow serializes");

        assert_eq!(json["inputs"][0]["type"], "string");
        assert_eq!(json["outputs"][0]["name"], "result");
    }

    #[test]
    fn required_flag_serializes_only_when_declared() {
        let catalog = WorkflowCatalog::seeded();

        // helloworld declares the flag on its input.
        let hello = serde_json::to_value(catalog.find("helloworld").expect("seeded"))
            .expect("workflow serializes");
        assert_eq!(hello["inputs"][0]["required"], false);

        // Every other descriptor omits the key entirely.
        let carbon = serde_json::to_value(catalog.find("carbon").expect("seeded"))
            .expect("workflow serializes");
        assert!(carbon["inputs"][0].get("required").is_none());
    }
}
