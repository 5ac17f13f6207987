//! Fixture visualization payloads attached to completed runs.
//!
//! Each generator produces a lightly-randomized JSON payload shaped like the
//! real platform's output artifacts, so frontend charts render something
//! plausible. The payloads are fixtures: values are synthesized, not
//! computed.

use rand::RngExt;
use serde_json::{Value, json};

use crate::service::run_store::{ArtifactKind, OutputArtifact};

/// Number of daily samples in the NDVI time series.
const NDVI_SERIES_DAYS: usize = 150;

/// First sampled day of the simulated growing season.
const NDVI_SERIES_START: jiff::civil::Date = jiff::civil::date(2023, 4, 1);

/// Returns the output artifacts for a completed run of the named workflow.
///
/// Unknown workflow names receive a default time-series artifact, mirroring
/// the behavior of the platform this mock stands in for.
pub fn artifacts_for(workflow: &str) -> Vec<OutputArtifact> {
    match workflow {
        "harvest_period" => vec![OutputArtifact {
            name: "ndvi_timeseries.json".to_string(),
            mime_type: "application/json".to_string(),
            kind: ArtifactKind::Timeseries,
            visualization: time_series_visualization(),
            url: "https://example.com/ndvi_timeseries.json".to_string(),
        }],
        "crop_segmentation" => vec![OutputArtifact {
            name: "crop_classification.tif".to_string(),
            mime_type: "image/tiff".to_string(),
            kind: ArtifactKind::Categorical,
            visualization: categorical_visualization(),
            url: "https://example.com/crop_classification.tif".to_string(),
        }],
        "carbon" => vec![OutputArtifact {
            name: "carbon_sequestration.json".to_string(),
            mime_type: "application/json".to_string(),
            kind: ArtifactKind::Timeseries,
            visualization: carbon_visualization(),
            url: "https://example.com/carbon_sequestration.json".to_string(),
        }],
        "irrigation_classification" => vec![OutputArtifact {
            name: "irrigation_map.tif".to_string(),
            mime_type: "image/tiff".to_string(),
            kind: ArtifactKind::Categorical,
            visualization: categorical_visualization(),
            url: "https://example.com/irrigation_map.tif".to_string(),
        }],
        _ => vec![OutputArtifact {
            name: "results.json".to_string(),
            mime_type: "application/json".to_string(),
            kind: ArtifactKind::Timeseries,
            visualization: time_series_visualization(),
            url: "https://example.com/results.json".to_string(),
        }],
    }
}

/// NDVI growth curve over a simulated growing season.
///
/// Follows a sigmoid from dormancy to peak vegetation with a little noise
/// on top, plus a correlated EVI series.
pub fn time_series_visualization() -> Value {
    let mut rng = rand::rng();
    let mut data = Vec::with_capacity(NDVI_SERIES_DAYS);
    let mut date = NDVI_SERIES_START;

    for i in 0..NDVI_SERIES_DAYS {
        let progress = i as f64 / NDVI_SERIES_DAYS as f64;
        let growth = 0.2 + 0.5 * (1.0 / (1.0 + (-10.0 * (progress - 0.5)).exp()));
        let ndvi = (growth + rng.random_range(-0.025..0.025)).clamp(0.0, 1.0);

        data.push(json!({
            "date": date.to_string(),
            "ndvi": ndvi,
            "confidence": 0.85 + rng.random_range(0.0..0.1),
            "evi": ndvi * 0.85 + rng.random_range(0.0..0.05),
        }));

        if let Ok(next) = date.tomorrow() {
            date = next;
        }
    }

    json!({
        "type": "timeseries",
        "title": "NDVI Growth Pattern",
        "description": "Vegetation Index over growing season",
        "unit": "NDVI",
        "data": data,
        "series": [
            {"key": "ndvi", "name": "NDVI (Normalized Difference Vegetation Index)", "color": "#10b981"},
            {"key": "evi", "name": "EVI (Enhanced Vegetation Index)", "color": "#3b82f6"},
        ],
        "xAxisLabel": "Date",
        "yAxisLabel": "Index Value",
    })
}

/// Categorical crop classification map with a fixed class distribution.
pub fn categorical_visualization() -> Value {
    let total_pixels: u64 = 1_000_000;

    json!({
        "type": "categorical",
        "title": "Crop Classification Map",
        "description": "Machine learning based crop type classification",
        "classes": [
            {"value": 1, "label": "Corn", "color": "#fcd34d"},
            {"value": 2, "label": "Wheat", "color": "#d4a373"},
            {"value": 3, "label": "Soybean", "color": "#86efac"},
            {"value": 4, "label": "Water", "color": "#38bdf8"},
            {"value": 5, "label": "Forest", "color": "#15803d"},
            {"value": 6, "label": "Urban", "color": "#808080"},
        ],
        "statistics": {
            "total_pixels": total_pixels,
            "class_distribution": {
                "1": (total_pixels as f64 * 0.35) as u64,
                "2": (total_pixels as f64 * 0.30) as u64,
                "3": (total_pixels as f64 * 0.15) as u64,
                "4": (total_pixels as f64 * 0.10) as u64,
                "5": (total_pixels as f64 * 0.08) as u64,
                "6": (total_pixels as f64 * 0.02) as u64,
            },
        },
    })
}

/// Soil carbon accumulation under four farming-practice scenarios.
pub fn carbon_visualization() -> Value {
    let mut rng = rand::rng();
    let mut data = Vec::new();

    for year in 2020..=2030 {
        let years_elapsed = (year - 2020) as f64;

        data.push(json!({
            "date": year.to_string(),
            "baseline": 20.0 + rng.random_range(0.0..2.0),
            "conservation_tillage": 20.5 + years_elapsed * 0.5 + rng.random_range(0.0..2.0),
            "cover_crops": 20.8 + years_elapsed * 0.8 + rng.random_range(0.0..2.0),
            "no_till": 21.2 + years_elapsed * 1.2 + rng.random_range(0.0..2.0),
        }));
    }

    json!({
        "type": "timeseries",
        "title": "Soil Carbon Sequestration Potential",
        "description": "Carbon accumulation under different farming practices",
        "unit": "Mg C/ha",
        "data": data,
        "series": [
            {"key": "baseline", "name": "Baseline (Current Practice)", "color": "#ef4444"},
            {"key": "conservation_tillage", "name": "Conservation Tillage", "color": "#f97316"},
            {"key": "cover_crops", "name": "Cover Crops", "color": "#3b82f6"},
            {"key": "no_till", "name": "No-Till (Best)", "color": "#10b981"},
        ],
        "xAxisLabel": "Year",
        "yAxisLabel": "Soil Carbon (Mg C/ha)",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndvi_series_covers_the_growing_season() {
        let payload = time_series_visualization();
        let data = payload["data"].as_array().expect("data array");

        assert_eq!(data.len(), NDVI_SERIES_DAYS);
        assert_eq!(data[0]["date"], "2023-04-01");

        for point in data {
            let ndvi = point["ndvi"].as_f64().expect("ndvi value");
            assert!((0.0..=1.0).contains(&ndvi));
        }
    }

    #[test]
    fn categorical_distribution_accounts_for_all_pixels() {
        let payload = categorical_visualization();
        let stats = &payload["statistics"];

        let total = stats["total_pixels"].as_u64().expect("total");
        let sum: u64 = stats["class_distribution"]
            .as_object()
            .expect("distribution")
            .values()
            .map(|count| count.as_u64().expect("count"))
            .sum();

        assert_eq!(sum, total);
        assert_eq!(payload["classes"].as_array().expect("classes").len(), 6);
    }

    #[test]
    fn carbon_scenarios_span_the_decade() {
        let payload = carbon_visualization();
        let data = payload["data"].as_array().expect("data array");

        assert_eq!(data.len(), 11);
        assert_eq!(data[0]["date"], "2020");
        assert_eq!(data[10]["date"], "2030");

        // No-till accumulates fastest; by 2030 it must exceed the baseline
        // even at the extreme ends of the noise ranges.
        let last = &data[10];
        let no_till = last["no_till"].as_f64().expect("no_till value");
        let baseline = last["baseline"].as_f64().expect("baseline value");
        assert!(no_till > baseline);
    }

    #[test]
    fn artifact_shape_depends_on_workflow() {
        let harvest = artifacts_for("harvest_period");
        assert_eq!(harvest.len(), 1);
        assert_eq!(harvest[0].name, "ndvi_timeseries.json");
        assert_eq!(harvest[0].kind, ArtifactKind::Timeseries);

        let crops = artifacts_for("crop_segmentation");
        assert_eq!(crops[0].mime_type, "image/tiff");
        assert_eq!(crops[0].kind, ArtifactKind::Categorical);

        let fallback = artifacts_for("helloworld");
        assert_eq!(fallback[0].name, "results.json");
    }
}
