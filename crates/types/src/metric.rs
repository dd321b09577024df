//! Metric definitions: the unit of data in this system.

use crate::demographic::DemographicModel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metric category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Population,
    Economics,
    Environment,
    Technology,
    Health,
    Society,
    Energy,
}

impl CategoryId {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryId::Population => "Demographics",
            CategoryId::Economics => "Economics",
            CategoryId::Environment => "Environment",
            CategoryId::Technology => "Technology",
            CategoryId::Health => "Health",
            CategoryId::Society => "Society",
            CategoryId::Energy => "Energy",
        }
    }
}

/// A named quantity with a base value anchored to the reference year and a
/// continuous growth rate.
///
/// Base value and growth rate together fully determine the metric's value at
/// any point in time via the projection formula. Metrics are loaded once at
/// startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    /// Unique identifier (e.g. `"world-pop"`).
    pub id: String,
    /// Human-readable name.
    pub label: String,
    /// Unit of measurement (e.g. `"people"`, `"USD"`).
    pub unit: String,
    /// Hex color used by chart presentation layers.
    pub color: String,
    pub category: CategoryId,
    /// Description of what this metric represents.
    pub description: String,
    /// Value that holds exactly at the reference year (WORLD scope, no
    /// demographic offset).
    pub base_value: f64,
    /// Signed drift in units per second.
    pub growth_rate: f64,
    /// Sparse per-region multiplicative coefficients, keyed by region code.
    #[serde(default)]
    pub regional_multipliers: HashMap<String, f64>,
    /// Demographic adjustment model; only the life-expectancy metric carries
    /// one.
    #[serde(default)]
    pub demographics: Option<DemographicModel>,
}

/// One decorative history sample for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub year: i32,
    pub value: f64,
}

/// A metric bundled with its precomputed history series.
///
/// The history is generated once at load and is an independent cosmetic
/// approximation; it is not required to agree with the projection formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricData {
    #[serde(flatten)]
    pub metric: Metric,
    pub history: Vec<HistoricalPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_serialization() {
        let metric = Metric {
            id: "world-pop".to_string(),
            label: "Total Population".to_string(),
            unit: "people".to_string(),
            color: "#3b82f6".to_string(),
            category: CategoryId::Population,
            description: "Total human population.".to_string(),
            base_value: 8_100_000_000.0,
            growth_rate: 2.5,
            regional_multipliers: HashMap::from([("USA".to_string(), 0.042)]),
            demographics: None,
        };

        let json = serde_json::to_string(&metric).unwrap();
        assert!(json.contains("\"category\":\"population\""));

        let deserialized: Metric = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, "world-pop");
        assert_eq!(deserialized.regional_multipliers["USA"], 0.042);
        assert!(deserialized.demographics.is_none());
    }

    #[test]
    fn test_metric_data_flattens_metric_fields() {
        let data = MetricData {
            metric: Metric {
                id: "life-expectancy".to_string(),
                label: "Avg Life Expectancy".to_string(),
                unit: "years".to_string(),
                color: "#ec4899".to_string(),
                category: CategoryId::Health,
                description: String::new(),
                base_value: 73.2,
                growth_rate: 0.000_000_011_1,
                regional_multipliers: HashMap::new(),
                demographics: Some(Default::default()),
            },
            history: vec![HistoricalPoint {
                year: 2024,
                value: 73.0,
            }],
        };

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"id\":\"life-expectancy\""));
        assert!(json.contains("\"history\""));

        let deserialized: MetricData = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.metric.category, CategoryId::Health);
        assert_eq!(deserialized.history.len(), 1);
    }
}
