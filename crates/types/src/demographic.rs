//! Demographic filter types and the heuristic adjustment model.

use serde::{Deserialize, Serialize};

/// Age bracket selection for demographic-sensitive metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    #[default]
    All,
    /// Ages 0-5
    Infant,
    /// Ages 5-20
    Youth,
    /// Ages 20-60
    Adult,
    /// Ages 60+
    Senior,
}

impl AgeBracket {
    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::All => "all ages",
            AgeBracket::Infant => "0-5",
            AgeBracket::Youth => "5-20",
            AgeBracket::Adult => "20-60",
            AgeBracket::Senior => "60+",
        }
    }
}

/// Gender selection for demographic-sensitive metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    All,
    Male,
    Female,
}

fn default_age_anchor_year() -> i32 {
    1900
}

fn default_age_span_years() -> f64 {
    124.0
}

/// Constants for the life-expectancy demographic heuristics.
///
/// The age-bracket adjustment interpolates linearly over the span from the
/// anchor year: younger brackets carry a diminishing offset above the total
/// average, the senior bracket trends toward the total average as the target
/// year advances. These are demo heuristics with no cited source, so they are
/// carried as configurable data rather than hard-coded domain truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicModel {
    /// Year at which the age interpolation weight is zero.
    #[serde(default = "default_age_anchor_year")]
    pub age_anchor_year: i32,
    /// Span in years over which the weight reaches one.
    #[serde(default = "default_age_span_years")]
    pub age_span_years: f64,
    /// Youth bracket adds `(1 - weight) * youth_offset`.
    pub youth_offset: f64,
    /// Adult bracket adds `adult_base + weight * adult_slope`.
    pub adult_base: f64,
    pub adult_slope: f64,
    /// Senior bracket replaces the value with `senior_base + weight * senior_slope`.
    pub senior_base: f64,
    pub senior_slope: f64,
    /// Half of the male/female gap; male subtracts it, female adds it.
    pub gender_gap: f64,
}

impl Default for DemographicModel {
    fn default() -> Self {
        Self {
            age_anchor_year: 1900,
            age_span_years: 124.0,
            youth_offset: 15.0,
            adult_base: 5.0,
            adult_slope: 5.0,
            senior_base: 15.0,
            senior_slope: 15.0,
            gender_gap: 2.5,
        }
    }
}

impl DemographicModel {
    /// Linear interpolation weight for a target year: 0 at the anchor year,
    /// 1 a full span later. Not clamped; extreme years extrapolate.
    pub fn year_weight(&self, year: i32) -> f64 {
        f64::from(year - self.age_anchor_year) / self.age_span_years
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_weight_endpoints() {
        let model = DemographicModel::default();
        assert_eq!(model.year_weight(1900), 0.0);
        assert_eq!(model.year_weight(2024), 1.0);
    }

    #[test]
    fn test_serde_defaults_for_anchor() {
        let json = r#"{
            "youth_offset": 15.0,
            "adult_base": 5.0,
            "adult_slope": 5.0,
            "senior_base": 15.0,
            "senior_slope": 15.0,
            "gender_gap": 2.5
        }"#;
        let model: DemographicModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.age_anchor_year, 1900);
        assert_eq!(model.age_span_years, 124.0);
    }
}
