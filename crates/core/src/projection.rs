//! The closed-form projection formula.

use crate::constants::{REFERENCE_YEAR, SECONDS_PER_YEAR};
use crate::regional::region_coefficient;
use world_pulse_types::{AgeBracket, Gender, Metric, Region};

/// A point in time, space and demographics at which a metric is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionPoint {
    pub year: i32,
    /// Sub-year granularity (1-12). When present, the year difference is
    /// reduced by the remaining-month fraction.
    pub month: Option<u32>,
    pub region: Region,
    pub age: AgeBracket,
    pub gender: Gender,
}

impl ProjectionPoint {
    /// A whole-year WORLD point with no demographic filters.
    pub fn year(year: i32) -> Self {
        Self {
            year,
            month: None,
            region: Region::World,
            age: AgeBracket::All,
            gender: Gender::All,
        }
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn with_age(mut self, age: AgeBracket) -> Self {
        self.age = age;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }
}

/// Project a metric's value at an arbitrary point.
///
/// Linear drift from the reference year, then demographic offsets (for
/// metrics that carry a model), then regional scaling. Symmetric for past and
/// future years and never clamped; rounding and flooring are display
/// concerns. Total over its domain: any year, any region code, any metric
/// yields a best-effort number rather than an error.
pub fn project(metric: &Metric, point: &ProjectionPoint) -> f64 {
    let mut diff_years = f64::from(point.year - REFERENCE_YEAR);
    if let Some(month) = point.month {
        diff_years -= (12.0 - f64::from(month)) / 12.0;
    }

    let mut value = metric.base_value + metric.growth_rate * diff_years * SECONDS_PER_YEAR;

    if let Some(model) = &metric.demographics {
        let weight = model.year_weight(point.year);
        match point.age {
            // The infant bracket is the standard metric; no adjustment
            // relative to the base.
            AgeBracket::All | AgeBracket::Infant => {}
            AgeBracket::Youth => value += (1.0 - weight) * model.youth_offset,
            AgeBracket::Adult => value += model.adult_base + weight * model.adult_slope,
            AgeBracket::Senior => value = model.senior_base + weight * model.senior_slope,
        }

        match point.gender {
            Gender::All => {}
            Gender::Male => value -= model.gender_gap,
            Gender::Female => value += model.gender_gap,
        }
    }

    value * region_coefficient(metric, &point.region)
}

/// Per-second drift from the base value, used by the live ticker when the
/// selected year is the current calendar year.
pub fn live_value(metric: &Metric, elapsed_secs: f64) -> f64 {
    metric.base_value + metric.growth_rate * elapsed_secs
}
