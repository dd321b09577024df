//! Regional scaling coefficients.

use crate::constants::DEFAULT_REGION_COEFFICIENT;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use world_pulse_types::{Metric, Region};

/// Canonical fallback coefficients for metrics that carry no explicit
/// per-region table. This is the single shared copy; call sites must not
/// grow their own variants.
pub static FALLBACK_REGION_COEFFICIENTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("USA", 0.25),
        ("CHN", 0.18),
        ("IND", 0.04),
        ("EU", 0.17),
        ("BRA", 0.02),
    ])
});

/// Resolve the multiplicative coefficient for a metric in a region.
///
/// WORLD is the identity scope and never consults a table. Other regions use
/// the metric's explicit multiplier when present, then the shared fallback
/// table, and finally [`DEFAULT_REGION_COEFFICIENT`] for codes unknown to
/// both. Never fails.
pub fn region_coefficient(metric: &Metric, region: &Region) -> f64 {
    if region.is_world() {
        return 1.0;
    }

    let code = region.code();
    if let Some(coefficient) = metric.regional_multipliers.get(code) {
        return *coefficient;
    }

    FALLBACK_REGION_COEFFICIENTS
        .get(code)
        .copied()
        .unwrap_or(DEFAULT_REGION_COEFFICIENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use world_pulse_types::CategoryId;

    fn metric_with_multipliers(multipliers: &[(&str, f64)]) -> Metric {
        Metric {
            id: "test".to_string(),
            label: "Test".to_string(),
            unit: "units".to_string(),
            color: "#000000".to_string(),
            category: CategoryId::Population,
            description: String::new(),
            base_value: 100.0,
            growth_rate: 1.0,
            regional_multipliers: multipliers
                .iter()
                .map(|(code, value)| (code.to_string(), *value))
                .collect(),
            demographics: None,
        }
    }

    #[test]
    fn test_world_never_consults_tables() {
        // Even a bogus explicit WORLD entry must not be applied.
        let metric = metric_with_multipliers(&[("WORLD", 42.0)]);
        assert_eq!(region_coefficient(&metric, &Region::World), 1.0);
    }

    #[test]
    fn test_explicit_multiplier_wins() {
        let metric = metric_with_multipliers(&[("USA", 0.042)]);
        assert_eq!(region_coefficient(&metric, &Region::Usa), 0.042);
    }

    #[test]
    fn test_fallback_table_when_metric_has_no_entry() {
        let metric = metric_with_multipliers(&[]);
        assert_eq!(region_coefficient(&metric, &Region::Chn), 0.18);
        assert_eq!(region_coefficient(&metric, &Region::Bra), 0.02);
    }

    #[test]
    fn test_unknown_region_uses_default_coefficient() {
        let metric = metric_with_multipliers(&[]);
        let unknown = Region::from_code("XYZ");
        assert_eq!(
            region_coefficient(&metric, &unknown),
            DEFAULT_REGION_COEFFICIENT
        );
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let metric = metric_with_multipliers(&[]);
        let first = region_coefficient(&metric, &Region::Ind);
        for _ in 0..10 {
            assert_eq!(region_coefficient(&metric, &Region::Ind), first);
        }
    }
}
