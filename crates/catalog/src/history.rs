//! Decorative history series generation.

use rand::Rng;
use world_pulse_core::{REFERENCE_YEAR, SECONDS_PER_YEAR};
use world_pulse_types::HistoricalPoint;

/// Back-project a linear per-year series ending at the reference year, with
/// roughly one percent of uniform noise per sample.
///
/// The series is a cosmetic approximation for charting. It is generated once
/// at load, floored at zero for display, and is not required to agree with
/// the projection formula.
pub fn generate_history(base: f64, growth: f64, steps: usize) -> Vec<HistoricalPoint> {
    let mut rng = rand::thread_rng();
    let start_year = REFERENCE_YEAR - steps as i32 + 1;

    (0..steps)
        .map(|i| {
            let year = start_year + i as i32;
            let diff_years = f64::from(REFERENCE_YEAR - year);
            let value = base - growth * diff_years * SECONDS_PER_YEAR;
            let noise = value * 0.02 * (rng.gen::<f64>() - 0.5);
            HistoricalPoint {
                year,
                value: (value + noise).max(0.0).floor(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_shape() {
        let history = generate_history(8_100_000_000.0, 2.5, 100);
        assert_eq!(history.len(), 100);
        assert_eq!(history.first().unwrap().year, REFERENCE_YEAR - 99);
        assert_eq!(history.last().unwrap().year, REFERENCE_YEAR);
    }

    #[test]
    fn test_values_never_negative() {
        // Steep growth drives early back-projected values far below zero;
        // the display floor must hold.
        let history = generate_history(100.0, 1.0, 50);
        assert!(history.iter().all(|point| point.value >= 0.0));
    }
}
