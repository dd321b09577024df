//! Shared constants for the projection formula

/// The anchor year: every metric's base value is defined to hold exactly at
/// this year (WORLD scope, no demographic offset).
pub const REFERENCE_YEAR: i32 = 2024;

/// Seconds in a 365-day year, the conversion between a growth rate in units
/// per second and a whole-year drift.
pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Coefficient applied when a region appears in neither a metric's explicit
/// multiplier table nor the shared fallback table.
pub const DEFAULT_REGION_COEFFICIENT: f64 = 0.01;
