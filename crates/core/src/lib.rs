//! world-pulse-core: The projection formula and its constants.
//!
//! This crate contains the deterministic heart of the engine: a closed-form
//! function mapping (metric, target time, region, demographics) to a number,
//! plus the canonical regional coefficient lookup. Everything here is a total
//! function over its domain; no input can make it fail.

pub mod constants;
mod projection;
mod regional;

pub use constants::{DEFAULT_REGION_COEFFICIENT, REFERENCE_YEAR, SECONDS_PER_YEAR};
pub use projection::{live_value, project, ProjectionPoint};
pub use regional::{region_coefficient, FALLBACK_REGION_COEFFICIENTS};
