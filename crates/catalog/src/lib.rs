//! world-pulse-catalog: Built-in metric definitions.
//!
//! The engine's "data sources": a fixed set of synthetic global metrics with
//! base values anchored to the reference year, per-second growth rates,
//! sparse regional multiplier tables and a decorative history series for
//! charting. All values are heuristics, not measurements.

mod builtin;
mod catalog;
mod history;

pub use catalog::Catalog;
pub use history::generate_history;
