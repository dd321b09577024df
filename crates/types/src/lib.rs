//! world-pulse-types: Shared data types for the world-pulse statistics engine.
//!
//! This crate contains pure data types (metrics, regions, filter state,
//! insight request/response shapes) that are shared across all world-pulse
//! crates. These types do no I/O and have no async dependencies, making them
//! suitable as a foundation layer.

pub mod demographic;
pub mod filter;
pub mod insight;
pub mod metric;
pub mod region;
pub mod snapshot;

// Re-export commonly used types at the crate root for convenience
pub use demographic::{AgeBracket, DemographicModel, Gender};
pub use filter::FilterState;
pub use insight::{ComparisonItem, ComparisonResult, InsightSubject};
pub use metric::{CategoryId, HistoricalPoint, Metric, MetricData};
pub use region::Region;
pub use snapshot::LiveSnapshot;
