//! Configuration management

mod settings;

pub use settings::{AppConfig, FilterDefaults, InsightConfig, TickConfig};
