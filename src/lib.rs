//! world-pulse: A deterministic live global statistics engine
//!
//! This library provides the runtime around the projection formula:
//! - A filter store holding the session's region/year selections
//! - A live ticker that republishes a full value snapshot on a timer
//! - An insight client that asks an external generative model about the numbers
//! - Configuration management

pub mod config;
pub mod core;
pub mod insight;

// Re-export commonly used types
pub use config::AppConfig;
pub use core::{FilterStore, Ticker, TickerHandle};
pub use world_pulse_catalog::Catalog;
