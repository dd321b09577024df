//! Core runtime: filter store and live ticker

mod filter_store;
mod format;
mod ticker;

pub use filter_store::FilterStore;
pub use format::format_number;
pub use ticker::{compute_snapshot, current_year, display_value, Ticker, TickerHandle};
