//! The per-tick snapshot of projected values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A full mapping of metric id to its currently projected world-scope value.
///
/// Recreated wholesale on every tick and replaced atomically by the ticker;
/// consumers only ever read it. Regional scaling is applied at display time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveSnapshot {
    pub values: HashMap<String, f64>,
    /// The selected year this snapshot was computed for.
    pub year: i32,
    /// True when the snapshot tracks wall-clock drift (the selected year is
    /// the current calendar year); false when frozen at another year.
    pub live: bool,
}

impl LiveSnapshot {
    pub fn get(&self, metric_id: &str) -> Option<f64> {
        self.values.get(metric_id).copied()
    }
}
