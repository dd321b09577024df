//! Session filter selections.

use crate::region::Region;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// The currently selected projection scope.
///
/// No validation beyond accepting any representable region code and year;
/// out-of-range years are permitted, the projection formula tolerates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub region: Region,
    pub year: i32,
    /// Sub-year granularity (1-12), used by the comparison view only.
    #[serde(default)]
    pub month: Option<u32>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            region: Region::World,
            year: chrono::Utc::now().year(),
            month: None,
        }
    }
}
