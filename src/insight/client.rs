//! The insight client: prompt assembly, provider calls, graceful fallback.

use super::prompt;
use super::provider::InsightProvider;
use log::warn;
use serde_json::json;
use world_pulse_types::{ComparisonItem, ComparisonResult, InsightSubject};

/// Fixed user-facing string shown when the external service fails.
pub const FALLBACK_INSIGHT: &str = "Unable to fetch insights at this time.";

/// High-level insight API.
///
/// All failures are absorbed at this boundary: callers get the fallback
/// string or `None`, never an error.
pub struct InsightClient {
    provider: Box<dyn InsightProvider>,
}

impl InsightClient {
    pub fn new(provider: Box<dyn InsightProvider>) -> Self {
        Self { provider }
    }

    /// Single-metric insight. Returns [`FALLBACK_INSIGHT`] on any failure.
    pub async fn metric_insight(&self, subject: &InsightSubject) -> String {
        let prompt = prompt::metric_insight_prompt(subject);
        match self.provider.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!("insight provider returned an empty reply");
                FALLBACK_INSIGHT.to_string()
            }
            Err(e) => {
                warn!("insight request failed: {e}");
                FALLBACK_INSIGHT.to_string()
            }
        }
    }

    /// Multi-metric comparison. Needs at least two items; fewer is rejected
    /// up front. Any service failure yields `None`.
    pub async fn compare(&self, items: &[ComparisonItem]) -> Option<ComparisonResult> {
        if items.len() < 2 {
            warn!(
                "comparison needs at least two items, got {}",
                items.len()
            );
            return None;
        }

        let prompt = prompt::comparison_prompt(items);
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "analysis": { "type": "STRING" },
                "insight": { "type": "STRING" }
            },
            "required": ["analysis", "insight"]
        });

        match self.provider.generate_json(&prompt, schema).await {
            Ok(value) => match serde_json::from_value::<ComparisonResult>(value) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("comparison reply did not match the expected shape: {e}");
                    None
                }
            },
            Err(e) => {
                warn!("comparison request failed: {e}");
                None
            }
        }
    }
}
