//! Input/output shapes for the external insight service.
//!
//! These describe the full contract the core owns: everything else about the
//! external generation service (transport, auth, model choice) lives in the
//! insight client.

use serde::{Deserialize, Serialize};

/// A single metric prepared for an insight request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightSubject {
    pub label: String,
    pub unit: String,
    pub description: String,
    /// The currently projected value.
    pub value: f64,
}

/// One side of a comparison request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonItem {
    pub label: String,
    pub value: f64,
    pub unit: String,
    /// Free text describing the region/year/demographic scope of the value.
    pub context: String,
}

/// Structured reply to a comparison request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Analysis paragraph, roughly 80-100 words.
    pub analysis: String,
    /// One-sentence takeaway.
    pub insight: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_result_from_service_json() {
        let json = r#"{"analysis": "A is larger than B.", "insight": "Scale matters."}"#;
        let result: ComparisonResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.analysis, "A is larger than B.");
        assert_eq!(result.insight, "Scale matters.");
    }
}
