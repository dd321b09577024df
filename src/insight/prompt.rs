//! Prompt construction for insight and comparison requests.

use crate::core::format_number;
use world_pulse_types::{ComparisonItem, InsightSubject};

pub(crate) fn metric_insight_prompt(subject: &InsightSubject) -> String {
    format!(
        "Analyze the following global statistic:\n\
         Metric: {label}\n\
         Current Value: {value} {unit}\n\
         Description: {description}\n\
         \n\
         Provide a brief, fascinating 2-sentence insight about this number. \
         Focus on context, scale, or impact. Do not mention the date. \
         Return plain text.",
        label = subject.label,
        value = format_number(subject.value),
        unit = subject.unit,
        description = subject.description,
    )
}

pub(crate) fn comparison_prompt(items: &[ComparisonItem]) -> String {
    use std::fmt::Write;

    let mut prompt = String::from("Compare these statistics with their specific contexts:\n");
    for (index, item) in items.iter().enumerate() {
        let _ = write!(
            prompt,
            "\nItem {n}:\n\
             - Metric: {label}\n\
             - Value: {value} {unit}\n\
             - Context: {context}\n",
            n = index + 1,
            label = item.label,
            value = format_number(item.value),
            unit = item.unit,
            context = item.context,
        );
    }

    prompt.push_str(
        "\nTask:\n\
         1. Provide a detailed analysis paragraph (approx 80-100 words) explaining the \
         relationship, contrast, or economic/social implication across all items.\n\
         2. Provide a separate, punchy \"Data Insight\" summary (1 sentence) that \
         highlights the key takeaway.",
    );
    prompt
}
