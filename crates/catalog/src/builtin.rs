//! The built-in metric set.
//!
//! Base values, growth rates and regional multipliers are synthetic
//! heuristics anchored to the reference year; descriptions are what the
//! insight prompts see.

use crate::history::generate_history;
use std::collections::HashMap;
use world_pulse_types::{CategoryId, DemographicModel, Metric, MetricData};

fn multipliers(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs
        .iter()
        .map(|(code, value)| (code.to_string(), *value))
        .collect()
}

fn population_multipliers() -> HashMap<String, f64> {
    multipliers(&[
        ("USA", 0.042),
        ("CHN", 0.17),
        ("IND", 0.175),
        ("EU", 0.05),
        ("BRA", 0.026),
    ])
}

fn gdp_multipliers() -> HashMap<String, f64> {
    multipliers(&[
        ("USA", 0.25),
        ("CHN", 0.18),
        ("IND", 0.035),
        ("EU", 0.17),
        ("BRA", 0.02),
    ])
}

fn technology_multipliers() -> HashMap<String, f64> {
    multipliers(&[
        ("USA", 0.30),
        ("CHN", 0.25),
        ("IND", 0.15),
        ("EU", 0.20),
        ("BRA", 0.05),
    ])
}

fn life_expectancy_multipliers() -> HashMap<String, f64> {
    multipliers(&[
        ("USA", 1.054),
        ("CHN", 1.068),
        ("IND", 0.959),
        ("EU", 1.109),
        ("BRA", 1.036),
        ("WORLD", 1.0),
    ])
}

pub(crate) fn builtin_metrics() -> Vec<MetricData> {
    vec![
        // --- Demographics ---
        MetricData {
            metric: Metric {
                id: "world-pop".to_string(),
                label: "Total Population".to_string(),
                unit: "people".to_string(),
                color: "#3b82f6".to_string(),
                category: CategoryId::Population,
                description: "Total human population. Global population has grown from \
                              roughly 1.9 billion in 1924 to over 8 billion today."
                    .to_string(),
                base_value: 8_100_000_000.0,
                growth_rate: 2.5,
                regional_multipliers: population_multipliers(),
                demographics: None,
            },
            history: generate_history(8_100_000_000.0, 2.5, 100),
        },
        MetricData {
            metric: Metric {
                id: "births-year".to_string(),
                label: "Births This Year".to_string(),
                unit: "births".to_string(),
                color: "#8b5cf6".to_string(),
                category: CategoryId::Population,
                description: "Cumulative births since Jan 1st.".to_string(),
                base_value: 115_000_000.0,
                growth_rate: 4.5,
                regional_multipliers: population_multipliers(),
                demographics: None,
            },
            history: generate_history(134_000_000.0, 4.5, 50),
        },
        MetricData {
            metric: Metric {
                id: "deaths-year".to_string(),
                label: "Deaths This Year".to_string(),
                unit: "deaths".to_string(),
                color: "#64748b".to_string(),
                category: CategoryId::Population,
                description: "Cumulative deaths since Jan 1st.".to_string(),
                base_value: 50_000_000.0,
                growth_rate: 1.9,
                regional_multipliers: population_multipliers(),
                demographics: None,
            },
            history: generate_history(60_000_000.0, 1.9, 50),
        },
        // --- Economics ---
        MetricData {
            metric: Metric {
                id: "world-gdp".to_string(),
                label: "Global GDP (Nominal)".to_string(),
                unit: "USD".to_string(),
                color: "#10b981".to_string(),
                category: CategoryId::Economics,
                description: "Gross Domestic Product worldwide.".to_string(),
                base_value: 105_000_000_000_000.0,
                growth_rate: 150_000.0,
                regional_multipliers: gdp_multipliers(),
                demographics: None,
            },
            history: generate_history(105_000_000_000_000.0, 150_000.0, 60),
        },
        // --- Technology ---
        MetricData {
            metric: Metric {
                id: "internet-users".to_string(),
                label: "Internet Users".to_string(),
                unit: "users".to_string(),
                color: "#6366f1".to_string(),
                category: CategoryId::Technology,
                description: "Individuals using the internet. Usage has exploded from 0 \
                              in the mid-20th century to over 5 billion today."
                    .to_string(),
                base_value: 5_400_000_000.0,
                growth_rate: 4.2,
                regional_multipliers: technology_multipliers(),
                demographics: None,
            },
            history: generate_history(5_400_000_000.0, 4.2, 30),
        },
        // --- Health ---
        MetricData {
            metric: Metric {
                id: "life-expectancy".to_string(),
                label: "Avg Life Expectancy".to_string(),
                unit: "years".to_string(),
                color: "#ec4899".to_string(),
                category: CategoryId::Health,
                description: "Average life expectancy at birth. In 1924, global life \
                              expectancy was roughly 35-40 years."
                    .to_string(),
                base_value: 73.2,
                growth_rate: 0.000_000_011_1,
                regional_multipliers: life_expectancy_multipliers(),
                demographics: Some(DemographicModel::default()),
            },
            history: generate_history(73.2, 0.000_000_011_1, 100),
        },
    ]
}
