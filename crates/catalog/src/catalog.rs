//! Metric catalog: load-once lookup over the metric set.

use crate::builtin::builtin_metrics;
use std::collections::HashMap;
use world_pulse_types::{CategoryId, MetricData};

/// An immutable, indexed collection of metrics.
///
/// Loaded once at startup; iteration preserves definition order.
pub struct Catalog {
    metrics: Vec<MetricData>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in metric set.
    pub fn builtin() -> Self {
        Self::from_metrics(builtin_metrics())
    }

    /// Build a catalog from arbitrary metrics. Later duplicates of an id are
    /// dropped with a warning.
    pub fn from_metrics(metrics: Vec<MetricData>) -> Self {
        let mut kept: Vec<MetricData> = Vec::with_capacity(metrics.len());
        let mut index = HashMap::with_capacity(metrics.len());

        for data in metrics {
            if index.contains_key(&data.metric.id) {
                log::warn!("duplicate metric id {:?} dropped from catalog", data.metric.id);
                continue;
            }
            index.insert(data.metric.id.clone(), kept.len());
            kept.push(data);
        }

        log::debug!("catalog loaded with {} metrics", kept.len());
        Self {
            metrics: kept,
            index,
        }
    }

    pub fn get(&self, id: &str) -> Option<&MetricData> {
        self.index.get(id).map(|&i| &self.metrics[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricData> {
        self.metrics.iter()
    }

    pub fn by_category(&self, category: CategoryId) -> Vec<&MetricData> {
        self.metrics
            .iter()
            .filter(|data| data.metric.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}
