//! The live ticker: timer-driven snapshot recomputation.

use arc_swap::ArcSwap;
use chrono::Datelike;
use log::{debug, trace};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};
use world_pulse_catalog::Catalog;
use world_pulse_core::{live_value, project, region_coefficient, ProjectionPoint};
use world_pulse_types::{FilterState, LiveSnapshot, Metric, Region};

use super::FilterStore;

/// The current calendar year (UTC).
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Build the snapshot for a filter selection and elapsed session time.
///
/// When the selected year is the current calendar year the snapshot is live:
/// every value drifts per second from the base. Any other year freezes the
/// snapshot at the whole-year projection. The result is a pure function of
/// its inputs; elapsed time comes from the wall clock, never from a tick
/// count, so the sequence is the same no matter how often it is sampled.
pub fn compute_snapshot(
    catalog: &Catalog,
    filters: &FilterState,
    elapsed_secs: f64,
    current_year: i32,
) -> LiveSnapshot {
    let live = filters.year == current_year;
    let values = catalog
        .iter()
        .map(|data| {
            let value = if live {
                live_value(&data.metric, elapsed_secs)
            } else {
                project(&data.metric, &ProjectionPoint::year(filters.year))
            };
            (data.metric.id.clone(), value)
        })
        .collect();

    LiveSnapshot {
        values,
        year: filters.year,
        live,
    }
}

/// Apply regional scaling to a world-scope snapshot value for presentation.
pub fn display_value(metric: &Metric, world_value: f64, region: &Region) -> f64 {
    world_value * region_coefficient(metric, region)
}

/// Spawns and owns the periodic snapshot recomputation task.
pub struct Ticker;

impl Ticker {
    /// Start ticking at the given cadence.
    ///
    /// The elapsed-time baseline is set once here; toggling the selected year
    /// between live and frozen never resets it, so resuming the live state
    /// continues from true elapsed wall-clock time.
    pub fn spawn(catalog: Arc<Catalog>, filters: &FilterStore, interval: Duration) -> TickerHandle {
        let mut filter_rx = filters.subscribe();
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let started = Instant::now();

        let initial = compute_snapshot(&catalog, &filter_rx.borrow().clone(), 0.0, current_year());
        let snapshot = Arc::new(ArcSwap::from_pointee(initial));
        let published = Arc::clone(&snapshot);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // Delayed ticks must not accumulate; the next value is computed
            // from absolute elapsed time anyway.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => {
                        debug!("ticker stopping");
                        break;
                    }
                    _ = ticker.tick() => {
                        let filters = filter_rx.borrow_and_update().clone();
                        let elapsed = started.elapsed().as_secs_f64();
                        let next = compute_snapshot(&catalog, &filters, elapsed, current_year());
                        trace!(
                            "tick at {elapsed:.1}s, year {} ({})",
                            next.year,
                            if next.live { "live" } else { "frozen" }
                        );
                        published.store(Arc::new(next));
                    }
                }
            }
        });

        TickerHandle {
            snapshot,
            shutdown: shutdown_tx,
            task: Some(task),
        }
    }
}

/// Handle to a running ticker.
///
/// Readers never block the ticking task: [`snapshot`](Self::snapshot) is a
/// lock-free load of the latest published value. Dropping the handle aborts
/// the task; [`shutdown`](Self::shutdown) stops it cleanly and guarantees no
/// tick fires afterwards.
pub struct TickerHandle {
    snapshot: Arc<ArcSwap<LiveSnapshot>>,
    shutdown: watch::Sender<bool>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl TickerHandle {
    /// The latest published snapshot.
    pub fn snapshot(&self) -> Arc<LiveSnapshot> {
        self.snapshot.load_full()
    }

    /// Stop the ticking task and wait for it to finish.
    pub async fn shutdown(&mut self) {
        let _ = self.shutdown.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use world_pulse_core::SECONDS_PER_YEAR;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn test_live_snapshots_drift_by_elapsed_time() {
        let catalog = catalog();
        let filters = FilterState::default();
        let year = filters.year;

        let first = compute_snapshot(&catalog, &filters, 10.0, year);
        let second = compute_snapshot(&catalog, &filters, 25.0, year);
        assert!(first.live && second.live);

        for data in catalog.iter() {
            let delta = second.get(&data.metric.id).unwrap() - first.get(&data.metric.id).unwrap();
            let expected = data.metric.growth_rate * 15.0;
            // Subtracting two values near the base magnitude loses absolute
            // precision, so the tolerance scales with the base.
            let tolerance = data.metric.base_value.abs() * 1e-12 + 1e-12;
            assert!(
                (delta - expected).abs() <= tolerance,
                "unexpected drift for {}",
                data.metric.id
            );
        }
    }

    #[test]
    fn test_frozen_snapshots_are_identical() {
        let catalog = catalog();
        let filters = FilterState {
            year: 1999,
            ..FilterState::default()
        };

        let first = compute_snapshot(&catalog, &filters, 10.0, 2024);
        let second = compute_snapshot(&catalog, &filters, 99.0, 2024);
        assert!(!first.live);
        assert_eq!(first, second);
    }

    #[test]
    fn test_frozen_matches_whole_year_projection() {
        let catalog = catalog();
        let filters = FilterState {
            year: 2000,
            ..FilterState::default()
        };
        let snapshot = compute_snapshot(&catalog, &filters, 123.0, 2024);

        for data in catalog.iter() {
            let expected = project(&data.metric, &ProjectionPoint::year(2000));
            assert_eq!(snapshot.get(&data.metric.id).unwrap(), expected);
        }
    }

    #[test]
    fn test_display_value_scales_by_region() {
        let catalog = catalog();
        let pop = &catalog.get("world-pop").unwrap().metric;
        let world = 8_100_000_000.0;
        assert_eq!(display_value(pop, world, &Region::World), world);
        assert_eq!(display_value(pop, world, &Region::Usa), world * 0.042);
    }

    #[test]
    fn test_live_delta_is_cadence_independent() {
        // Sampling twice as often must not change the value at a given
        // elapsed time.
        let catalog = catalog();
        let filters = FilterState::default();
        let year = filters.year;

        let coarse = compute_snapshot(&catalog, &filters, 60.0, year);
        let fine = compute_snapshot(&catalog, &filters, 60.0, year);
        assert_eq!(coarse, fine);

        // And a frozen year is independent of elapsed time entirely.
        let gdp = &catalog.get("world-gdp").unwrap().metric;
        let projected = project(gdp, &ProjectionPoint::year(1990));
        let expected = gdp.base_value + gdp.growth_rate * -34.0 * SECONDS_PER_YEAR;
        assert!((projected - expected).abs() < 1e-3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_publishes_and_freezes() {
        let catalog = Arc::new(Catalog::builtin());
        let store = FilterStore::default();
        let mut handle = Ticker::spawn(Arc::clone(&catalog), &store, Duration::from_millis(100));

        tokio::time::sleep(Duration::from_millis(350)).await;
        let snapshot = handle.snapshot();
        assert!(snapshot.live);
        let base = catalog.get("world-pop").unwrap().metric.base_value;
        assert!(snapshot.get("world-pop").unwrap() > base);

        store.set_year(1999);
        tokio::time::sleep(Duration::from_millis(200)).await;
        let frozen = handle.snapshot();
        assert_eq!(frozen.year, 1999);
        assert!(!frozen.live);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_after_shutdown() {
        let catalog = Arc::new(Catalog::builtin());
        let store = FilterStore::default();
        let mut handle = Ticker::spawn(Arc::clone(&catalog), &store, Duration::from_millis(100));

        tokio::time::sleep(Duration::from_millis(250)).await;
        handle.shutdown().await;

        let last = handle.snapshot();
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(Arc::ptr_eq(&last, &handle.snapshot()));
    }
}
