//! Session filter store with subscription semantics.

use tokio::sync::watch;
use world_pulse_types::{FilterState, Region};

/// Owns the session's filter selections.
///
/// Built on a watch channel: setters publish the whole state synchronously,
/// readers either take a cheap snapshot with [`get`](Self::get) or subscribe
/// for change notification. The store is created at session start and
/// injected into whatever needs it; there is no global instance.
pub struct FilterStore {
    tx: watch::Sender<FilterState>,
}

impl FilterStore {
    pub fn new(initial: FilterState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Snapshot of the current selections.
    pub fn get(&self) -> FilterState {
        self.tx.borrow().clone()
    }

    pub fn set_region(&self, region: Region) {
        self.tx.send_modify(|state| state.region = region);
    }

    pub fn set_year(&self, year: i32) {
        self.tx.send_modify(|state| state.year = year);
    }

    pub fn set_month(&self, month: Option<u32>) {
        self.tx.send_modify(|state| state.month = month);
    }

    /// Receiver tracking the latest filter state; used by the ticker and any
    /// other observer.
    pub fn subscribe(&self) -> watch::Receiver<FilterState> {
        self.tx.subscribe()
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new(FilterState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutations_visible_immediately() {
        let store = FilterStore::default();
        store.set_region(Region::Chn);
        store.set_year(1999);
        store.set_month(Some(3));

        let state = store.get();
        assert_eq!(state.region, Region::Chn);
        assert_eq!(state.year, 1999);
        assert_eq!(state.month, Some(3));
    }

    #[test]
    fn test_subscribers_observe_changes() {
        let store = FilterStore::default();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.set_year(2050);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().year, 2050);
    }

    #[test]
    fn test_any_region_code_accepted() {
        let store = FilterStore::default();
        store.set_region(Region::from_code("XKCD"));
        assert_eq!(store.get().region.code(), "XKCD");
    }
}
