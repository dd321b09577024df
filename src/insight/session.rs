//! Supersession tracking for in-flight comparison requests.

use std::sync::Mutex;
use uuid::Uuid;

/// Tracks the most recent comparison request.
///
/// Cancellation is implicit: beginning a new request supersedes the prior
/// pending one, and a reply may only be displayed while its id is still
/// current. There is no explicit cancellation token.
#[derive(Debug, Default)]
pub struct ComparisonSession {
    current: Mutex<Option<Uuid>>,
}

impl ComparisonSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new request, superseding any pending one.
    pub fn begin(&self) -> Uuid {
        let id = Uuid::new_v4();
        if let Ok(mut current) = self.current.lock() {
            *current = Some(id);
        }
        id
    }

    /// True while `id` is still the most recent request.
    pub fn is_current(&self, id: Uuid) -> bool {
        self.current
            .lock()
            .map(|current| *current == Some(id))
            .unwrap_or(false)
    }

    /// Mark `id` settled. Returns false if a newer request superseded it, in
    /// which case its result must not be displayed.
    pub fn settle(&self, id: Uuid) -> bool {
        match self.current.lock() {
            Ok(mut current) if *current == Some(id) => {
                *current = None;
                true
            }
            _ => false,
        }
    }
}
