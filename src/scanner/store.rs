//! Synchronized outcome collection.

use crate::types::PortOutcome;
use std::sync::Mutex;

/// Append-only store of per-port outcomes.
///
/// The only concurrently-mutated shared structure in a scan. Probe
/// tasks push as they complete; the lock is never held across an
/// await point.
#[derive(Debug, Default)]
pub struct ResultStore {
    outcomes: Mutex<Vec<PortOutcome>>,
}

impl ResultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one outcome.
    pub fn push(&self, outcome: PortOutcome) {
        self.outcomes
            .lock()
            .expect("result store lock poisoned")
            .push(outcome);
    }

    /// Number of outcomes recorded so far.
    pub fn len(&self) -> usize {
        self.outcomes
            .lock()
            .expect("result store lock poisoned")
            .len()
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Defensive copy of everything recorded so far.
    ///
    /// Safe to call while pushes are in flight, though a consistent
    /// view is only guaranteed once the scan has completed.
    pub fn snapshot(&self) -> Vec<PortOutcome> {
        self.outcomes
            .lock()
            .expect("result store lock poisoned")
            .clone()
    }

    /// Snapshot sorted ascending by port, the final presentation
    /// order.
    pub fn sorted(&self) -> Vec<PortOutcome> {
        let mut all = self.snapshot();
        all.sort_unstable_by_key(|o| o.port);
        all
    }
}
