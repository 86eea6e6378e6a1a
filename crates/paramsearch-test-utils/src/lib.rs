//! Test utilities and fixtures for paramsearch development.
//!
//! Provides a [`RecordingObserver`] that captures every probe event and
//! domain fixtures with the probe delay switched off, so strategies can be
//! driven to completion in tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{fast_domain, fixed_domain, fixed_domain_with_tolerance};

use std::sync::{Arc, Mutex, MutexGuard};

use paramsearch_core::Point3;
use paramsearch_crawler::ProbeObserver;

/// One observed probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeEvent {
    pub point: Point3,
    pub found: bool,
}

/// Observer that records every probe event in order.
///
/// Share it with a crawler via [`RecordingObserver::shared`], then inspect
/// the captured events after the run.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ProbeEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor returning an `Arc`, ready for `subscribe`.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Snapshot of all events so far.
    pub fn events(&self) -> Vec<ProbeEvent> {
        self.lock().clone()
    }

    /// Probed points that missed, in order.
    pub fn misses(&self) -> Vec<Point3> {
        self.lock()
            .iter()
            .filter(|e| !e.found)
            .map(|e| e.point)
            .collect()
    }

    /// Target locations reported as found, in order.
    pub fn hits(&self) -> Vec<Point3> {
        self.lock()
            .iter()
            .filter(|e| e.found)
            .map(|e| e.point)
            .collect()
    }

    /// Total events recorded.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ProbeEvent>> {
        // A panicking test thread poisons the lock; the data is still usable.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ProbeObserver for RecordingObserver {
    fn on_probe(&self, point: Point3, found: bool) {
        self.lock().push(ProbeEvent { point, found });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_hits_and_misses_in_order() {
        let obs = RecordingObserver::new();
        obs.on_probe(Point3::ORIGIN, false);
        obs.on_probe(Point3::new(1, 2, 3), true);
        assert_eq!(obs.len(), 2);
        assert_eq!(obs.misses(), vec![Point3::ORIGIN]);
        assert_eq!(obs.hits(), vec![Point3::new(1, 2, 3)]);
    }
}
