//! Probe observation sink.

use paramsearch_core::Point3;

/// Receives one event per probe.
///
/// On a hit the event carries the target's exact location with
/// `found == true`; on a miss it carries the probed point with
/// `found == false`. Purely advisory: the crawler never reads anything
/// back from its observer.
///
/// Any `Fn(Point3, bool) + Send + Sync` closure is an observer.
pub trait ProbeObserver: Send + Sync {
    /// Called after every tolerance query.
    fn on_probe(&self, point: Point3, found: bool);
}

impl<F> ProbeObserver for F
where
    F: Fn(Point3, bool) + Send + Sync,
{
    fn on_probe(&self, point: Point3, found: bool) {
        self(point, found)
    }
}
