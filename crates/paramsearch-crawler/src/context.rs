//! The probe context shared by every crawler.
//!
//! [`ProbeContext::test_point`] is the only way a crawler may probe the
//! domain. It always issues the slow tolerance query first, and only on a
//! miss falls back to the directional query, so no strategy can read an
//! exact target location without paying for a real probe.

use std::sync::Arc;

use paramsearch_core::{Point3, Vector3};
use paramsearch_domain::Domain;
use tracing::trace;

use crate::observer::ProbeObserver;

/// Per-crawler probe state: the borrowed domain, an optional observer,
/// and a count of probes issued.
pub struct ProbeContext<'a> {
    domain: &'a Domain,
    observer: Option<Arc<dyn ProbeObserver>>,
    probes: u64,
    last_hit: Option<Point3>,
}

impl<'a> ProbeContext<'a> {
    /// A context probing `domain` with no observer attached.
    pub fn new(domain: &'a Domain) -> Self {
        Self {
            domain,
            observer: None,
            probes: 0,
            last_hit: None,
        }
    }

    /// The domain being searched.
    pub fn domain(&self) -> &'a Domain {
        self.domain
    }

    /// Install the observer notified after every probe, replacing any
    /// previous one.
    pub fn subscribe(&mut self, observer: Arc<dyn ProbeObserver>) {
        self.observer = Some(observer);
    }

    /// Remove the observer, if any.
    pub fn unsubscribe(&mut self) {
        self.observer = None;
    }

    /// Number of tolerance queries issued through this context.
    pub fn probe_count(&self) -> u64 {
        self.probes
    }

    /// Exact target location confirmed by the most recent probe.
    ///
    /// `None` if the last probe missed, or if nothing has been probed yet.
    /// A zero vector from [`test_point`](Self::test_point) paired with no
    /// hit means the domain had no targets left.
    pub fn last_hit(&self) -> Option<Point3> {
        self.last_hit
    }

    /// Probe `point`.
    ///
    /// Returns [`Vector3::ZERO`] if the tolerance query confirms the
    /// current target. Otherwise returns the directional query's
    /// displacement, which is also [`Vector3::ZERO`] on an exact hit or
    /// when the domain has no targets left.
    pub fn test_point(&mut self, point: Point3) -> Vector3 {
        self.probes += 1;
        self.last_hit = self.domain.is_within_error(point);
        match self.last_hit {
            Some(location) => {
                trace!(probe = %point, target = %location, "hit");
                self.notify(location, true);
                Vector3::ZERO
            }
            None => {
                trace!(probe = %point, "miss");
                self.notify(point, false);
                self.domain.search(point)
            }
        }
    }

    fn notify(&self, point: Point3, found: bool) {
        if let Some(observer) = &self.observer {
            observer.on_probe(point, found);
        }
    }
}

impl std::fmt::Debug for ProbeContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeContext")
            .field("domain", &self.domain.name())
            .field("observed", &self.observer.is_some())
            .field("probes", &self.probes)
            .field("last_hit", &self.last_hit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramsearch_domain::DomainConfig;
    use std::sync::Mutex;
    use std::time::Duration;

    fn domain(locations: &[Point3]) -> Domain {
        let config = DomainConfig::new("ctx", 20, 0)
            .with_tolerance(1)
            .with_probe_delay(Duration::ZERO);
        Domain::with_locations(config, locations.iter().copied()).unwrap()
    }

    #[test]
    fn hit_returns_zero_and_reports_target_location() {
        let d = domain(&[Point3::new(5, 5, 5)]);
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let mut ctx = ProbeContext::new(&d);
        ctx.subscribe(Arc::new(move |p: Point3, found: bool| {
            sink.lock().unwrap().push((p, found));
        }));

        assert_eq!(ctx.test_point(Point3::new(4, 6, 5)), Vector3::ZERO);
        assert!(d.is_complete());
        assert_eq!(*events.lock().unwrap(), vec![(Point3::new(5, 5, 5), true)]);
        assert_eq!(ctx.probe_count(), 1);
        assert_eq!(ctx.last_hit(), Some(Point3::new(5, 5, 5)));
    }

    #[test]
    fn miss_returns_direction_and_reports_probe() {
        let d = domain(&[Point3::new(5, 5, 5)]);
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let mut ctx = ProbeContext::new(&d);
        ctx.subscribe(Arc::new(move |p: Point3, found: bool| {
            sink.lock().unwrap().push((p, found));
        }));

        let v = ctx.test_point(Point3::new(0, 5, 9));
        assert_eq!(v, Vector3::new(5.0, 0.0, -4.0));
        assert_eq!(d.found_count(), 0);
        assert_eq!(ctx.last_hit(), None);
        assert_eq!(*events.lock().unwrap(), vec![(Point3::new(0, 5, 9), false)]);
    }

    #[test]
    fn exhausted_domain_yields_zero() {
        let d = domain(&[Point3::new(5, 5, 5)]);
        let mut ctx = ProbeContext::new(&d);
        ctx.test_point(Point3::new(5, 5, 5));
        assert_eq!(ctx.test_point(Point3::ORIGIN), Vector3::ZERO);
        assert_eq!(ctx.last_hit(), None);
        assert_eq!(d.found_count(), 1);
        assert_eq!(ctx.probe_count(), 2);
    }

    #[test]
    fn unsubscribe_stops_events() {
        let d = domain(&[Point3::new(5, 5, 5)]);
        let events = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&events);
        let mut ctx = ProbeContext::new(&d);
        ctx.subscribe(Arc::new(move |_: Point3, _: bool| {
            *sink.lock().unwrap() += 1;
        }));
        ctx.test_point(Point3::ORIGIN);
        ctx.unsubscribe();
        ctx.test_point(Point3::ORIGIN);
        assert_eq!(*events.lock().unwrap(), 1);
    }
}
