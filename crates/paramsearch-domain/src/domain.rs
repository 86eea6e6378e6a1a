//! The target domain and its query protocols.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use paramsearch_core::{Point3, Vector3};
use tracing::debug;

use crate::config::DomainConfig;
use crate::error::DomainError;
use crate::placement::seeded_locations;

// ── Target ──────────────────────────────────────────────────────

/// A hidden point that must be found, in order.
///
/// The location never changes. The found flag flips to `true` once and
/// stays set until [`Domain::reset`].
#[derive(Debug)]
pub struct Target {
    location: Point3,
    found: AtomicBool,
}

impl Target {
    fn new(location: Point3) -> Self {
        Self {
            location,
            found: AtomicBool::new(false),
        }
    }

    /// The fixed target location.
    pub fn location(&self) -> Point3 {
        self.location
    }

    /// Whether this target has been found.
    pub fn is_found(&self) -> bool {
        self.found.load(Ordering::Acquire)
    }

    /// Flip the found flag. Returns `false` if another prober got there
    /// first.
    fn claim(&self) -> bool {
        self.found
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn reset(&self) {
        self.found.store(false, Ordering::Release);
    }
}

// ── Domain ──────────────────────────────────────────────────────

/// A cubic volume holding an ordered sequence of hidden targets.
///
/// Targets are sorted by location at construction. Only the *current*
/// target (the first unfound one) answers queries, so every target before
/// it is found and every target after it is unfound.
///
/// Found flags are atomic, so all queries take `&self` and a `Domain` can
/// be shared between the crawler probing it and an observer polling
/// [`hint`](Self::hint) from another thread.
#[derive(Debug)]
pub struct Domain {
    name: String,
    size: i32,
    tolerance: i32,
    probe_delay: Duration,
    targets: Vec<Target>,
}

impl Domain {
    /// Create a domain with default tolerance and probe delay.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if `size <= 0` or `target_count == 0`.
    pub fn new(name: &str, size: i32, target_count: usize) -> Result<Self, DomainError> {
        Self::from_config(DomainConfig::new(name, size, target_count))
    }

    /// Create a domain whose targets are placed from the config's seed triple.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the config fails [`DomainConfig::validate`].
    pub fn from_config(config: DomainConfig) -> Result<Self, DomainError> {
        config.validate()?;
        let locations = seeded_locations(&config.name, config.size, config.target_count);
        Ok(Self::build(config, locations))
    }

    /// Create a domain with explicitly placed targets.
    ///
    /// `config.target_count` is replaced by the number of locations given.
    /// Locations are sorted; duplicates and points outside `[0, size)` are
    /// kept as-is.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NoTargets`] if `locations` is empty, or any
    /// other [`DomainConfig::validate`] failure.
    pub fn with_locations(
        mut config: DomainConfig,
        locations: impl IntoIterator<Item = Point3>,
    ) -> Result<Self, DomainError> {
        let locations: Vec<Point3> = locations.into_iter().collect();
        config.target_count = locations.len();
        config.validate()?;
        Ok(Self::build(config, locations))
    }

    fn build(config: DomainConfig, mut locations: Vec<Point3>) -> Self {
        locations.sort();
        debug!(
            name = %config.name,
            size = config.size,
            targets = locations.len(),
            tolerance = config.tolerance,
            "domain created"
        );
        Self {
            name: config.name,
            size: config.size,
            tolerance: config.tolerance,
            probe_delay: config.probe_delay,
            targets: locations.into_iter().map(Target::new).collect(),
        }
    }

    /// The domain name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cube side length.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of targets, found or not.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Per-axis tolerance of the tolerance query.
    pub fn tolerance(&self) -> i32 {
        self.tolerance
    }

    /// Delay applied before every tolerance query.
    pub fn probe_delay(&self) -> Duration {
        self.probe_delay
    }

    /// All targets in activation order.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Number of targets found so far.
    pub fn found_count(&self) -> usize {
        self.targets.iter().filter(|t| t.is_found()).count()
    }

    /// Index of the current target, or `None` when all are found.
    pub fn current_target(&self) -> Option<usize> {
        self.targets.iter().position(|t| !t.is_found())
    }

    /// Whether every target has been found.
    pub fn is_complete(&self) -> bool {
        self.current_target().is_none()
    }

    fn current(&self) -> Option<&Target> {
        self.targets.iter().find(|t| !t.is_found())
    }

    /// Clear every found flag, restoring the initial state.
    ///
    /// Intended for repeated benchmark runs over the same domain.
    pub fn reset(&self) {
        for t in &self.targets {
            t.reset();
        }
        debug!(name = %self.name, "domain reset");
    }

    /// Directional query: the displacement from `point` to the current target.
    ///
    /// Returns [`Vector3::ZERO`] and marks the target found if `point` is
    /// exactly its location. Returns [`Vector3::ZERO`] unconditionally once
    /// every target is found. Never blocks.
    pub fn search(&self, point: Point3) -> Vector3 {
        loop {
            let Some(target) = self.current() else {
                return Vector3::ZERO;
            };
            if target.location != point {
                return point.vector_to(&target.location);
            }
            if target.claim() {
                return Vector3::ZERO;
            }
            // Lost the race for this target; answer for the next one.
        }
    }

    /// Tolerance query: is `point` within tolerance of the current target?
    ///
    /// Blocks for the configured probe delay first. On success the target
    /// is marked found and its exact location returned. Returns `None` on a
    /// miss or when every target is already found.
    pub fn is_within_error(&self, point: Point3) -> Option<Point3> {
        if !self.probe_delay.is_zero() {
            thread::sleep(self.probe_delay);
        }
        loop {
            let target = self.current()?;
            if !target.location.is_within(self.tolerance, &point) {
                return None;
            }
            if target.claim() {
                return Some(target.location);
            }
        }
    }

    /// Corner of the current target's tolerance box.
    ///
    /// The current location offset by `-tolerance` on every axis, or `None`
    /// when no target remains.
    pub fn hint(&self) -> Option<Point3> {
        let t = -f64::from(self.tolerance);
        self.current()
            .map(|target| target.location.translated_by(&Vector3::splat(t)))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Domain {} (size {})", self.name, self.size)?;
        for t in self.targets.iter().filter(|t| t.is_found()) {
            writeln!(f, "  found {}", t.location)?;
        }
        write!(
            f,
            "Targets found: {}/{}",
            self.found_count(),
            self.target_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fast(size: i32, locations: &[Point3]) -> Domain {
        let config = DomainConfig::new("test", size, 0).with_probe_delay(Duration::ZERO);
        Domain::with_locations(config, locations.iter().copied()).unwrap()
    }

    fn assert_prefix_invariant(d: &Domain) {
        let current = d.current_target().unwrap_or(d.target_count());
        for (i, t) in d.targets().iter().enumerate() {
            assert_eq!(t.is_found(), i < current, "target {i}");
        }
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn construction_is_deterministic() {
        let a = Domain::new("Benchmark", 300, 5).unwrap();
        let b = Domain::new("Benchmark", 300, 5).unwrap();
        let la: Vec<Point3> = a.targets().iter().map(Target::location).collect();
        let lb: Vec<Point3> = b.targets().iter().map(Target::location).collect();
        assert_eq!(la, lb);
        assert_eq!(la[0], Point3::new(94, 227, 123));
        assert_eq!(a.target_count(), 5);
        assert_eq!(a.tolerance(), 10);
    }

    #[test]
    fn invalid_construction_fails_fast() {
        assert_eq!(
            Domain::new("x", 0, 3).unwrap_err(),
            DomainError::InvalidSize { size: 0 }
        );
        assert_eq!(
            Domain::new("x", 10, 0).unwrap_err(),
            DomainError::NoTargets
        );
        let config = DomainConfig::new("x", 10, 1);
        assert_eq!(
            Domain::with_locations(config, []).unwrap_err(),
            DomainError::NoTargets
        );
    }

    #[test]
    fn with_locations_sorts_and_keeps_duplicates() {
        let d = fast(
            10,
            &[Point3::new(5, 0, 0), Point3::new(1, 2, 3), Point3::new(1, 2, 3)],
        );
        let locs: Vec<Point3> = d.targets().iter().map(Target::location).collect();
        assert_eq!(
            locs,
            vec![Point3::new(1, 2, 3), Point3::new(1, 2, 3), Point3::new(5, 0, 0)]
        );
        assert_eq!(d.target_count(), 3);
    }

    // ── Directional query ───────────────────────────────────────

    #[test]
    fn search_exact_match_marks_found() {
        let d = fast(10, &[Point3::new(3, 3, 3), Point3::new(7, 7, 7)]);
        assert_eq!(d.search(Point3::new(3, 3, 3)), Vector3::ZERO);
        assert!(d.targets()[0].is_found());
        assert_eq!(d.current_target(), Some(1));
    }

    #[test]
    fn search_returns_displacement_to_current() {
        let d = fast(10, &[Point3::new(3, 3, 3), Point3::new(7, 7, 7)]);
        assert_eq!(
            d.search(Point3::new(1, 5, 3)),
            Vector3::new(2.0, -2.0, 0.0)
        );
        assert_eq!(d.found_count(), 0);
    }

    #[test]
    fn search_repeat_at_found_location_moves_on() {
        let d = fast(10, &[Point3::new(3, 3, 3), Point3::new(7, 7, 7)]);
        d.search(Point3::new(3, 3, 3));
        // Now pointing at the second target, not re-finding the first.
        assert_eq!(
            d.search(Point3::new(3, 3, 3)),
            Vector3::new(4.0, 4.0, 4.0)
        );
        assert_eq!(d.found_count(), 1);
    }

    #[test]
    fn search_when_complete_is_zero() {
        let d = fast(10, &[Point3::new(3, 3, 3)]);
        d.search(Point3::new(3, 3, 3));
        assert!(d.is_complete());
        assert_eq!(d.search(Point3::new(9, 0, 9)), Vector3::ZERO);
        assert_eq!(d.found_count(), 1);
    }

    // ── Tolerance query ─────────────────────────────────────────

    #[test]
    fn is_within_error_accepts_tolerance_box() {
        let config = DomainConfig::new("t", 50, 0)
            .with_tolerance(2)
            .with_probe_delay(Duration::ZERO);
        let d = Domain::with_locations(config, [Point3::new(10, 10, 10)]).unwrap();
        assert_eq!(d.is_within_error(Point3::new(13, 10, 10)), None);
        assert!(!d.targets()[0].is_found());
        assert_eq!(
            d.is_within_error(Point3::new(8, 12, 11)),
            Some(Point3::new(10, 10, 10))
        );
        assert!(d.is_complete());
        assert_eq!(d.is_within_error(Point3::new(10, 10, 10)), None);
    }

    #[test]
    fn is_within_error_only_matches_current() {
        let config = DomainConfig::new("t", 50, 0)
            .with_tolerance(0)
            .with_probe_delay(Duration::ZERO);
        let d = Domain::with_locations(config, [Point3::new(1, 1, 1), Point3::new(2, 2, 2)])
            .unwrap();
        assert_eq!(d.is_within_error(Point3::new(2, 2, 2)), None);
        assert_eq!(d.found_count(), 0);
        assert_eq!(
            d.is_within_error(Point3::new(1, 1, 1)),
            Some(Point3::new(1, 1, 1))
        );
        assert_eq!(
            d.is_within_error(Point3::new(2, 2, 2)),
            Some(Point3::new(2, 2, 2))
        );
    }

    #[test]
    fn is_within_error_sleeps_for_probe_delay() {
        let config = DomainConfig::new("t", 10, 0).with_probe_delay(Duration::from_millis(20));
        let d = Domain::with_locations(config, [Point3::splat(5)]).unwrap();
        let start = std::time::Instant::now();
        d.is_within_error(Point3::ORIGIN);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn duplicate_targets_are_found_separately() {
        let config = DomainConfig::new("tiny", 40, 3).with_probe_delay(Duration::ZERO);
        let d = Domain::from_config(config).unwrap();
        for _ in 0..3 {
            assert_eq!(
                d.is_within_error(Point3::splat(20)),
                Some(Point3::splat(20))
            );
        }
        assert!(d.is_complete());
    }

    #[test]
    fn out_of_range_targets_are_queryable() {
        let d = fast(10, &[Point3::new(-4, 12, 5)]);
        assert_eq!(
            d.search(Point3::ORIGIN),
            Vector3::new(-4.0, 12.0, 5.0)
        );
        assert_eq!(d.is_within_error(Point3::new(0, 9, 5)), Some(Point3::new(-4, 12, 5)));
    }

    // ── Hint & reset ────────────────────────────────────────────

    #[test]
    fn hint_is_tolerance_box_corner() {
        let d = fast(100, &[Point3::new(30, 40, 50), Point3::new(60, 60, 60)]);
        assert_eq!(d.hint(), Some(Point3::new(20, 30, 40)));
        d.search(Point3::new(30, 40, 50));
        assert_eq!(d.hint(), Some(Point3::new(50, 50, 50)));
        d.search(Point3::new(60, 60, 60));
        assert_eq!(d.hint(), None);
    }

    #[test]
    fn reset_restores_initial_state() {
        let d = fast(10, &[Point3::new(1, 1, 1), Point3::new(2, 2, 2)]);
        d.search(Point3::new(1, 1, 1));
        d.search(Point3::new(2, 2, 2));
        assert!(d.is_complete());
        d.reset();
        assert_eq!(d.found_count(), 0);
        assert_eq!(d.current_target(), Some(0));
    }

    #[test]
    fn display_summarises_progress() {
        let d = fast(10, &[Point3::new(1, 1, 1), Point3::new(2, 2, 2)]);
        d.search(Point3::new(1, 1, 1));
        let s = d.to_string();
        assert!(s.starts_with("Domain test (size 10)"));
        assert!(s.contains("found (1, 1, 1)"));
        assert!(s.ends_with("Targets found: 1/2"));
    }

    #[test]
    fn concurrent_hits_claim_each_target_once() {
        let config = DomainConfig::new("race", 10, 0)
            .with_tolerance(1)
            .with_probe_delay(Duration::ZERO);
        let d = Domain::with_locations(config, [Point3::splat(4), Point3::splat(4)]).unwrap();
        let barrier = std::sync::Barrier::new(8);

        let hits: Vec<Option<Point3>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        d.is_within_error(Point3::splat(5))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(hits.iter().filter(|h| h.is_some()).count(), 2);
        assert!(d.is_complete());
    }

    #[test]
    fn concurrent_exact_searches_mark_one_target_each() {
        let d = fast(10, &[Point3::splat(3)]);
        let barrier = std::sync::Barrier::new(4);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    barrier.wait();
                    assert_eq!(d.search(Point3::splat(3)), Vector3::ZERO);
                });
            }
        });
        assert_eq!(d.found_count(), 1);
    }

    #[test]
    fn domain_is_sync() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<Domain>();
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn targets_are_sorted(
            name in "[a-z]{1,8}",
            size in 1i32..2000,
            count in 1usize..12,
        ) {
            let d = Domain::new(&name, size, count).unwrap();
            let locs: Vec<Point3> = d.targets().iter().map(Target::location).collect();
            prop_assert!(locs.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(locs.len(), count);
        }

        #[test]
        fn found_prefix_and_hint_track_probes(
            locs in prop::collection::vec(prop::array::uniform3(0i32..8), 1..6),
            probes in prop::collection::vec(prop::array::uniform3(0i32..8), 0..40),
        ) {
            let config = DomainConfig::new("p", 8, 0)
                .with_tolerance(1)
                .with_probe_delay(Duration::ZERO);
            let d = Domain::with_locations(config, locs.into_iter().map(Point3::from)).unwrap();
            for p in probes {
                let p = Point3::from(p);
                if p.x() % 2 == 0 {
                    d.is_within_error(p);
                } else {
                    d.search(p);
                }
                assert_prefix_invariant(&d);
                if let Some(hint) = d.hint() {
                    let current = &d.targets()[d.current_target().unwrap()];
                    prop_assert!(!current.is_found());
                    prop_assert_eq!(hint, current.location().translated_by(&Vector3::splat(-1.0)));
                }
            }
        }
    }
}
