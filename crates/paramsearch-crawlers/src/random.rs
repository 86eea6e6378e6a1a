//! Uniform random probing.

use paramsearch_core::Point3;
use paramsearch_crawler::{Crawler, ProbeContext};
use paramsearch_domain::Domain;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Probes points drawn uniformly from `[0, size)^3` until one is within
/// tolerance of the current target.
///
/// Ignores the displacement feedback entirely. Expected probes per target
/// grow with `size^3 / (2 * tolerance + 1)^3`, so this is only practical on
/// small cubes or with a generous tolerance.
#[derive(Debug)]
pub struct RandomCrawler<'a> {
    ctx: ProbeContext<'a>,
    rng: ChaCha8Rng,
}

impl<'a> RandomCrawler<'a> {
    /// A random crawler seeded from the thread-local generator.
    pub fn new(domain: &'a Domain) -> Self {
        Self::with_seed(domain, rand::random())
    }

    /// A random crawler with a fixed seed; equal seeds over equal domains
    /// probe the same sequence.
    pub fn with_seed(domain: &'a Domain, seed: u64) -> Self {
        Self {
            ctx: ProbeContext::new(domain),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn sample(&mut self, size: i32) -> Point3 {
        Point3::new(
            self.rng.random_range(0..size),
            self.rng.random_range(0..size),
            self.rng.random_range(0..size),
        )
    }
}

impl<'a> Crawler<'a> for RandomCrawler<'a> {
    fn name(&self) -> &str {
        "Random Crawler"
    }

    fn context(&self) -> &ProbeContext<'a> {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut ProbeContext<'a> {
        &mut self.ctx
    }

    fn search(&mut self) -> Option<Point3> {
        let size = self.ctx.domain().size();
        loop {
            let point = self.sample(size);
            if self.ctx.test_point(point).is_zero() {
                return self.ctx.last_hit();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramsearch_test_utils::{fast_domain, fixed_domain_with_tolerance, RecordingObserver};

    #[test]
    fn probes_stay_inside_cube() {
        let d = fixed_domain_with_tolerance(6, 0, &[Point3::new(5, 5, 5)]);
        let observer = RecordingObserver::shared();
        let mut c = RandomCrawler::with_seed(&d, 7);
        c.subscribe(observer.clone());
        assert_eq!(c.search(), Some(Point3::new(5, 5, 5)));
        assert!(observer
            .misses()
            .iter()
            .all(|p| [p.x(), p.y(), p.z()].iter().all(|c| (0..6).contains(c))));
    }

    #[test]
    fn same_seed_same_probe_sequence() {
        let a = fast_domain("random", 32, 2);
        let b = fast_domain("random", 32, 2);
        let ra = RandomCrawler::with_seed(&a, 42).run();
        let rb = RandomCrawler::with_seed(&b, 42).run();
        assert_eq!(ra, rb);
        assert_eq!(ra.found, vec![Point3::splat(16); 2]);
    }

    #[test]
    fn unseeded_crawler_still_finds_targets() {
        let d = fast_domain("random", 16, 1);
        let report = RandomCrawler::new(&d).run();
        assert_eq!(report.found, vec![Point3::splat(8)]);
        assert!(report.probes >= 1);
    }

    #[test]
    fn complete_domain_yields_none() {
        let d = fixed_domain_with_tolerance(2, 5, &[Point3::ORIGIN]);
        let mut c = RandomCrawler::with_seed(&d, 1);
        assert_eq!(c.search(), Some(Point3::ORIGIN));
        assert_eq!(c.search(), None);
    }
}
