//! Exhaustive ascending sweep restarted from the origin on every step.

use paramsearch_core::{GridScan, Point3};
use paramsearch_crawler::{Crawler, ProbeContext};
use paramsearch_domain::Domain;
use tracing::debug;

/// Sweeps the whole cube in ascending `(x, y, z)` order, starting over at
/// the origin each time [`search`](Crawler::search) is called.
///
/// Always lands on a target's exact location, so it finds every target
/// that lies inside the cube.
#[derive(Debug)]
pub struct SimpleCrawler<'a> {
    ctx: ProbeContext<'a>,
}

impl<'a> SimpleCrawler<'a> {
    /// A simple crawler over `domain`.
    pub fn new(domain: &'a Domain) -> Self {
        Self {
            ctx: ProbeContext::new(domain),
        }
    }
}

impl<'a> Crawler<'a> for SimpleCrawler<'a> {
    fn name(&self) -> &str {
        "Simple Crawler"
    }

    fn context(&self) -> &ProbeContext<'a> {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut ProbeContext<'a> {
        &mut self.ctx
    }

    fn search(&mut self) -> Option<Point3> {
        for point in GridScan::new(self.ctx.domain().size()) {
            if self.ctx.test_point(point).is_zero() {
                return self.ctx.last_hit();
            }
        }
        debug!(crawler = self.name(), "sweep exhausted without a find");
        None
    }
}
