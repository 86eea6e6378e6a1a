//! Ascending sweep that resumes just past the previous find.

use paramsearch_core::{GridScan, Point3};
use paramsearch_crawler::{Crawler, ProbeContext};
use paramsearch_domain::Domain;
use tracing::debug;

/// Like [`SimpleCrawler`](crate::SimpleCrawler), but each step picks up the
/// sweep at `(x, y, z + 1)` of the last find instead of at the origin.
///
/// Targets are activated in ascending order, so the resumed sweep never
/// skips past a target whose location lies inside the cube. If a sweep
/// runs off the end the cursor returns to the origin and the step yields
/// `None`; the next step sweeps again from the start.
#[derive(Debug)]
pub struct ImprovedSimpleCrawler<'a> {
    ctx: ProbeContext<'a>,
    cursor: Point3,
}

impl<'a> ImprovedSimpleCrawler<'a> {
    /// An improved simple crawler over `domain`, starting at the origin.
    pub fn new(domain: &'a Domain) -> Self {
        Self {
            ctx: ProbeContext::new(domain),
            cursor: Point3::ORIGIN,
        }
    }

    /// Where the next sweep starts.
    pub fn cursor(&self) -> Point3 {
        self.cursor
    }
}

impl<'a> Crawler<'a> for ImprovedSimpleCrawler<'a> {
    fn name(&self) -> &str {
        "Improved Simple Crawler"
    }

    fn context(&self) -> &ProbeContext<'a> {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut ProbeContext<'a> {
        &mut self.ctx
    }

    fn search(&mut self) -> Option<Point3> {
        for point in GridScan::starting_at(self.ctx.domain().size(), self.cursor) {
            if self.ctx.test_point(point).is_zero() {
                self.cursor = Point3::new(point.x(), point.y(), point.z().saturating_add(1));
                return self.ctx.last_hit();
            }
        }
        debug!(crawler = self.name(), "sweep exhausted; restarting from origin");
        self.cursor = Point3::ORIGIN;
        None
    }
}
