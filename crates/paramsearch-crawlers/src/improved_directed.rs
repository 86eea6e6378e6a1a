//! Gradient walk that moves on every axis at once.

use paramsearch_core::Point3;
use paramsearch_crawler::{Crawler, ProbeContext};
use paramsearch_domain::Domain;

/// Walks toward the current target by the sign of the displacement on
/// every axis at once: a diagonal unit step per probe.
///
/// Needs at most the largest per-axis offset in probes, against the sum
/// of offsets for [`DirectedCrawler`](crate::DirectedCrawler).
#[derive(Debug)]
pub struct ImprovedDirectedCrawler<'a> {
    ctx: ProbeContext<'a>,
    position: Point3,
}

impl<'a> ImprovedDirectedCrawler<'a> {
    /// An improved directed crawler over `domain`, starting at the origin.
    pub fn new(domain: &'a Domain) -> Self {
        Self {
            ctx: ProbeContext::new(domain),
            position: Point3::ORIGIN,
        }
    }

    /// The point the next probe will test.
    pub fn position(&self) -> Point3 {
        self.position
    }
}

impl<'a> Crawler<'a> for ImprovedDirectedCrawler<'a> {
    fn name(&self) -> &str {
        "Improved Directed Crawler"
    }

    fn context(&self) -> &ProbeContext<'a> {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut ProbeContext<'a> {
        &mut self.ctx
    }

    fn search(&mut self) -> Option<Point3> {
        loop {
            let direction = self.ctx.test_point(self.position);
            if direction.is_zero() {
                return self.ctx.last_hit();
            }
            self.position = self.position.translated_by(&direction.squash());
        }
    }
}
