//! Gradient walk that moves one axis at a time.

use paramsearch_core::{Point3, Vector3};
use paramsearch_crawler::{Crawler, ProbeContext};
use paramsearch_domain::Domain;

/// Walks toward the current target one unit step at a time, fixing the X
/// offset first, then Y, then Z.
///
/// The position persists between steps, so after a find the walk toward
/// the next target starts where the last one ended.
#[derive(Debug)]
pub struct DirectedCrawler<'a> {
    ctx: ProbeContext<'a>,
    position: Point3,
}

impl<'a> DirectedCrawler<'a> {
    /// A directed crawler over `domain`, starting at the origin.
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

/// Keep only the first nonzero axis of a squashed step.
fn first_axis(step: Vector3) -> Vector3 {
    if step.x() != 0.0 {
        Vector3::new(step.x(), 0.0, 0.0)
    } else if step.y() != 0.0 {
        Vector3::new(0.0, step.y(), 0.0)
    } else {
        Vector3::new(0.0, 0.0, step.z())
    }
}

impl<'a> Crawler<'a> for DirectedCrawler<'a> {
    fn name(&self) -> &str {
        "Directed Crawler"
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
            let step = first_axis(direction.squash());
            self.position = self.position.translated_by(&step);
        }
    }
}
