//! Crawler driven by points supplied from outside.

use std::time::Duration;

use paramsearch_core::Point3;
use paramsearch_crawler::{Crawler, PointInbox, PointQueue, ProbeContext};
use paramsearch_domain::Domain;
use tracing::debug;

/// Default wait for a point before a step gives up.
pub const DEFAULT_IDLE: Duration = Duration::from_secs(1);

/// Tests points taken from a [`PointQueue`], one per step.
///
/// Producers obtain a queue handle with [`queue`](Self::queue) (or through
/// [`Crawler::point_queue`]) and may push from any thread. A step with an
/// empty queue waits up to the idle period, then returns `None` without
/// probing. A step whose point misses also returns `None`; the point is
/// consumed either way.
///
/// The steered variant is the same crawler under another name, meant to be
/// fed from [`Domain::hint`] by a guiding observer.
#[derive(Debug)]
pub struct InteractiveCrawler<'a> {
    ctx: ProbeContext<'a>,
    name: &'static str,
    queue: PointQueue,
    inbox: PointInbox,
    idle: Duration,
}

impl<'a> InteractiveCrawler<'a> {
    /// An interactive crawler over `domain` with the default idle period.
    pub fn new(domain: &'a Domain) -> Self {
        Self::named(domain, "Interactive Crawler")
    }

    /// The steered variant: an interactive crawler named for hint-guided
    /// use.
    pub fn steered(domain: &'a Domain) -> Self {
        Self::named(domain, "Steered Crawler")
    }

    fn named(domain: &'a Domain, name: &'static str) -> Self {
        let (queue, inbox) = PointQueue::channel();
        Self {
            ctx: ProbeContext::new(domain),
            name,
            queue,
            inbox,
            idle: DEFAULT_IDLE,
        }
    }

    /// Replace the idle period. Zero makes empty-queue steps return at once.
    pub fn with_idle(mut self, idle: Duration) -> Self {
        self.idle = idle;
        self
    }

    /// How long a step waits for a point.
    pub fn idle(&self) -> Duration {
        self.idle
    }

    /// A producer handle feeding this crawler.
    pub fn queue(&self) -> PointQueue {
        self.queue.clone()
    }
}

impl<'a> Crawler<'a> for InteractiveCrawler<'a> {
    fn name(&self) -> &str {
        self.name
    }

    fn context(&self) -> &ProbeContext<'a> {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut ProbeContext<'a> {
        &mut self.ctx
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn point_queue(&self) -> Option<PointQueue> {
        Some(self.queue())
    }

    fn search(&mut self) -> Option<Point3> {
        let point = self.inbox.next_within(self.idle)?;
        if self.ctx.test_point(point).is_zero() {
            let hit = self.ctx.last_hit();
            debug!(crawler = self.name, probe = %point, hit = hit.is_some(), "tested queued point");
            hit
        } else {
            debug!(crawler = self.name, probe = %point, "queued point missed");
            None
        }
    }
}
