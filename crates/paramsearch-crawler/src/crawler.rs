//! The [`Crawler`] trait and [`RunReport`].

use std::sync::Arc;

use paramsearch_core::Point3;
use paramsearch_domain::Domain;
use tracing::info;

use crate::context::ProbeContext;
use crate::observer::ProbeObserver;
use crate::queue::PointQueue;

/// Outcome of a [`Crawler::run`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Exact target locations, in the order they were found.
    pub found: Vec<Point3>,
    /// Probes issued during this run.
    pub probes: u64,
}

/// A search strategy over a [`Domain`].
///
/// Implementors own a [`ProbeContext`] and supply [`search`](Self::search);
/// everything else has a default built on those two.
///
/// # Contract
///
/// - Every probe goes through [`ProbeContext::test_point`].
/// - `search()` returns the exact location of a newly found target, or
///   `None` if this step found nothing (an interactive crawler with an
///   empty queue, or a grid sweep that ran off the end of the domain).
///
/// # Object safety
///
/// This trait is object-safe; the registry hands out
/// `Box<dyn Crawler<'a> + 'a>`.
pub trait Crawler<'a>: Send {
    /// Human-readable strategy name.
    fn name(&self) -> &str;

    /// Shared probe state.
    fn context(&self) -> &ProbeContext<'a>;

    /// Mutable probe state.
    fn context_mut(&mut self) -> &mut ProbeContext<'a>;

    /// Advance the search by one step.
    fn search(&mut self) -> Option<Point3>;

    /// Whether probe points come from an external queue.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Producer handle for interactive crawlers; `None` for autonomous ones.
    fn point_queue(&self) -> Option<PointQueue> {
        None
    }

    /// The domain being searched.
    fn domain(&self) -> &'a Domain {
        self.context().domain()
    }

    /// Side length of the domain being searched.
    fn domain_size(&self) -> i32 {
        self.domain().size()
    }

    /// Probes issued so far by this crawler.
    fn probe_count(&self) -> u64 {
        self.context().probe_count()
    }

    /// Install the observer notified after every probe.
    fn subscribe(&mut self, observer: Arc<dyn ProbeObserver>) {
        self.context_mut().subscribe(observer);
    }

    /// Call [`search`](Self::search) until every target in the domain is
    /// found.
    ///
    /// Stops on the domain's found state, not on this call's finds, so a
    /// domain that is already partly or fully found ends the run as soon as
    /// its last target is. [`RunReport::found`] holds only this call's
    /// finds.
    ///
    /// Blocks for the domain's probe delay on every probe. An interactive
    /// crawler keeps idling until its producers supply every target.
    fn run(&mut self) -> RunReport {
        let domain = self.domain();
        let target_count = domain.target_count();
        let start_probes = self.probe_count();
        let mut found = Vec::new();

        while !domain.is_complete() {
            if let Some(location) = self.search() {
                info!(
                    crawler = self.name(),
                    target = %location,
                    found = domain.found_count(),
                    of = target_count,
                    "found target"
                );
                found.push(location);
            }
        }

        RunReport {
            found,
            probes: self.probe_count() - start_probes,
        }
    }
}
