//! FIFO of externally supplied probe points for interactive crawlers.
//!
//! Built on an unbounded crossbeam channel: producers push from any thread
//! without external locking while the single consumer polls with a bounded
//! idle wait.

use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use paramsearch_core::Point3;

use crate::error::CrawlerError;

/// Producer handle for an interactive crawler's point queue.
///
/// Cheap to clone; every clone feeds the same consumer.
#[derive(Clone, Debug)]
pub struct PointQueue {
    tx: Sender<Point3>,
}

/// Consumer end of a [`PointQueue`], owned by the interactive crawler.
#[derive(Debug)]
pub struct PointInbox {
    rx: Receiver<Point3>,
}

impl PointQueue {
    /// Create a connected producer/consumer pair.
    pub fn channel() -> (PointQueue, PointInbox) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (PointQueue { tx }, PointInbox { rx })
    }

    /// Enqueue a point to be tested.
    ///
    /// # Errors
    ///
    /// [`CrawlerError::QueueClosed`] if the consumer has been dropped.
    pub fn push(&self, point: Point3) -> Result<(), CrawlerError> {
        self.tx.send(point).map_err(|_| CrawlerError::QueueClosed)
    }

    /// Parse coordinate entry such as `"120, 45, 200"` and enqueue it.
    ///
    /// Returns the parsed point.
    ///
    /// # Errors
    ///
    /// [`CrawlerError::InvalidPoint`] if the text is not three integers, or
    /// [`CrawlerError::QueueClosed`] if the consumer has been dropped.
    pub fn push_str(&self, entry: &str) -> Result<Point3, CrawlerError> {
        let point: Point3 = entry.parse()?;
        self.push(point)?;
        Ok(point)
    }

    /// Number of points waiting to be consumed.
    pub fn len(&self) -> usize {
        self.tx.len()
    }

    /// Whether no points are waiting.
    pub fn is_empty(&self) -> bool {
        self.tx.is_empty()
    }
}

impl PointInbox {
    /// Take the next point without waiting.
    pub fn try_next(&self) -> Option<Point3> {
        self.rx.try_recv().ok()
    }

    /// Take the next point, waiting at most `idle` for one to arrive.
    ///
    /// A zero `idle` never blocks.
    pub fn next_within(&self, idle: Duration) -> Option<Point3> {
        if idle.is_zero() {
            return self.try_next();
        }
        match self.rx.recv_timeout(idle) {
            Ok(point) => Some(point),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Number of points waiting.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Whether no points are waiting.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramsearch_core::ParsePointError;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn fifo_order() {
        let (q, inbox) = PointQueue::channel();
        q.push(Point3::new(1, 0, 0)).unwrap();
        q.push(Point3::new(2, 0, 0)).unwrap();
        assert_eq!(q.len(), 2);
        assert_eq!(inbox.try_next(), Some(Point3::new(1, 0, 0)));
        assert_eq!(inbox.try_next(), Some(Point3::new(2, 0, 0)));
        assert_eq!(inbox.try_next(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn push_str_parses_coordinates() {
        let (q, inbox) = PointQueue::channel();
        assert_eq!(q.push_str("3, 4, 5"), Ok(Point3::new(3, 4, 5)));
        assert_eq!(
            q.push_str("3, 4"),
            Err(CrawlerError::InvalidPoint(ParsePointError::WrongArity {
                found: 2
            }))
        );
        assert_eq!(inbox.len(), 1);
    }

    #[test]
    fn push_after_consumer_dropped_fails() {
        let (q, inbox) = PointQueue::channel();
        drop(inbox);
        assert_eq!(q.push(Point3::ORIGIN), Err(CrawlerError::QueueClosed));
    }

    #[test]
    fn idle_wait_is_bounded() {
        let (_q, inbox) = PointQueue::channel();
        let start = Instant::now();
        assert_eq!(inbox.next_within(Duration::from_millis(20)), None);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn idle_wait_wakes_on_push() {
        let (q, inbox) = PointQueue::channel();
        let producer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            q.push(Point3::new(7, 8, 9)).unwrap();
        });
        assert_eq!(
            inbox.next_within(Duration::from_secs(5)),
            Some(Point3::new(7, 8, 9))
        );
        producer.join().unwrap();
    }
}
