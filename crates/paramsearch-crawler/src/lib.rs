//! Crawler trait, probe context and observer seam for paramsearch.
//!
//! A crawler is a search strategy that converts domain feedback into the
//! next probe point. Every strategy implements [`Crawler::search`]; the
//! shared [`Crawler::run`] loop and the single probe choke point,
//! [`ProbeContext::test_point`], live here.
//!
//! Interactive strategies consume points from a [`PointQueue`] that any
//! number of producers (possibly on other threads) can push into.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod crawler;
pub mod error;
pub mod observer;
pub mod queue;

pub use context::ProbeContext;
pub use crawler::{Crawler, RunReport};
pub use error::CrawlerError;
pub use observer::ProbeObserver;
pub use queue::{PointInbox, PointQueue};
