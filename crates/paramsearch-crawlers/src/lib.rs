//! Reference search strategies for paramsearch.
//!
//! | Strategy | Traversal |
//! |---|---|
//! | [`SimpleCrawler`] | Full ascending sweep from the origin on every step. |
//! | [`ImprovedSimpleCrawler`] | Ascending sweep resumed just past the last find. |
//! | [`DirectedCrawler`] | Unit steps toward the target, one axis at a time. |
//! | [`ImprovedDirectedCrawler`] | Unit steps toward the target on all axes at once. |
//! | [`RandomCrawler`] | Uniform random probes inside the cube. |
//! | [`InteractiveCrawler`] | Points supplied externally through a [`PointQueue`]. |
//!
//! [`CrawlerRegistry`] maps strategy names to constructors so a driver can
//! pick a strategy by name at startup.
//!
//! [`PointQueue`]: paramsearch_crawler::PointQueue

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod directed;
pub mod improved_directed;
pub mod improved_simple;
pub mod interactive;
pub mod random;
pub mod registry;
pub mod simple;

pub use directed::DirectedCrawler;
pub use improved_directed::ImprovedDirectedCrawler;
pub use improved_simple::ImprovedSimpleCrawler;
pub use interactive::InteractiveCrawler;
pub use random::RandomCrawler;
pub use registry::{CrawlerCtor, CrawlerRegistry};
pub use simple::SimpleCrawler;
