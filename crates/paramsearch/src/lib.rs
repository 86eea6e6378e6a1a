//! Paramsearch: hidden-target search over a seeded cubic parameter space.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all paramsearch sub-crates. For most users, adding `paramsearch` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::time::Duration;
//! use paramsearch::prelude::*;
//!
//! // The benchmark domain, with the probe delay switched off.
//! let config = DomainConfig::default().with_probe_delay(Duration::ZERO);
//! let domain = Domain::from_config(config).unwrap();
//!
//! let registry = CrawlerRegistry::with_defaults();
//! let mut crawler = registry.create("ImprovedDirectedCrawler", &domain).unwrap();
//! let report = crawler.run();
//!
//! assert_eq!(report.found.len(), 5);
//! assert!(domain.is_complete());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`geometry`] | `paramsearch-core` | `Point3`, `Vector3`, `GridScan`, point parsing |
//! | [`domain`] | `paramsearch-domain` | `Domain`, `DomainConfig`, seeded placement |
//! | [`crawler`] | `paramsearch-crawler` | `Crawler` trait, probe context, observers, point queue |
//! | [`crawlers`] | `paramsearch-crawlers` | Built-in strategies and the strategy registry |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Points, vectors and cube traversal (`paramsearch-core`).
///
/// [`geometry::Point3`] parses from coordinate entry such as `"120, 45, 200"`.
pub use paramsearch_core as geometry;

/// Target domains and query protocols (`paramsearch-domain`).
///
/// [`domain::Domain`] answers the directional query
/// ([`domain::Domain::search`]), the slow tolerance query
/// ([`domain::Domain::is_within_error`]) and [`domain::Domain::hint`].
pub use paramsearch_domain as domain;

/// The crawler contract (`paramsearch-crawler`).
///
/// Implement [`crawler::Crawler`] to add a strategy; probe only through
/// [`crawler::ProbeContext::test_point`].
pub use paramsearch_crawler as crawler;

/// Built-in strategies (`paramsearch-crawlers`).
///
/// Construct them directly or by name through
/// [`crawlers::CrawlerRegistry`].
pub use paramsearch_crawlers as crawlers;

/// Common imports for typical paramsearch usage.
///
/// ```rust
/// use paramsearch::prelude::*;
/// ```
///
/// This imports the geometry types, the domain and its config, the crawler
/// trait with its observer and queue handles, every built-in strategy and
/// the registry.
pub mod prelude {
    // Geometry
    pub use paramsearch_core::{GridScan, ParsePointError, Point3, Vector3};

    // Domain
    pub use paramsearch_domain::{Domain, DomainConfig, DomainError, Target};

    // Crawler contract
    pub use paramsearch_crawler::{
        Crawler, CrawlerError, PointQueue, ProbeContext, ProbeObserver, RunReport,
    };

    // Strategies
    pub use paramsearch_crawlers::{
        CrawlerRegistry, DirectedCrawler, ImprovedDirectedCrawler, ImprovedSimpleCrawler,
        InteractiveCrawler, RandomCrawler, SimpleCrawler,
    };
}
