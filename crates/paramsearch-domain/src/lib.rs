//! Seeded target domains for paramsearch.
//!
//! A [`Domain`] is a cube of integer lattice points with a fixed, ordered
//! sequence of hidden targets. Targets are found one at a time, in order,
//! and only the first unfound target (the *current* target) responds to
//! queries.
//!
//! # Query protocols
//!
//! - [`Domain::is_within_error`]: the slow, low-information tolerance query.
//!   Blocks for the configured probe delay, then answers yes (with the exact
//!   target location) or no. It is the only query crawlers may treat as a
//!   confirmed find.
//! - [`Domain::search`]: the instant directional query. Returns the
//!   displacement to the current target, or [`Vector3::ZERO`] on an exact hit.
//! - [`Domain::hint`]: the corner of the current target's tolerance box,
//!   for observers that want to draw progress without leaking the location.
//!
//! [`Vector3::ZERO`]: paramsearch_core::Vector3::ZERO

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod domain;
pub mod error;
pub mod placement;

pub use config::DomainConfig;
pub use domain::{Domain, Target};
pub use error::DomainError;
pub use placement::seeded_locations;
