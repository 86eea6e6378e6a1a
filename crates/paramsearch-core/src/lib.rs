//! Geometry primitives and shared error types for paramsearch.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the integer lattice [`Point3`] probed by crawlers, the floating-point
//! [`Vector3`] returned by directional queries, the [`GridScan`] sweep
//! shared by exhaustive strategies, and coordinate parsing errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod point;
pub mod scan;
pub mod vector;

pub use error::ParsePointError;
pub use point::Point3;
pub use scan::GridScan;
pub use vector::Vector3;
