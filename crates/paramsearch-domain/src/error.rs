//! Error types for domain construction.

use std::error::Error;
use std::fmt;

/// Errors detected while validating a [`DomainConfig`](crate::DomainConfig).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomainError {
    /// The cube side length is zero or negative.
    InvalidSize {
        /// The rejected size.
        size: i32,
    },
    /// A domain must hold at least one target.
    NoTargets,
    /// The per-axis tolerance is negative.
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: i32,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(f, "domain size must be positive, got {size}")
            }
            Self::NoTargets => write!(f, "domain must have at least one target"),
            Self::InvalidTolerance { tolerance } => {
                write!(f, "tolerance must be >= 0, got {tolerance}")
            }
        }
    }
}

impl Error for DomainError {}
