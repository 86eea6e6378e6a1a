//! Error types for geometry parsing.

use std::error::Error;
use std::fmt;

/// Errors from parsing a [`Point3`](crate::Point3) out of coordinate text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsePointError {
    /// The input did not contain exactly three coordinates.
    WrongArity {
        /// Number of coordinates found.
        found: usize,
    },
    /// A coordinate token is not a valid `i32`.
    InvalidCoordinate {
        /// The offending token.
        token: String,
    },
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongArity { found } => {
                write!(f, "expected 3 coordinates, found {found}")
            }
            Self::InvalidCoordinate { token } => {
                write!(f, "invalid coordinate '{token}'")
            }
        }
    }
}

impl Error for ParsePointError {}
