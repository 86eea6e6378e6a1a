//! Error types for crawler construction and point submission.

use std::error::Error;
use std::fmt;

use paramsearch_core::ParsePointError;

/// Errors from the crawler registry and interactive point queues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrawlerError {
    /// No strategy is registered under this name.
    UnknownStrategy {
        /// The requested name.
        name: String,
    },
    /// A strategy is already registered under this name.
    DuplicateStrategy {
        /// The conflicting name.
        name: String,
    },
    /// Coordinate entry could not be parsed into a point.
    InvalidPoint(ParsePointError),
    /// The consuming crawler has been dropped.
    QueueClosed,
}

impl fmt::Display for CrawlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStrategy { name } => write!(f, "unknown crawler strategy '{name}'"),
            Self::DuplicateStrategy { name } => {
                write!(f, "crawler strategy '{name}' already registered")
            }
            Self::InvalidPoint(e) => write!(f, "invalid point: {e}"),
            Self::QueueClosed => write!(f, "point queue closed"),
        }
    }
}

impl Error for CrawlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPoint(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParsePointError> for CrawlerError {
    fn from(e: ParsePointError) -> Self {
        Self::InvalidPoint(e)
    }
}
