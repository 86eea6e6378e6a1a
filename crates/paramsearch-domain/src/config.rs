//! Domain configuration and validation.

use std::time::Duration;

use crate::error::DomainError;

/// Per-axis distance within which a probe confirms the current target.
pub const DEFAULT_TOLERANCE: i32 = 10;

/// Simulated cost of one tolerance query.
pub const DEFAULT_PROBE_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for constructing a [`Domain`](crate::Domain).
///
/// `name`, `size` and `target_count` form the placement seed: two configs
/// that agree on those three fields produce identical target sequences.
/// `tolerance` and `probe_delay` shape the query protocol only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainConfig {
    /// Domain name. Used only as part of the placement seed.
    pub name: String,
    /// Cube side length. Must be positive.
    pub size: i32,
    /// Number of targets to place. Must be at least one.
    pub target_count: usize,
    /// Per-axis tolerance of [`is_within_error`](crate::Domain::is_within_error).
    /// Default: 10.
    pub tolerance: i32,
    /// Blocking delay before each tolerance query. Default: 1 s.
    /// `Duration::ZERO` disables the delay.
    pub probe_delay: Duration,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            name: "Benchmark".to_string(),
            size: 300,
            target_count: 5,
            tolerance: DEFAULT_TOLERANCE,
            probe_delay: DEFAULT_PROBE_DELAY,
        }
    }
}

impl DomainConfig {
    /// A config with the given seed triple and default query settings.
    pub fn new(name: impl Into<String>, size: i32, target_count: usize) -> Self {
        Self {
            name: name.into(),
            size,
            target_count,
            ..Self::default()
        }
    }

    /// Set the per-axis tolerance.
    pub fn with_tolerance(mut self, tolerance: i32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the blocking delay applied before every tolerance query.
    pub fn with_probe_delay(mut self, probe_delay: Duration) -> Self {
        self.probe_delay = probe_delay;
        self
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidSize`] if `size <= 0`
    /// - [`DomainError::NoTargets`] if `target_count == 0`
    /// - [`DomainError::InvalidTolerance`] if `tolerance < 0`
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.size <= 0 {
            return Err(DomainError::InvalidSize { size: self.size });
        }
        if self.target_count == 0 {
            return Err(DomainError::NoTargets);
        }
        if self.tolerance < 0 {
            return Err(DomainError::InvalidTolerance {
                tolerance: self.tolerance,
            });
        }
        Ok(())
    }
}
