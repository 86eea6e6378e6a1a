//! Benchmark profiles and utilities for the paramsearch workspace.
//!
//! Provides pre-built domains for benchmarking and examples:
//!
//! - [`reference_profile`]: the benchmark domain (300^3 cube, 5 targets)
//! - [`stress_profile`]: a 1024^3 cube with 32 targets
//! - [`probe_points`]: deterministic probe points inside a cube
//!
//! Every profile has the probe delay switched off, so benchmarks measure
//! the query and strategy cost alone.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use paramsearch_core::Point3;
use paramsearch_domain::{Domain, DomainConfig, DomainError};

/// The benchmark domain: `"Benchmark"`, size 300, 5 targets, tolerance 10.
pub fn reference_profile() -> Result<Domain, DomainError> {
    Domain::from_config(DomainConfig::default().with_probe_delay(Duration::ZERO))
}

/// A larger domain for stress runs: size 1024, 32 targets, tolerance 10.
///
/// Sizes of 512 and above scale digest offsets, so targets spread across
/// the whole cube.
pub fn stress_profile() -> Result<Domain, DomainError> {
    let config = DomainConfig::new("Stress", 1024, 32).with_probe_delay(Duration::ZERO);
    Domain::from_config(config)
}

/// Generate `n` deterministic probe points inside `[0, size)^3`.
///
/// Uses a multiplicative hash of the seed and index per axis, so the same
/// arguments always yield the same points.
pub fn probe_points(n: usize, size: i32, seed: u64) -> Vec<Point3> {
    let size = size.max(1) as u64;
    (0..n as u64)
        .map(|i| {
            let h = seed.wrapping_mul(6364136223846793005).wrapping_add(i);
            let x = h.wrapping_mul(1442695040888963407) % size;
            let y = h.wrapping_mul(2862933555777941757) % size;
            let z = h.wrapping_mul(3202034522624059733) % size;
            Point3::new(x as i32, y as i32, z as i32)
        })
        .collect()
}
