//! Domain fixtures with the probe delay disabled.
//!
//! - [`fast_domain`]: seeded placement, default tolerance.
//! - [`fixed_domain`]: explicit target locations, default tolerance.
//! - [`fixed_domain_with_tolerance`]: explicit locations and tolerance.

use std::time::Duration;

use paramsearch_core::Point3;
use paramsearch_domain::{Domain, DomainConfig};

/// Seeded domain with no probe delay.
///
/// Sizes below 256 place every target at the centre of the cube, so
/// `fast_domain(name, 32, k)` is a cheap domain with `k` reachable,
/// coincident targets.
pub fn fast_domain(name: &str, size: i32, target_count: usize) -> Domain {
    let config = DomainConfig::new(name, size, target_count).with_probe_delay(Duration::ZERO);
    Domain::from_config(config).expect("fixture domain config is valid")
}

/// Domain with explicit targets, default tolerance and no probe delay.
pub fn fixed_domain(size: i32, locations: &[Point3]) -> Domain {
    let tolerance = DomainConfig::default().tolerance;
    fixed_domain_with_tolerance(size, tolerance, locations)
}

/// Domain with explicit targets and tolerance and no probe delay.
pub fn fixed_domain_with_tolerance(size: i32, tolerance: i32, locations: &[Point3]) -> Domain {
    let config = DomainConfig::new("fixture", size, locations.len())
        .with_tolerance(tolerance)
        .with_probe_delay(Duration::ZERO);
    Domain::with_locations(config, locations.iter().copied())
        .expect("fixture needs at least one location and a valid size")
}
