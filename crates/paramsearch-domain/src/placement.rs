//! Deterministic target placement from a hashed seed string.
//!
//! The seed string is `name ++ target_count ++ size ++ 17`, hashed with
//! SHA-1. Digest bytes are consumed cyclically, three per target, each read
//! as a signed byte `b` and mapped to `size / 2 + b * (size / 256)`.
//!
//! The mapping is reproduced bit for bit, quirks included: sizes below 256
//! put every target at the centre and digests can repeat a location.
//! Duplicates are kept.

use paramsearch_core::Point3;
use sha1::{Digest, Sha1};

/// Fixed salt appended to every seed string.
pub const TARGET_SEED: u32 = 17;

/// Compute the unsorted target locations for a seed triple.
///
/// Returns exactly `target_count` points in digest order.
pub fn seeded_locations(name: &str, size: i32, target_count: usize) -> Vec<Point3> {
    let seed = format!("{name}{target_count}{size}{TARGET_SEED}");
    let digest = Sha1::digest(seed.as_bytes());

    let half = size / 2;
    let multiplier = size / 256;
    let mut h = 0;
    let mut next_axis = || {
        let offset = i32::from(digest[h] as i8);
        h = (h + 1) % digest.len();
        half + offset * multiplier
    };

    (0..target_count)
        .map(|_| {
            let x = next_axis();
            let y = next_axis();
            let z = next_axis();
            Point3::new(x, y, z)
        })
        .collect()
}
