//! Floating-point displacement vectors.

use std::fmt;

/// A vector in 3D space with `f64` components.
///
/// The Euclidean magnitude is computed once at construction. Equality
/// compares components only, so `-0.0` and `0.0` are equal and a
/// squashed vector with no remaining displacement equals [`Vector3::ZERO`].
#[derive(Clone, Copy, Debug)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
    magnitude: f64,
}

impl Vector3 {
    /// The zero vector, `(0, 0, 0)`.
    ///
    /// Returned by directional queries to signal "target found here".
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        magnitude: 0.0,
    };

    /// Create a vector from its three components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            magnitude: (x * x + y * y + z * z).sqrt(),
        }
    }

    /// Create a vector with all three components equal to `c`.
    pub fn splat(c: f64) -> Self {
        Self::new(c, c, c)
    }

    /// The X component.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The Y component.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The Z component.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Euclidean length, cached at construction.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Returns `true` if every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Unit vector with the same direction.
    ///
    /// Returns `None` for the zero vector, which has no direction.
    pub fn normalize(&self) -> Option<Vector3> {
        if self.magnitude == 0.0 {
            return None;
        }
        Some(Self::new(
            self.x / self.magnitude,
            self.y / self.magnitude,
            self.z / self.magnitude,
        ))
    }

    /// Reduce each component to its sign: `-1`, `0` or `1`.
    ///
    /// `(3.2, 0.0, -0.2)` squashes to `(1, 0, -1)`. Zero components stay
    /// zero (unlike [`f64::signum`], which maps `0.0` to `1.0`).
    pub fn squash(&self) -> Vector3 {
        fn sign(c: f64) -> f64 {
            if c == 0.0 {
                0.0
            } else {
                c.signum()
            }
        }
        Self::new(sign(self.x), sign(self.y), sign(self.z))
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
