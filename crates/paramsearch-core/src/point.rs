//! Integer lattice points.

use std::fmt;
use std::str::FromStr;

use crate::error::ParsePointError;
use crate::vector::Vector3;

/// A point in integer 3D space.
///
/// Ordered lexicographically by `(x, y, z)`, which is the order targets
/// are activated in and the order grid sweeps visit the domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point3 {
    x: i32,
    y: i32,
    z: i32,
}

impl Point3 {
    /// The origin, `(0, 0, 0)`.
    pub const ORIGIN: Point3 = Point3 { x: 0, y: 0, z: 0 };

    /// Create a point at the given coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Create a point with all three coordinates equal to `c`.
    pub const fn splat(c: i32) -> Self {
        Self::new(c, c, c)
    }

    /// The X coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// The Y coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// The Z coordinate.
    pub fn z(&self) -> i32 {
        self.z
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point3) -> f64 {
        self.vector_to(other).magnitude()
    }

    /// Displacement from this point to `other`.
    pub fn vector_to(&self, other: &Point3) -> Vector3 {
        Vector3::new(
            f64::from(other.x) - f64::from(self.x),
            f64::from(other.y) - f64::from(self.y),
            f64::from(other.z) - f64::from(self.z),
        )
    }

    /// Unit vector pointing from this point to `other`.
    ///
    /// `None` when the two points coincide.
    pub fn normalized_vector_to(&self, other: &Point3) -> Option<Vector3> {
        self.vector_to(other).normalize()
    }

    /// The point reached by moving along `v`.
    ///
    /// Vector components are truncated toward zero before being added.
    pub fn translated_by(&self, v: &Vector3) -> Point3 {
        Point3::new(
            self.x.wrapping_add(v.x() as i32),
            self.y.wrapping_add(v.y() as i32),
            self.z.wrapping_add(v.z() as i32),
        )
    }

    /// Whether `other` lies within `tolerance` of this point on every axis.
    ///
    /// Each axis is bounded independently, so the accepted region is a
    /// cube of side `2 * tolerance + 1`, not a sphere.
    pub fn is_within(&self, tolerance: i32, other: &Point3) -> bool {
        let within = |a: i32, b: i32| (i64::from(a) - i64::from(b)).abs() <= i64::from(tolerance);
        within(self.x, other.x) && within(self.y, other.y) && within(self.z, other.z)
    }
}

impl From<[i32; 3]> for Point3 {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Parses `x,y,z`, `(x, y, z)` or whitespace-separated integers.
impl FromStr for Point3 {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let tokens: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.len() != 3 {
            return Err(ParsePointError::WrongArity {
                found: tokens.len(),
            });
        }
        let mut coords = [0i32; 3];
        for (slot, token) in coords.iter_mut().zip(&tokens) {
            *slot = token
                .parse()
                .map_err(|_| ParsePointError::InvalidCoordinate {
                    token: (*token).to_string(),
                })?;
        }
        Ok(Point3::from(coords))
    }
}
