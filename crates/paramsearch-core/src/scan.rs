//! Ascending sweep over every point of a cube.

use crate::point::Point3;

/// Iterator over `[0, size)^3` in ascending `(x, y, z)` order.
///
/// Z varies fastest, then Y, then X, so the sequence is sorted by
/// [`Point3`]'s ordering. A scan may start from an arbitrary cursor;
/// a cursor whose Z (or Y) has run past the edge carries into the
/// next row (or plane), matching how a resumed nested loop behaves.
#[derive(Clone, Debug)]
pub struct GridScan {
    size: i32,
    next: Option<Point3>,
}

impl GridScan {
    /// Scan the whole cube starting at the origin.
    pub fn new(size: i32) -> Self {
        Self::starting_at(size, Point3::ORIGIN)
    }

    /// Scan from `cursor` (inclusive) to the end of the cube.
    ///
    /// Negative cursor coordinates are clamped to zero. A cursor past the
    /// last point yields an empty scan.
    pub fn starting_at(size: i32, cursor: Point3) -> Self {
        let next = Self::carry(size, cursor.x().max(0), cursor.y().max(0), cursor.z().max(0));
        Self { size, next }
    }

    /// The side length being scanned.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The point the next call to `next()` will yield, if any.
    pub fn peek(&self) -> Option<Point3> {
        self.next
    }

    // Widened to i64 so cursors near `i32::MAX` carry without overflow.
    fn carry(size: i32, x: i32, y: i32, z: i32) -> Option<Point3> {
        if size <= 0 {
            return None;
        }
        let size = i64::from(size);
        let (mut x, mut y, mut z) = (i64::from(x), i64::from(y), i64::from(z));
        if z >= size {
            y += z / size;
            z %= size;
        }
        if y >= size {
            x += y / size;
            y %= size;
        }
        // All three are now below `size`, which fits in i32.
        (x < size).then(|| Point3::new(x as i32, y as i32, z as i32))
    }
}

impl Iterator for GridScan {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        let current = self.next?;
        self.next = Self::carry(
            self.size,
            current.x(),
            current.y(),
            current.z().saturating_add(1),
        );
        Some(current)
    }
}
