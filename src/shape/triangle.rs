//! Definition of the triangle shape.

use crate::math::{Point, Real};
use crate::utils;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Builds the triangle whose vertices are `vertices[idx[0]]`, `vertices[idx[1]]`, `vertices[idx[2]]`.
    ///
    /// # Panics
    ///
    /// Panics if one of the indices is out of bounds.
    #[inline]
    pub fn from_indices(vertices: &[Point<Real>], idx: [u32; 3]) -> Triangle {
        Triangle::new(
            vertices[idx[0] as usize],
            vertices[idx[1] as usize],
            vertices[idx[2] as usize],
        )
    }

    /// The signed area of this triangle, positive if it is counter-clockwise.
    #[inline]
    pub fn signed_area(&self) -> Real {
        (self.b - self.a).perp(&(self.c - self.a)) * 0.5
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.signed_area().abs()
    }

    /// The geometric center (centroid) of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&[self.a, self.b, self.c])
    }
}
