//! Definition of the segment shape.

use crate::math::{Point, Real, Vector};
use na;

/// A segment shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// Projects a point on this segment.
    ///
    /// A degenerate segment (`a == b`) projects everything on `a`.
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        let ab = self.b - self.a;
        let ap = pt - self.a;
        let ab_ap = ab.dot(&ap);
        let sqnab = ab.norm_squared();

        if ab_ap <= 0.0 {
            // Voronoï region of vertex 'a'.
            self.a
        } else if ab_ap >= sqnab {
            // Voronoï region of vertex 'b'.
            self.b
        } else {
            // Voronoï region of the segment interior.
            self.a + ab * (ab_ap / sqnab)
        }
    }

    /// The euclidean distance between `pt` and its projection on this segment.
    #[inline]
    pub fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        na::distance(pt, &self.project_point(pt))
    }
}
