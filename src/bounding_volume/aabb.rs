//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// Defined by its minimum and maximum corners. The meshing pipeline uses the AABB
/// of the outer boundary as the extent of the background sampling grid.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use gridmesh2d::bounding_volume::Aabb;
/// use gridmesh2d::math::Point;
///
/// let aabb = Aabb::from_points([
///     Point::new(1.0, 2.0),
///     Point::new(-1.0, 4.0),
///     Point::new(0.0, 0.0),
/// ]);
///
/// assert_eq!(aabb.mins, Point::new(-1.0, 0.0));
/// assert_eq!(aabb.maxs, Point::new(1.0, 4.0));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates (bottom-left corner).
    pub mins: Point<Real>,
    /// The point with maximum coordinates (top-right corner).
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its two corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Merging any point into it with [`Aabb::take_point`] yields a valid AABB.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::max_value()).into(),
            Vector::repeat(-Real::max_value()).into(),
        )
    }

    /// Creates a new AABB that tightly encloses a set of points (references).
    pub fn from_points_ref<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        Self::from_points(pts.into_iter().copied())
    }

    /// Creates a new AABB that tightly encloses a set of points (values).
    ///
    /// Returns an invalid AABB (see [`Aabb::new_invalid`]) if the iterator is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();

        for pt in pts {
            result.take_point(pt);
        }

        result
    }

    /// The extents of this `Aabb`: its width and height.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Does this AABB contains a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Enlarges this `Aabb` by `margin` on every side.
    ///
    /// A negative margin shrinks it.
    #[inline]
    #[must_use]
    pub fn loosened(&self, margin: Real) -> Self {
        let margin = Vector::repeat(margin);
        Self::new(self.mins - margin, self.maxs + margin)
    }
}
