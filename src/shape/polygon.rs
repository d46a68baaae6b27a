use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Segment;
use crate::utils;
use alloc::vec::Vec;

/// Indicates why a sequence of points cannot be used as a polygon.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// A polygon must have at least three vertices.
    #[error("a polygon needs at least 3 vertices, found {0}.")]
    TooFewVertices(usize),
    /// A polygon vertex has a NaN or infinite coordinate.
    #[error("the vertex {0} has a non-finite coordinate.")]
    NonFiniteVertex(usize),
}

/// A simple planar polygon, possibly non-convex.
///
/// The polygon is implicitly closed: the last vertex is connected to the first one
/// without being repeated. Its orientation does not matter.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use gridmesh2d::math::Point;
/// use gridmesh2d::shape::{Polygon, PolygonError};
///
/// let square = Polygon::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ])
/// .unwrap();
/// assert!(square.contains_point(&Point::new(5.0, 5.0), 0.0));
/// assert!(!square.contains_point(&Point::new(1.0, 5.0), -2.0));
///
/// let segment = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
/// assert_eq!(segment.unwrap_err(), PolygonError::TooFewVertices(2));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point<Real>>,
}

impl Polygon {
    /// Builds a new polygon from its vertices.
    ///
    /// Fails if there are less than three vertices or if one of them isn't finite.
    pub fn new(vertices: Vec<Point<Real>>) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices(vertices.len()));
        }

        if let Some(i) = vertices
            .iter()
            .position(|pt| !pt.x.is_finite() || !pt.y.is_finite())
        {
            return Err(PolygonError::NonFiniteVertex(i));
        }

        Ok(Self { vertices })
    }

    /// Builds a new polygon from a slice of vertices.
    pub fn from_slice(vertices: &[Point<Real>]) -> Result<Self, PolygonError> {
        Self::new(vertices.to_vec())
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The number of vertices (and edges) of this polygon.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The edges of this polygon, including the closing edge from the last vertex to the first.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// The axis-aligned bounding box of this polygon.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points_ref(&self.vertices)
    }

    /// The signed area of this polygon (shoelace formula), positive if counter-clockwise.
    pub fn signed_area(&self) -> Real {
        self.segments()
            .map(|seg| seg.a.coords.perp(&seg.b.coords))
            .sum::<Real>()
            * 0.5
    }

    /// The distance between `pt` and the closest edge of this polygon.
    #[inline]
    pub fn distance_to_boundary(&self, pt: &Point<Real>) -> Real {
        utils::distance_to_poly2d_boundary(pt, &self.vertices)
    }

    /// Tests if `pt` is inside this polygon offset by `tolerance`.
    ///
    /// A positive tolerance dilates the polygon, a negative one erodes it. See
    /// [`point_in_poly2d_with_tolerance`](crate::utils::point_in_poly2d_with_tolerance).
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>, tolerance: Real) -> bool {
        utils::point_in_poly2d_with_tolerance(pt, &self.vertices, tolerance)
    }

    /// Tests each point of `pts` against this polygon offset by `tolerance`.
    ///
    /// The result is aligned index-for-index with `pts`.
    #[inline]
    pub fn contains_points(&self, pts: &[Point<Real>], tolerance: Real) -> Vec<bool> {
        utils::points_in_poly2d_with_tolerance(pts, &self.vertices, tolerance)
    }
}

impl TryFrom<Vec<Point<Real>>> for Polygon {
    type Error = PolygonError;

    fn try_from(vertices: Vec<Point<Real>>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}
