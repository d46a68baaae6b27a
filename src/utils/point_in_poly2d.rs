use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Segment;
use alloc::vec::Vec;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Tests if the given point is inside an arbitrary closed polygon with arbitrary orientation,
/// using a crossing counting strategy.
///
/// The polygon is assumed to be closed, i.e., first and last point of the polygon are implicitly
/// assumed to be connected by an edge.
///
/// This handles concave polygons. Points lying exactly on the boundary may be classified
/// either way.
pub fn point_in_poly2d(pt: &Point<Real>, poly: &[Point<Real>]) -> bool {
    if poly.is_empty() {
        return false;
    }

    let mut winding = 0i32;

    for (i, a) in poly.iter().enumerate() {
        let b = poly[(i + 1) % poly.len()];
        let seg_dir = b - a;
        let dpt = pt - a;
        let perp = dpt.perp(&seg_dir);
        winding += match (dpt.y >= 0.0, b.y > pt.y) {
            (true, true) if perp < 0.0 => 1,
            (false, false) if perp > 0.0 => 1,
            _ => 0,
        };
    }

    winding % 2 == 1
}

/// The distance between `pt` and the closest edge of the closed polygon `poly`.
///
/// Returns `Real::MAX` if `poly` is empty.
pub fn distance_to_poly2d_boundary(pt: &Point<Real>, poly: &[Point<Real>]) -> Real {
    poly.iter()
        .enumerate()
        .map(|(i, a)| Segment::new(*a, poly[(i + 1) % poly.len()]).distance_to_point(pt))
        .fold(Real::MAX, Real::min)
}

/// Tests if the given point is inside the closed polygon `poly` offset by `tolerance`.
///
/// - `tolerance >= 0`: the polygon is dilated, points outside of it but not farther than
///   `tolerance` from its boundary are considered inside. With a zero tolerance this is a
///   closed test: points exactly on the boundary (e.g. the vertices) are inside.
/// - `tolerance < 0`: the polygon is eroded, points inside of it are only considered
///   inside if they are at least `-tolerance` away from its boundary.
///
/// Polygons with less than 3 vertices contain nothing.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use gridmesh2d::utils::point_in_poly2d_with_tolerance;
/// use gridmesh2d::math::Point;
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let pt = Point::new(1.0, 5.0);
///
/// assert!(point_in_poly2d_with_tolerance(&pt, &square, 0.0));
/// assert!(!point_in_poly2d_with_tolerance(&pt, &square, -2.0));
/// assert!(point_in_poly2d_with_tolerance(&Point::new(-1.0, 5.0), &square, 2.0));
/// # }
/// ```
pub fn point_in_poly2d_with_tolerance(
    pt: &Point<Real>,
    poly: &[Point<Real>],
    tolerance: Real,
) -> bool {
    if poly.len() < 3 {
        return false;
    }

    let inside = point_in_poly2d(pt, poly);

    if tolerance >= 0.0 {
        inside || distance_to_poly2d_boundary(pt, poly) <= tolerance
    } else {
        inside && distance_to_poly2d_boundary(pt, poly) >= -tolerance
    }
}

/// Batched version of [`point_in_poly2d_with_tolerance`].
///
/// The result is aligned index-for-index with `pts`. Points outside of the (possibly
/// dilated) bounding box of the polygon are rejected without running the full test.
/// With the `parallel` feature enabled, points are tested concurrently.
pub fn points_in_poly2d_with_tolerance(
    pts: &[Point<Real>],
    poly: &[Point<Real>],
    tolerance: Real,
) -> Vec<bool> {
    if poly.len() < 3 {
        return alloc::vec![false; pts.len()];
    }

    let aabb = Aabb::from_points_ref(poly).loosened(tolerance.max(0.0));
    let test = |pt: &Point<Real>| {
        aabb.contains_local_point(pt) && point_in_poly2d_with_tolerance(pt, poly, tolerance)
    };

    #[cfg(feature = "parallel")]
    let result = pts.par_iter().map(test).collect();
    #[cfg(not(feature = "parallel"))]
    let result = pts.iter().map(test).collect();

    result
}
