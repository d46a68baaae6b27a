use crate::math::{Point, Real};
use alloc::vec::Vec;
use ordered_float::OrderedFloat;

#[inline]
fn point_key(pt: &Point<Real>) -> [OrderedFloat<Real>; 2] {
    [OrderedFloat(pt.x), OrderedFloat(pt.y)]
}

/// Removes exact duplicates from `pts`, leaving the remaining points sorted
/// lexicographically by `(x, y)`.
pub fn dedup_points(pts: &mut Vec<Point<Real>>) {
    pts.sort_unstable_by_key(point_key);
    pts.dedup();
}

/// Removes exact duplicates from `pts`, keeping the first occurrence of each point
/// and preserving the relative order of the remaining points.
pub fn dedup_points_stable(pts: &mut Vec<Point<Real>>) {
    let mut order: Vec<usize> = (0..pts.len()).collect();
    // Stable sort: within a run of equal points the first occurrence comes first.
    order.sort_by_key(|i| point_key(&pts[*i]));

    let mut keep = alloc::vec![true; pts.len()];

    for pair in order.windows(2) {
        if pts[pair[0]] == pts[pair[1]] {
            keep[pair[1]] = false;
        }
    }

    let mut keep = keep.into_iter();
    pts.retain(|_| keep.next() == Some(true));
}
