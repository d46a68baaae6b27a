use crate::math::{Point, Real};
use crate::shape::{Polygon, Triangle};
use alloc::vec::Vec;

/// Flags the triangles belonging to the domain bounded by `outer` minus the `trimming` polygons.
///
/// A triangle belongs to the domain if its centroid is inside `outer` and outside every
/// trimming polygon (boundary included, without tolerance). Triangles are never split:
/// one straddling a boundary is kept or discarded as a whole depending on its centroid.
///
/// The result is aligned index-for-index with `simplices`.
///
/// # Panics
///
/// Panics if a simplex refers to a vertex index out of the bounds of `vertices`.
pub fn classify_triangles(
    vertices: &[Point<Real>],
    simplices: &[[u32; 3]],
    outer: &Polygon,
    trimming: &[Polygon],
) -> Vec<bool> {
    let centroids: Vec<_> = simplices
        .iter()
        .map(|idx| Triangle::from_indices(vertices, *idx).center())
        .collect();

    let mut keep = outer.contains_points(&centroids, 0.0);

    for trim in trimming {
        let excluded = trim.contains_points(&centroids, 0.0);

        for (keep, excluded) in keep.iter_mut().zip(excluded) {
            *keep &= !excluded;
        }
    }

    keep
}

/// Removes from `simplices` the triangles that don't belong to the domain.
///
/// See [`classify_triangles`]. The relative order of the kept simplices is preserved.
pub fn retain_domain_triangles(
    vertices: &[Point<Real>],
    simplices: &mut Vec<[u32; 3]>,
    outer: &Polygon,
    trimming: &[Polygon],
) {
    let keep = classify_triangles(vertices, simplices, outer, trimming);
    let mut keep = keep.into_iter();
    simplices.retain(|_| keep.next() == Some(true));
}
