use crate::math::{Point, Real};
use crate::shape::Polygon;
use crate::transformation::{reserve_samples, sample_count, validate_mesh_size, MeshError};
use crate::utils;
use alloc::vec::Vec;

/// Number of samples placed on the edge `[a, b]`: `floor(max(|dx|, |dy|) / mesh_size) + 1`.
///
/// The dominant coordinate span drives the subdivision, so consecutive samples are
/// never more than `mesh_size` apart along either axis. `mesh_size` must be strictly
/// positive.
#[inline]
pub fn edge_sample_count(a: &Point<Real>, b: &Point<Real>, mesh_size: Real) -> usize {
    let span = (b - a).abs();
    sample_count(span.x.max(span.y), mesh_size)
}

/// Samples every edge of `polygon`, including the closing edge, without removing duplicates.
///
/// Each edge `[a, b]` contributes [`edge_sample_count`] evenly spaced points from `a` to `b`,
/// both included (an edge with a single sample only contributes `a`). Edge endpoints are
/// reproduced exactly, so the vertices shared by two consecutive edges are emitted twice.
pub fn sample_polygon_edges(
    polygon: &Polygon,
    mesh_size: Real,
) -> Result<Vec<Point<Real>>, MeshError> {
    validate_mesh_size(mesh_size)?;

    let mut result = Vec::new();
    reserve_samples(
        &mut result,
        num_edge_samples(core::iter::once(polygon), mesh_size),
        mesh_size,
    )?;
    push_polygon_edge_samples(polygon, mesh_size, &mut result);
    Ok(result)
}

/// Total number of edge samples of `polygons`, or `None` on overflow.
fn num_edge_samples<'a>(
    polygons: impl IntoIterator<Item = &'a Polygon>,
    mesh_size: Real,
) -> Option<usize> {
    polygons
        .into_iter()
        .flat_map(|polygon| polygon.segments())
        .try_fold(0usize, |total, seg| {
            total.checked_add(edge_sample_count(&seg.a, &seg.b, mesh_size))
        })
}

fn push_polygon_edge_samples(polygon: &Polygon, mesh_size: Real, out: &mut Vec<Point<Real>>) {
    for seg in polygon.segments() {
        let count = edge_sample_count(&seg.a, &seg.b, mesh_size);
        out.push(seg.a);

        if count > 1 {
            let step = seg.scaled_direction() / (count - 1) as Real;
            out.extend((1..count - 1).map(|k| seg.a + step * k as Real));
            out.push(seg.b);
        }
    }
}

/// Samples the outer boundary and every trimming boundary at the target `mesh_size`.
///
/// This is [`sample_polygon_edges`] applied to each polygon, followed by the removal
/// of duplicate points. The result is sorted lexicographically by `(x, y)`.
///
/// Fails with [`MeshError::InvalidParameter`] if `mesh_size` isn't strictly positive, or if
/// it is so small that there would be more than `u32::MAX` samples before deduplication.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use gridmesh2d::math::Point;
/// use gridmesh2d::shape::Polygon;
/// use gridmesh2d::transformation::sample_boundaries;
///
/// let square = Polygon::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ])
/// .unwrap();
///
/// // 3 samples per edge, the 4 corners being shared by two edges each.
/// let pts = sample_boundaries(&square, &[], 5.0).unwrap();
/// assert_eq!(pts.len(), 8);
/// # }
/// ```
pub fn sample_boundaries(
    outer: &Polygon,
    trimming: &[Polygon],
    mesh_size: Real,
) -> Result<Vec<Point<Real>>, MeshError> {
    validate_mesh_size(mesh_size)?;

    let polygons = || core::iter::once(outer).chain(trimming);
    let mut result = Vec::new();
    reserve_samples(
        &mut result,
        num_edge_samples(polygons(), mesh_size),
        mesh_size,
    )?;

    for polygon in polygons() {
        push_polygon_edge_samples(polygon, mesh_size, &mut result);
    }

    let num_samples = result.len();
    utils::dedup_points(&mut result);

    log::trace!(
        "boundary sampling: {num_samples} samples, {} unique",
        result.len()
    );

    Ok(result)
}
