use crate::math::{Point, Real};
use crate::shape::Polygon;
use crate::transformation::{
    reserve_samples, sample_count, validate_mesh_size, MeshError, MeshOptions,
};
use alloc::vec::Vec;

/// Samples the interior of a domain with a regular background grid.
///
/// The grid covers the bounding box of `outer` with a step of `mesh_size` along each
/// axis, starting at its minimum corner: there are `floor(span / mesh_size) + 1` samples
/// per axis, so the maximum side of the box is only reached when the span is a multiple
/// of `mesh_size`.
///
/// Grid points are kept if they are inside `outer` eroded by `options.outer_erosion * mesh_size`
/// and, for every trimming polygon, not inside it eroded by `options.trimming_erosion * mesh_size`.
/// The points are returned row by row, with `x` varying fastest.
///
/// Fails with [`MeshError::InvalidParameter`] if `mesh_size` isn't strictly positive, if it
/// is so small that the grid would have more than `u32::MAX` points, or if `options` is
/// invalid.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use gridmesh2d::math::Point;
/// use gridmesh2d::shape::Polygon;
/// use gridmesh2d::transformation::{sample_interior, MeshOptions};
///
/// let square = Polygon::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ])
/// .unwrap();
///
/// let pts = sample_interior(&square, &[], 5.0, &MeshOptions::default()).unwrap();
/// assert_eq!(pts, [Point::new(5.0, 5.0)]);
/// # }
/// ```
pub fn sample_interior(
    outer: &Polygon,
    trimming: &[Polygon],
    mesh_size: Real,
    options: &MeshOptions,
) -> Result<Vec<Point<Real>>, MeshError> {
    validate_mesh_size(mesh_size)?;
    options.validate()?;

    let aabb = outer.aabb();
    let extents = aabb.extents();
    let nx = sample_count(extents.x, mesh_size);
    let ny = sample_count(extents.y, mesh_size);

    let mut grid = Vec::new();
    reserve_samples(&mut grid, nx.checked_mul(ny), mesh_size)?;

    for j in 0..ny {
        let y = aabb.mins.y + j as Real * mesh_size;

        for i in 0..nx {
            grid.push(Point::new(aabb.mins.x + i as Real * mesh_size, y));
        }
    }

    let mut keep = outer.contains_points(&grid, -options.outer_erosion * mesh_size);

    for trim in trimming {
        let excluded = trim.contains_points(&grid, -options.trimming_erosion * mesh_size);

        for (keep, excluded) in keep.iter_mut().zip(excluded) {
            *keep &= !excluded;
        }
    }

    let result: Vec<_> = grid
        .into_iter()
        .zip(keep)
        .filter_map(|(pt, keep)| keep.then_some(pt))
        .collect();

    log::trace!(
        "background grid: {nx}x{ny} lattice, {} points kept",
        result.len()
    );

    Ok(result)
}
