use crate::math::{Point, Real};
use crate::shape::Polygon;
use crate::transformation::{
    reserve_samples, retain_domain_triangles, sample_boundaries, sample_interior,
    validate_mesh_size, BoundaryId, Mesh, MeshError, MeshOptions, SpadeTriangulator, Triangulator,
};
use crate::utils;
use alloc::vec::Vec;

/// Computes a triangle mesh of the domain bounded by `outer_boundary` minus the
/// `trimming_boundaries`, with elements of size close to `mesh_size`.
///
/// The mesh is built in four steps:
/// 1. A regular grid with step `mesh_size` is sampled inside the domain, keeping away
///    from its boundaries (see [`sample_interior`]).
/// 2. Every edge of every boundary is sampled with a spacing of at most `mesh_size`
///    (see [`sample_boundaries`]).
/// 3. The union of both point sets (interior points first) is Delaunay-triangulated.
/// 4. Triangles with a centroid outside of the domain are discarded
///    (see [`classify_triangles`](crate::transformation::classify_triangles)).
///
/// Every polygon is implicitly closed and must have at least 3 vertices. An empty
/// `trimming_boundaries` slice meshes the whole outer polygon.
///
/// # Errors
///
/// - [`MeshError::InvalidPolygon`] if one of the boundaries has less than 3 vertices or
///   a non-finite coordinate.
/// - [`MeshError::InvalidParameter`] if `mesh_size` isn't strictly positive and finite, or
///   if it is so small that more than `u32::MAX` points would be sampled.
/// - [`MeshError::InsufficientPoints`] if the sampled points cannot be triangulated, or if
///   the triangulator returns simplices referring to vertices it didn't return.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use gridmesh2d::math::Point;
/// use gridmesh2d::transformation::triangulate;
///
/// let outer = [
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let hole = vec![
///     Point::new(3.0, 3.0),
///     Point::new(7.0, 3.0),
///     Point::new(7.0, 7.0),
///     Point::new(3.0, 7.0),
/// ];
///
/// let mesh = triangulate(&outer, 1.0, &[hole]).unwrap();
/// assert!((mesh.area() - 84.0).abs() < 1.0e-3);
/// # }
/// ```
pub fn triangulate(
    outer_boundary: &[Point<Real>],
    mesh_size: Real,
    trimming_boundaries: &[Vec<Point<Real>>],
) -> Result<Mesh, MeshError> {
    triangulate_with_options(
        outer_boundary,
        mesh_size,
        trimming_boundaries,
        &MeshOptions::default(),
    )
}

/// Same as [`triangulate`], with custom [`MeshOptions`].
pub fn triangulate_with_options(
    outer_boundary: &[Point<Real>],
    mesh_size: Real,
    trimming_boundaries: &[Vec<Point<Real>>],
    options: &MeshOptions,
) -> Result<Mesh, MeshError> {
    triangulate_with(
        outer_boundary,
        mesh_size,
        trimming_boundaries,
        options,
        &SpadeTriangulator,
    )
}

/// Same as [`triangulate`], with custom [`MeshOptions`] and triangulation primitive.
pub fn triangulate_with<T: Triangulator + ?Sized>(
    outer_boundary: &[Point<Real>],
    mesh_size: Real,
    trimming_boundaries: &[Vec<Point<Real>>],
    options: &MeshOptions,
    triangulator: &T,
) -> Result<Mesh, MeshError> {
    let outer = Polygon::from_slice(outer_boundary).map_err(|error| MeshError::InvalidPolygon {
        boundary: BoundaryId::Outer,
        error,
    })?;
    let trimming = trimming_boundaries
        .iter()
        .enumerate()
        .map(|(i, pts)| {
            Polygon::from_slice(pts).map_err(|error| MeshError::InvalidPolygon {
                boundary: BoundaryId::Trimming(i),
                error,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    triangulate_polygons(&outer, mesh_size, &trimming, options, triangulator)
}

/// Same as [`triangulate_with`], for boundaries that are already validated polygons.
pub fn triangulate_polygons<T: Triangulator + ?Sized>(
    outer: &Polygon,
    mesh_size: Real,
    trimming: &[Polygon],
    options: &MeshOptions,
    triangulator: &T,
) -> Result<Mesh, MeshError> {
    validate_mesh_size(mesh_size)?;
    options.validate()?;

    let mut points = sample_interior(outer, trimming, mesh_size, options)?;
    let num_interior = points.len();
    let boundary = sample_boundaries(outer, trimming, mesh_size)?;
    reserve_samples(&mut points, Some(boundary.len()), mesh_size)?;
    points.extend(boundary);
    // Lattice points may coincide with boundary samples, e.g., along trimming edges.
    utils::dedup_points_stable(&mut points);

    log::debug!(
        "sampled {} points ({num_interior} interior) with mesh size {mesh_size}",
        points.len()
    );

    let insufficient_points = MeshError::InsufficientPoints {
        num_points: points.len(),
    };

    if points.len() < 3 {
        return Err(insufficient_points);
    }

    let raw = triangulator.triangulate(&points).map_err(|err| {
        log::debug!("triangulation of the sampled points failed: {err}");
        insufficient_points
    })?;

    if raw.simplices.is_empty() {
        return Err(insufficient_points);
    }

    let num_vertices = raw.vertices.len();

    if let Some(idx) = raw
        .simplices
        .iter()
        .find(|idx| idx.iter().any(|i| *i as usize >= num_vertices))
    {
        log::debug!(
            "the simplex {idx:?} refers to a missing vertex, only {num_vertices} were returned"
        );
        return Err(insufficient_points);
    }

    let num_raw_triangles = raw.simplices.len();
    let mut simplices = raw.simplices;
    retain_domain_triangles(&raw.vertices, &mut simplices, outer, trimming);

    log::debug!(
        "kept {} triangles out of {num_raw_triangles}",
        simplices.len()
    );

    Ok(Mesh::new(raw.vertices, simplices))
}
