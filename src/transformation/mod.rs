//! Sampling, triangulation, and classification stages of the domain mesher.
//!
//! The entry point is [`triangulate`]. Every stage is also exposed on its own so
//! callers can inspect or replace intermediate results.

pub use self::boundary_sampling::{edge_sample_count, sample_boundaries, sample_polygon_edges};
pub use self::classification::{classify_triangles, retain_domain_triangles};
pub use self::grid_sampling::sample_interior;
pub use self::mesh::Mesh;
pub use self::mesh_error::{BoundaryId, MeshError};
pub use self::mesh_options::MeshOptions;
pub use self::triangulate_domain::{
    triangulate, triangulate_polygons, triangulate_with, triangulate_with_options,
};
pub use self::triangulator::{
    RawTriangulation, SpadeTriangulator, Triangulator, TriangulatorError,
};

mod boundary_sampling;
mod classification;
mod grid_sampling;
mod mesh;
mod mesh_error;
mod mesh_options;
mod triangulate_domain;
mod triangulator;

use crate::math::{Point, Real};
use alloc::vec::Vec;

/// Largest number of points a sampling stage may produce, since simplices index vertices with `u32`.
pub(crate) const MAX_SAMPLES: usize = u32::MAX as usize;

/// Number of samples spaced by at most `mesh_size` needed to cover `span`: `floor(span / mesh_size) + 1`.
///
/// Saturates at `usize::MAX`, which [`reserve_samples`] always rejects.
#[inline]
pub(crate) fn sample_count(span: Real, mesh_size: Real) -> usize {
    ((span / mesh_size).floor() as usize).saturating_add(1)
}

/// Reserves room for `num_samples` more points in `samples` (`None` if computing the
/// count overflowed).
///
/// Fails with [`MeshError::InvalidParameter`] on `mesh_size` if `samples` would end up
/// with more than [`MAX_SAMPLES`] points or if the memory can't be allocated: `mesh_size`
/// is too small for the extent of the domain.
pub(crate) fn reserve_samples(
    samples: &mut Vec<Point<Real>>,
    num_samples: Option<usize>,
    mesh_size: Real,
) -> Result<(), MeshError> {
    let too_fine = MeshError::InvalidParameter {
        name: "mesh_size",
        value: mesh_size,
    };
    let additional = num_samples
        .filter(|n| {
            samples
                .len()
                .checked_add(*n)
                .is_some_and(|total| total <= MAX_SAMPLES)
        })
        .ok_or(too_fine)?;

    samples
        .try_reserve_exact(additional)
        .map_err(|_| too_fine)
}

/// Checks that `mesh_size` is strictly positive and finite.
pub(crate) fn validate_mesh_size(mesh_size: Real) -> Result<(), MeshError> {
    if mesh_size > 0.0 && mesh_size.is_finite() {
        Ok(())
    } else {
        Err(MeshError::InvalidParameter {
            name: "mesh_size",
            value: mesh_size,
        })
    }
}
