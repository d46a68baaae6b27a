use crate::math::{Point, Real};
use crate::utils::sanitize_spade_point;
use alloc::vec::Vec;
use spade::{DelaunayTriangulation, Point2 as Pt2, Triangulation};

/// Indicates that a point cloud could not be triangulated.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangulatorError {
    /// A triangulation needs at least three points.
    #[error("at least 3 points are needed, found {0}.")]
    NotEnoughPoints(usize),
    /// All the points lie on a single line.
    #[error("all the points are collinear.")]
    Collinear,
    /// A point could not be inserted into the triangulation.
    #[error("the point {0} has coordinates that cannot be triangulated.")]
    InvalidPoint(usize),
}

/// The unfiltered output of a [`Triangulator`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RawTriangulation {
    /// The triangulated points, in the same order as the input of the triangulator.
    pub vertices: Vec<Point<Real>>,
    /// The triangles, as indices into `vertices`.
    pub simplices: Vec<[u32; 3]>,
}

/// A primitive computing the triangulation of an unordered point cloud.
///
/// Implementations must return a vertex array identical to the input points, so the
/// indices of the simplices can be used to address the input directly.
pub trait Triangulator {
    /// Triangulates the given points.
    fn triangulate(&self, points: &[Point<Real>]) -> Result<RawTriangulation, TriangulatorError>;
}

/// Delaunay triangulation of a point cloud, computed with `spade`.
///
/// Points are inserted one at a time in their input order, making the output
/// deterministic. Every simplex is counter-clockwise. Duplicate input points are
/// merged into their first occurrence: later copies are left unreferenced.
#[derive(Copy, Clone, Debug, Default)]
pub struct SpadeTriangulator;

impl Triangulator for SpadeTriangulator {
    fn triangulate(&self, points: &[Point<Real>]) -> Result<RawTriangulation, TriangulatorError> {
        if points.len() < 3 {
            return Err(TriangulatorError::NotEnoughPoints(points.len()));
        }

        let mut dt = DelaunayTriangulation::<Pt2<Real>>::new();
        // Maps each spade vertex to the first input point inserted at its position.
        let mut vertex_to_point: Vec<u32> = Vec::with_capacity(points.len());

        for (i, pt) in points.iter().enumerate() {
            let handle = dt.insert(sanitize_spade_point(pt)).map_err(|err| {
                log::debug!("failed to insert point {i} ({pt}) into the triangulation: {err:?}");
                TriangulatorError::InvalidPoint(i)
            })?;

            if handle.index() >= vertex_to_point.len() {
                vertex_to_point.resize(handle.index() + 1, i as u32);
            }
        }

        if dt.num_inner_faces() == 0 {
            return Err(TriangulatorError::Collinear);
        }

        let simplices = dt
            .inner_faces()
            .map(|face| face.vertices().map(|v| vertex_to_point[v.fix().index()]))
            .collect();

        Ok(RawTriangulation {
            vertices: points.to_vec(),
            simplices,
        })
    }
}
