use crate::math::Real;
use crate::shape::PolygonError;
use core::fmt;

/// Identifies one of the boundaries given to the mesher.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryId {
    /// The outer boundary of the domain.
    Outer,
    /// The trimming boundary with the given index.
    Trimming(usize),
}

impl fmt::Display for BoundaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryId::Outer => f.pad("outer boundary"),
            BoundaryId::Trimming(i) => write!(f, "trimming boundary {i}"),
        }
    }
}

/// Errors reported by the domain mesher.
///
/// The mesher is all-or-nothing: whenever one of these is returned, no mesh was built.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum MeshError {
    /// One of the input boundaries is not a valid polygon.
    #[error("the {boundary} is not a valid polygon: {error}")]
    InvalidPolygon {
        /// The offending boundary.
        boundary: BoundaryId,
        /// Why it was rejected.
        error: PolygonError,
    },
    /// A numerical parameter is out of its valid range.
    #[error("invalid value {value} for the parameter `{name}`.")]
    InvalidParameter {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: Real,
    },
    /// The sampled point cloud cannot be triangulated, either because it contains
    /// less than 3 points or because all of them are collinear.
    #[error("cannot triangulate {num_points} sampled points: at least 3 non-collinear points are needed.")]
    InsufficientPoints {
        /// The number of unique points that were sampled.
        num_points: usize,
    },
}
