use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Triangle;
use alloc::vec::Vec;

/// A triangle mesh of a planar domain, as returned by [`triangulate`](crate::transformation::triangulate).
///
/// The vertex buffer is never pruned: it contains every sampled point, including the ones
/// that ended up outside of the domain and aren't referenced by any simplex. Consumers can
/// rely on the vertex indices matching the triangulated point cloud.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point<Real>>,
    simplices: Vec<[u32; 3]>,
}

impl Mesh {
    pub(crate) fn new(vertices: Vec<Point<Real>>, simplices: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            simplices,
        }
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The triangles of this mesh, as indices into [`Mesh::vertices`].
    #[inline]
    pub fn simplices(&self) -> &[[u32; 3]] {
        &self.simplices
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.simplices.len()
    }

    /// The `i`-th triangle of this mesh.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.num_triangles()`.
    #[inline]
    pub fn triangle(&self, i: usize) -> Triangle {
        Triangle::from_indices(&self.vertices, self.simplices[i])
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.simplices
            .iter()
            .map(move |idx| Triangle::from_indices(&self.vertices, *idx))
    }

    /// The total area covered by the triangles of this mesh.
    pub fn area(&self) -> Real {
        self.triangles().map(|tri| tri.area()).sum()
    }

    /// The bounding box of the vertices referenced by at least one triangle.
    ///
    /// Returns an invalid AABB if the mesh has no triangle.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(self.simplices.iter().flatten().map(|i| self.vertices[*i as usize]))
    }

    /// Flags, for each vertex, whether it is referenced by at least one triangle.
    pub fn used_vertices(&self) -> Vec<bool> {
        let mut used = alloc::vec![false; self.vertices.len()];

        for idx in self.simplices.iter().flatten() {
            used[*idx as usize] = true;
        }

        used
    }

    /// Returns the vertex buffer and triangle indices of this mesh.
    pub fn into_parts(self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        (self.vertices, self.simplices)
    }
}
