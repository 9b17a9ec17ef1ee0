//! # Mesh Module
//!
//! Mesh snapshots consumed by the selection engine.
//!
//! ## Structure
//!
//! - [`SelectMesh`] - the mesh being selected: positions plus polygonal
//!   faces with material/smoothing tags (triangles, quads, and patch-like
//!   faces are all just faces with N vertices)
//! - [`TargetMesh`] - a triangulated volume target used for containment and
//!   surface-distance queries
//!
//! Both types validate face indices on construction and are read-only
//! during evaluation.

use glam::Vec3;

use config::constants::GEOM_EPSILON;

use crate::bounds::Aabb;
use crate::error::SelectError;

// =============================================================================
// SELECT MESH
// =============================================================================

/// One polygonal face of a [`SelectMesh`].
///
/// ## Example
///
/// ```rust
/// use volume_select::PolyFace;
///
/// let face = PolyFace::new(vec![0, 1, 2, 3])
///     .with_material(2)
///     .with_smoothing(0b0101);
/// assert_eq!(face.verts.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyFace {
    /// Vertex indices, in winding order.
    pub verts: Vec<u32>,
    /// Material tag.
    pub material: u16,
    /// Smoothing-group bitmask.
    pub smoothing: u32,
}

impl PolyFace {
    /// Face with default tags (material 0, no smoothing groups).
    #[must_use]
    pub fn new(verts: Vec<u32>) -> Self {
        Self {
            verts,
            material: 0,
            smoothing: 0,
        }
    }

    /// Set the material tag.
    #[must_use]
    pub fn with_material(mut self, material: u16) -> Self {
        self.material = material;
        self
    }

    /// Set the smoothing-group bitmask.
    #[must_use]
    pub fn with_smoothing(mut self, smoothing: u32) -> Self {
        self.smoothing = smoothing;
        self
    }
}

/// The mesh whose vertices and faces are being selected.
///
/// Vertex positions are in the mesh's own (query) space; every volume
/// transform is expressed relative to that space.
///
/// ## Example
///
/// ```rust
/// use glam::Vec3;
/// use volume_select::{PolyFace, SelectMesh};
///
/// let mesh = SelectMesh::new(
///     vec![Vec3::ZERO, Vec3::X, Vec3::Y],
///     vec![PolyFace::new(vec![0, 1, 2])],
/// ).unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SelectMesh {
    positions: Vec<Vec3>,
    faces: Vec<PolyFace>,
    bounds: Aabb,
}

impl SelectMesh {
    /// Create a mesh, validating that every face index is in range.
    pub fn new(positions: Vec<Vec3>, faces: Vec<PolyFace>) -> Result<Self, SelectError> {
        let vertex_count = positions.len();
        for face in &faces {
            for &v in &face.verts {
                if v as usize >= vertex_count {
                    return Err(SelectError::VertexIndexOutOfRange {
                        index: v,
                        vertex_count,
                    });
                }
            }
        }
        let bounds = Aabb::from_points(&positions);
        Ok(Self {
            positions,
            faces,
            bounds,
        })
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Vertex positions in index order.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Faces in index order.
    #[must_use]
    pub fn faces(&self) -> &[PolyFace] {
        &self.faces
    }

    /// Tight bounds over the vertex positions.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }
}

// =============================================================================
// TARGET MESH
// =============================================================================

/// A triangulated volume target.
///
/// Per-face normals are computed as `normalize(p1 - p0) × (p2 - p1)` and
/// deliberately left un-normalized overall; the surface-distance code
/// divides by their squared length.
///
/// ## Example
///
/// ```rust
/// use glam::Vec3;
/// use volume_select::TargetMesh;
///
/// let mesh = TargetMesh::new(
///     vec![Vec3::ZERO, Vec3::X, Vec3::Y],
///     vec![[0, 1, 2]],
/// ).unwrap();
/// assert_eq!(mesh.triangle_count(), 1);
/// assert!(mesh.normal(0).z > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct TargetMesh {
    positions: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
    normals: Vec<Vec3>,
    bounds: Aabb,
}

impl TargetMesh {
    /// Create a target mesh, validating indices and precomputing per-face
    /// normals and overall bounds.
    pub fn new(positions: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Result<Self, SelectError> {
        let vertex_count = positions.len();
        for tri in &triangles {
            for &v in tri {
                if v as usize >= vertex_count {
                    return Err(SelectError::VertexIndexOutOfRange {
                        index: v,
                        vertex_count,
                    });
                }
            }
        }
        let normals = triangles
            .iter()
            .map(|&[a, b, c]| {
                let (p0, p1, p2) = (
                    positions[a as usize],
                    positions[b as usize],
                    positions[c as usize],
                );
                (p1 - p0).normalize_or_zero().cross(p2 - p1)
            })
            .collect();
        let bounds = Aabb::from_points(&positions);
        Ok(Self {
            positions,
            triangles,
            normals,
            bounds,
        })
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Position of vertex `v`.
    #[must_use]
    pub fn position(&self, v: u32) -> Vec3 {
        self.positions[v as usize]
    }

    /// Triangles in index order.
    #[must_use]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// The (un-normalized) face normal of triangle `face`.
    #[must_use]
    pub fn normal(&self, face: usize) -> Vec3 {
        self.normals[face]
    }

    /// Tight bounds over the vertex positions.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// The three corner positions of triangle `face`.
    #[must_use]
    pub fn corners(&self, face: usize) -> [Vec3; 3] {
        let [a, b, c] = self.triangles[face];
        [self.position(a), self.position(b), self.position(c)]
    }

    /// Barycentric coordinates of `p` with respect to triangle `face`.
    ///
    /// `p` is assumed to lie (approximately) on the triangle's plane. A
    /// degenerate triangle yields coordinates outside [0, 1], so callers
    /// treat it as a miss.
    #[must_use]
    pub fn barycentric(&self, face: usize, p: Vec3) -> Vec3 {
        let [p0, p1, p2] = self.corners(face);
        let v0 = p1 - p0;
        let v1 = p2 - p0;
        let v2 = p - p0;
        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);
        let denom = d00 * d11 - d01 * d01;
        if denom.abs() < GEOM_EPSILON {
            return Vec3::splat(-1.0);
        }
        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Vec3::new(1.0 - v - w, v, w)
    }
}

// =============================================================================
// TESTS
// =============================================================================
