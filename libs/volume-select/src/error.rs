//! # Error Types
//!
//! Error types for mesh and parameter construction. All errors are explicit
//! and carry context for debugging.
//!
//! ## Error Policy
//!
//! - Errors surface only from constructors and validators
//! - The evaluation path itself never fails: degenerate inputs resolve to
//!   the far-distance sentinel or to a no-op on selection state

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building meshes, splines, or parameters.
///
/// ## Example
///
/// ```rust
/// use glam::Vec3;
/// use volume_select::{SelectError, TargetMesh};
///
/// let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
/// match TargetMesh::new(positions, vec![[0, 1, 7]]) {
///     Err(SelectError::VertexIndexOutOfRange { index, vertex_count }) => {
///         assert_eq!(index, 7);
///         assert_eq!(vertex_count, 3);
///     }
///     other => panic!("expected out-of-range error, got {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum SelectError {
    /// A face references a vertex index the mesh does not have.
    #[error("vertex index {index} out of range for mesh with {vertex_count} vertices")]
    VertexIndexOutOfRange {
        /// The offending index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A falloff distance was negative.
    #[error("falloff distance must be non-negative, got {0}")]
    InvalidFalloff(f32),
}
