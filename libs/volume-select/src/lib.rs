//! Volumetric soft-selection engine
//!
//! Classifies mesh vertices against a selectable volume (primitive, mesh,
//! spline, particle cloud, sampled texture, or face tags), shapes the result
//! through an analytic falloff curve, and folds it into a caller-owned
//! selection state with replace/add/subtract combination, inversion, and
//! window/crossing face derivation.
//!
//! ```rust
//! use glam::{Affine3A, Vec3};
//! use volume_select::{Falloff, SelectMesh, SelectOptions, SelectionState, Volume};
//!
//! let mesh = SelectMesh::new(
//!     vec![Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0), Vec3::new(100.0, 0.0, 0.0)],
//!     vec![],
//! ).unwrap();
//! let volume = Volume::Sphere {
//!     transform: Affine3A::from_scale(Vec3::splat(2.0)),
//! };
//! let options = SelectOptions {
//!     falloff: Some(Falloff::new(2.0, 0.0, 0.0).unwrap()),
//!     ..SelectOptions::default()
//! };
//!
//! let mut state = SelectionState::new();
//! volume_select::select(&mesh, &volume, &options, &mut state);
//!
//! let weights = state.weights().unwrap();
//! assert_eq!(weights[0], 1.0); // inside the sphere
//! assert!(weights[1] > 0.0 && weights[1] < 1.0); // in the falloff band
//! assert_eq!(weights[2], 0.0); // out of reach
//! ```

pub mod bounds;
pub mod error;
pub mod falloff;
pub mod grid;
pub mod mesh;
pub mod select;
pub mod spline;
pub mod volume;

pub use bounds::{Aabb, FaceBounds, FaceBoundsEntry};
pub use error::SelectError;
pub use falloff::Falloff;
pub use grid::UniformGrid;
pub use mesh::{PolyFace, SelectMesh, TargetMesh};
pub use select::{
    select, FaceRule, SelectLevel, SelectMethod, SelectOptions, SelectionState,
};
pub use spline::{BezierCurve, BezierSpline};
pub use volume::{
    luminance, mesh_contains, mesh_soft_distance, Canonical, RaySolid, ScalarField, UvMode, Volume,
};
