//! External sampling services consumed by the classifier.
//!
//! Both traits deliberately lack a `Sync` bound: the host services they
//! wrap are stateful and must not be called from two threads at once, so
//! the evaluation driver runs these volume kinds strictly serially.

use config::constants::{LUMA_B, LUMA_G, LUMA_R};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::bounds::Aabb;

// =============================================================================
// SCALAR FIELD
// =============================================================================

/// A sampled 2D/3D scalar field (typically a texture's luminance).
///
/// The returned value is used directly as the containment/weight value and
/// is expected to land in roughly [0, 1]; the driver snaps near-full
/// samples to exactly 1.0 and clamps composited weights.
pub trait ScalarField {
    /// Sample the field at a query point and its associated UVW coordinate.
    fn sample(&self, point: Vec3, uvw: Vec3) -> f32;
}

/// Convert an RGB color to the luminance scalar used for classification.
///
/// ## Example
///
/// ```rust
/// use volume_select::luminance;
///
/// assert!((luminance(1.0, 1.0, 1.0) - 1.0).abs() < 1.0e-6);
/// assert_eq!(luminance(0.0, 0.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    r * LUMA_R + g * LUMA_G + b * LUMA_B
}

// =============================================================================
// UV MODE
// =============================================================================

/// How out-of-range UV coordinates are remapped before sampling.
///
/// The sampler contract does not define behavior outside [0, 1], so the
/// remap is an explicit configuration knob rather than a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UvMode {
    /// Clamp each component to [0, 1].
    #[default]
    Clamp,
    /// Wrap each component into [0, 1) by taking its fractional part.
    Wrap,
}

impl UvMode {
    /// Remap a UVW coordinate according to the mode.
    #[must_use]
    pub fn remap(&self, uvw: Vec3) -> Vec3 {
        match self {
            UvMode::Clamp => uvw.clamp(Vec3::ZERO, Vec3::ONE),
            UvMode::Wrap => uvw - uvw.floor(),
        }
    }
}

// =============================================================================
// RAY SOLID
// =============================================================================

/// An external closed solid queried only through ray intersection.
///
/// Containment is decided by parity: the driver casts a ray from the query
/// point and counts surface crossings, advancing past each reported hit.
pub trait RaySolid {
    /// Bounds of the solid in its own local space.
    fn bounds(&self) -> Aabb;

    /// Distance along `dir` from `origin` to the first surface hit, if any.
    fn intersect_ray(&self, origin: Vec3, dir: Vec3) -> Option<f32>;
}
