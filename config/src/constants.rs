//! # Configuration Constants
//!
//! Centralized constants for the volume-select engine. Classification
//! sentinels, geometric tolerances, and evaluation parameters are defined
//! here.
//!
//! ## Categories
//!
//! - **Classification**: sentinel and threshold values
//! - **Precision**: floating-point tolerances and numeric workarounds
//! - **Evaluation**: grid and curve-refinement parameters
//! - **Sampling**: texture luminance weights

// =============================================================================
// CLASSIFICATION CONSTANTS
// =============================================================================

/// Sentinel classification value meaning "outside, not near the volume".
///
/// Any per-vertex result at or above this value carries no soft weight;
/// the falloff response of such a distance is always zero.
///
/// # Example
///
/// ```rust
/// use config::constants::FAR_DISTANCE;
///
/// fn has_soft_weight(classification: f32) -> bool {
///     classification < FAR_DISTANCE
/// }
///
/// assert!(!has_soft_weight(FAR_DISTANCE));
/// ```
pub const FAR_DISTANCE: f32 = 1.0e37;

/// Sampled scalar values above this threshold snap to hard containment (1.0).
///
/// Texture samplers return luminance-like values that may land a hair below
/// 1.0; the selection combinator tests for exact equality with 1.0, so
/// near-full samples are snapped up front.
pub const HARD_SELECT_THRESHOLD: f32 = 0.99;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon guarding near-degenerate geometric divisions.
///
/// Used for denominators in barycentric and ray/plane computations: a
/// triangle or direction whose relevant magnitude falls below this is
/// treated as degenerate rather than divided by.
pub const GEOM_EPSILON: f32 = 1.0e-6;

/// Nudge applied to a ray/plane hit's z coordinate when it exactly
/// coincides with a triangle vertex z.
///
/// Dodges a degenerate coplanarity case in the parity ray-cast. This is a
/// targeted numerical workaround, not a general fix.
pub const RAY_NUDGE: f32 = 0.001;

/// Half-thickness pad applied to bounding-box axes thinner than `2 * BOX_PAD`.
///
/// Flat geometry (a plane target, a zero-height gizmo) would otherwise
/// produce boxes that no point can intersect.
pub const BOX_PAD: f32 = 5.0e-4;

// =============================================================================
// EVALUATION CONSTANTS
// =============================================================================

/// Range of the parity ray cast against an external solid intersector.
///
/// Crossings are counted until the ray has travelled this far; the target
/// is assumed to fit well inside it.
pub const SOLID_RAY_RANGE: f32 = 9999.9;

/// Distance the solid parity ray advances past each reported hit before
/// probing again, so the next probe does not re-report the same surface.
pub const SOLID_RAY_STEP: f32 = 0.1;

/// Upper bound on uniform-grid resolution per axis.
///
/// The grid is rebuilt on every evaluation, so resolution is kept modest;
/// cell count grows with point count up to this cap.
pub const MAX_GRID_RESOLUTION: usize = 50;

/// Number of coarse parameter windows seeding the nearest-point-on-curve
/// search on each curve segment.
pub const CURVE_SEED_WINDOWS: usize = 4;

/// Bisection depth refining each coarse curve window.
pub const CURVE_REFINE_DEPTH: usize = 5;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Red channel weight for luminance conversion (ITU-R BT.601).
pub const LUMA_R: f32 = 0.299;

/// Green channel weight for luminance conversion (ITU-R BT.601).
pub const LUMA_G: f32 = 0.587;

/// Blue channel weight for luminance conversion (ITU-R BT.601).
pub const LUMA_B: f32 = 0.114;
