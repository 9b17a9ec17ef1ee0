//! # Spline Distance
//!
//! Cubic Bézier splines and nearest-point-on-curve distance queries.
//!
//! The nearest point is found per segment by seeding four coarse parameter
//! windows and refining each by binary subdivision, comparing squared
//! distances at each step. This trades exactness for a small fixed number
//! of curve evaluations; the result feeds a falloff curve, not a solver.

use config::constants::{CURVE_REFINE_DEPTH, CURVE_SEED_WINDOWS, FAR_DISTANCE};
use glam::Vec3;

use crate::bounds::Aabb;

// =============================================================================
// BEZIER CURVES
// =============================================================================

/// One curve: a chain of cubic Bézier segments (four control points each).
///
/// ## Example
///
/// ```rust
/// use glam::Vec3;
/// use volume_select::BezierCurve;
///
/// // A straight segment from the origin to (3, 0, 0).
/// let curve = BezierCurve::new(vec![[
///     Vec3::ZERO,
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(2.0, 0.0, 0.0),
///     Vec3::new(3.0, 0.0, 0.0),
/// ]]);
/// assert_eq!(curve.segment_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BezierCurve {
    segments: Vec<[Vec3; 4]>,
}

impl BezierCurve {
    /// Curve from explicit cubic segments.
    #[must_use]
    pub fn new(segments: Vec<[Vec3; 4]>) -> Self {
        Self { segments }
    }

    /// Degenerate-Bézier conversion of a polyline: each edge becomes a
    /// segment with collinear interior control points.
    #[must_use]
    pub fn from_polyline(points: &[Vec3], closed: bool) -> Self {
        let mut segments = Vec::new();
        if points.len() >= 2 {
            let edge_count = if closed {
                points.len()
            } else {
                points.len() - 1
            };
            for i in 0..edge_count {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                segments.push([a, a + (b - a) / 3.0, a + 2.0 * (b - a) / 3.0, b]);
            }
        }
        Self { segments }
    }

    /// Number of cubic segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Evaluate segment `seg` at parameter `u` in [0, 1].
    #[must_use]
    pub fn point_at(&self, seg: usize, u: f32) -> Vec3 {
        let [p0, p1, p2, p3] = self.segments[seg];
        let s = 1.0 - u;
        let s2 = s * s;
        let u2 = u * u;
        p0 * (s2 * s) + p1 * (3.0 * s2 * u) + p2 * (3.0 * s * u2) + p3 * (u2 * u)
    }

    /// Nearest squared distance from `p` to segment `seg`.
    fn nearest_on_segment_squared(&self, seg: usize, p: Vec3) -> f32 {
        let window = 1.0 / CURVE_SEED_WINDOWS as f32;
        let mut best = FAR_DISTANCE;
        for w in 0..CURVE_SEED_WINDOWS {
            let u1 = w as f32 * window;
            let u = self.refine(seg, u1, u1 + window, p);
            let d = p.distance_squared(self.point_at(seg, u));
            if d < best {
                best = d;
            }
        }
        best
    }

    /// Binary subdivision of [u1, u2]: keep the half whose probe point is
    /// closer, for a fixed number of rounds.
    fn refine(&self, seg: usize, mut u1: f32, mut u2: f32, p: Vec3) -> f32 {
        for _ in 0..CURVE_REFINE_DEPTH {
            let u = 0.5 * (u1 + u2);
            let half_window = 0.25 * (u2 - u1);
            let a = self.point_at(seg, u - half_window);
            let b = self.point_at(seg, u + half_window);
            if p.distance_squared(a) < p.distance_squared(b) {
                u2 = u;
            } else {
                u1 = u;
            }
        }
        0.5 * (u1 + u2)
    }
}

// =============================================================================
// SPLINE
// =============================================================================

/// A collection of Bézier curves treated as one target shape.
///
/// ## Example
///
/// ```rust
/// use glam::Vec3;
/// use volume_select::{BezierCurve, BezierSpline};
///
/// let spline = BezierSpline::new(vec![BezierCurve::from_polyline(
///     &[Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)],
///     false,
/// )]);
/// let d = spline.nearest_distance(Vec3::new(5.0, 3.0, 0.0));
/// assert!((d - 3.0).abs() < 1.0e-3);
/// ```
#[derive(Debug, Clone)]
pub struct BezierSpline {
    curves: Vec<BezierCurve>,
}

impl BezierSpline {
    /// Spline from a set of curves.
    #[must_use]
    pub fn new(curves: Vec<BezierCurve>) -> Self {
        Self { curves }
    }

    /// The curves making up the spline.
    #[must_use]
    pub fn curves(&self) -> &[BezierCurve] {
        &self.curves
    }

    /// Whether the spline has no segments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.iter().all(|c| c.segments.is_empty())
    }

    /// Conservative bounds over all control points (a Bézier segment lies
    /// within its control hull).
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let mut b = Aabb::empty();
        for curve in &self.curves {
            for seg in &curve.segments {
                for &p in seg {
                    b.grow(p);
                }
            }
        }
        b
    }

    /// Distance from `p` to the nearest point on any curve; the
    /// far-distance sentinel for an empty spline.
    #[must_use]
    pub fn nearest_distance(&self, p: Vec3) -> f32 {
        let mut best = FAR_DISTANCE;
        for curve in &self.curves {
            for seg in 0..curve.segment_count() {
                let d = curve.nearest_on_segment_squared(seg, p);
                if d < best {
                    best = d;
                }
            }
        }
        if best >= FAR_DISTANCE {
            FAR_DISTANCE
        } else {
            best.sqrt()
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests;
