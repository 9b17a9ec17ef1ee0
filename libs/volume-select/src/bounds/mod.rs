//! # Bounding Structures
//!
//! Axis-aligned bounding boxes and the per-face bounding array that
//! accelerates target-mesh queries.
//!
//! ## Structure
//!
//! - [`Aabb`] - axis-aligned box with grow/contain/intersect/transform ops
//! - [`FaceBounds`] - per-triangle hard and falloff-enlarged boxes, sorted
//!   along X for early loop termination
//!
//! The face array is rebuilt on every evaluation pass, so a cheap sort plus
//! a linear scan with early exit is used instead of a tree index.

use config::constants::BOX_PAD;
use glam::{Affine3A, Vec3};

use crate::mesh::TargetMesh;

// =============================================================================
// AABB
// =============================================================================

/// Axis-aligned bounding box over f32 points.
///
/// A freshly created box is empty (min > max on every axis); it becomes
/// valid once grown around at least one point.
///
/// ## Example
///
/// ```rust
/// use glam::Vec3;
/// use volume_select::Aabb;
///
/// let mut b = Aabb::empty();
/// b.grow(Vec3::ZERO);
/// b.grow(Vec3::ONE);
/// assert!(b.contains(Vec3::splat(0.5)));
/// assert!(!b.contains(Vec3::splat(2.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create an empty box (contains nothing, grows from the first point).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::MAX),
            max: Vec3::splat(f32::MIN),
        }
    }

    /// Create a box from explicit corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Tight box over a point set; empty if the slice is empty.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut b = Self::empty();
        for &p in points {
            b.grow(p);
        }
        b
    }

    /// Whether the box contains nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grow the box to include `p`.
    pub fn grow(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// The box enlarged uniformly by `d` on every side.
    #[must_use]
    pub fn enlarged(&self, d: f32) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self {
            min: self.min - Vec3::splat(d),
            max: self.max + Vec3::splat(d),
        }
    }

    /// Point containment (inclusive on all sides).
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Box/box overlap test; empty boxes intersect nothing.
    #[must_use]
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Axis-aligned box covering all eight transformed corners.
    #[must_use]
    pub fn transformed(&self, transform: &Affine3A) -> Self {
        if self.is_empty() {
            return *self;
        }
        let mut out = Self::empty();
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            );
            out.grow(transform.transform_point3(corner));
        }
        out
    }

    /// Pad axes thinner than `2 * BOX_PAD` so flat geometry still has a
    /// usable box.
    #[must_use]
    pub fn fixed_up(&self) -> Self {
        if self.is_empty() {
            return *self;
        }
        let mut b = *self;
        for i in 0..3 {
            if (b.max[i] - b.min[i]).abs() < 2.0 * BOX_PAD {
                let center = 0.5 * (b.max[i] + b.min[i]);
                b.max[i] = center + BOX_PAD;
                b.min[i] = center - BOX_PAD;
            }
        }
        b
    }
}

// =============================================================================
// PER-FACE BOUNDS
// =============================================================================

/// Hard and falloff-enlarged ("soft") box for one target triangle.
#[derive(Debug, Clone, Copy)]
pub struct FaceBoundsEntry {
    /// Tight box over the triangle's vertices.
    pub hard: Aabb,
    /// Hard box enlarged by the falloff distance.
    pub soft: Aabb,
    /// Index of the triangle in the target mesh.
    pub face: u32,
}

impl FaceBoundsEntry {
    /// Y/Z containment against the hard box; X pruning is handled by the
    /// sorted scan.
    #[must_use]
    pub fn hard_contains_yz(&self, y: f32, z: f32) -> bool {
        self.hard.min.y <= y && self.hard.max.y >= y && self.hard.min.z <= z && self.hard.max.z >= z
    }

    /// Full containment against the soft box.
    #[must_use]
    pub fn soft_contains(&self, p: Vec3) -> bool {
        self.soft.max.x >= p.x
            && self.soft.min.y <= p.y
            && self.soft.max.y >= p.y
            && self.soft.min.z <= p.z
            && self.soft.max.z >= p.z
    }
}

/// Per-face bounding array for a target mesh, sorted ascending by the hard
/// box's minimum X.
///
/// Sorting lets a scan stop as soon as an entry's minimum X passes the
/// query coordinate. A precomputed midpoint split additionally lets the
/// soft-distance scan skip the lower half of the array when the query is
/// past the median; the parity scan never skips, since every face left of
/// the query point can cross the leftward ray.
///
/// ## Example
///
/// ```rust
/// use glam::Vec3;
/// use volume_select::{FaceBounds, TargetMesh};
///
/// let mesh = TargetMesh::new(
///     vec![Vec3::ZERO, Vec3::X, Vec3::Y],
///     vec![[0, 1, 2]],
/// ).unwrap();
/// let bounds = FaceBounds::build(&mesh, Some(0.5));
/// assert_eq!(bounds.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FaceBounds {
    entries: Vec<FaceBoundsEntry>,
    /// First entry at or past the median hard minimum X.
    mid: usize,
    /// Soft minimum X of the midpoint entry.
    mid_soft_x: f32,
}

impl FaceBounds {
    /// Build one entry per target triangle. `falloff` enlarges the soft
    /// boxes; `None` leaves them equal to the hard boxes.
    #[must_use]
    pub fn build(mesh: &TargetMesh, falloff: Option<f32>) -> Self {
        let soft_radius = falloff.unwrap_or(0.0);
        let mut entries: Vec<FaceBoundsEntry> = mesh
            .triangles()
            .iter()
            .enumerate()
            .map(|(i, tri)| {
                let mut hard = Aabb::empty();
                for &v in tri {
                    hard.grow(mesh.position(v));
                }
                FaceBoundsEntry {
                    hard,
                    soft: hard.enlarged(soft_radius),
                    face: i as u32,
                }
            })
            .collect();

        entries.sort_by(|a, b| {
            a.hard
                .min
                .x
                .partial_cmp(&b.hard.min.x)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let (mid, mid_soft_x) = if entries.is_empty() {
            (0, 0.0)
        } else {
            let half = ((entries.len() + 1) / 2).min(entries.len() - 1);
            let median_x = entries[half].hard.min.x;
            // First occurrence of the median value, so entries with an equal
            // minimum are never skipped.
            let mid = entries.partition_point(|e| e.hard.min.x < median_x);
            (mid, entries[mid].soft.min.x)
        };

        Self {
            entries,
            mid,
            mid_soft_x,
        }
    }

    /// Number of entries (target triangle count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the target had no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in ascending hard-min-X order. The parity ray-cast scans
    /// from the start; skipping any face left of the query would flip
    /// containment.
    #[must_use]
    pub fn hard_candidates(&self) -> &[FaceBoundsEntry] {
        &self.entries
    }

    /// Candidate entries for a soft-distance query at `x`, starting at the
    /// midpoint split when `x` is past it.
    #[must_use]
    pub fn soft_candidates(&self, x: f32) -> &[FaceBoundsEntry] {
        if self.entries.is_empty() || x <= self.mid_soft_x {
            &self.entries
        } else {
            &self.entries[self.mid..]
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
