//! # Point Classifier
//!
//! Volume descriptors and point-containment tests.
//!
//! ## Structure
//!
//! - [`Volume`] - tagged union of every supported volume kind
//! - [`Canonical`] - unit box/sphere/cylinder tests and the closed-form
//!   proxy distance used for their soft falloff
//! - target-mesh queries: parity ray-cast containment and nearest-surface
//!   distance, pruned by [`FaceBounds`](crate::bounds::FaceBounds)
//!
//! A classification result is `1.0` for hard containment, a finite distance
//! for "outside but near", or the far-distance sentinel.

pub mod sampler;

use config::constants::{FAR_DISTANCE, GEOM_EPSILON, RAY_NUDGE};
use glam::{Affine3A, Vec3};
use std::fmt;

use crate::bounds::FaceBounds;
use crate::mesh::TargetMesh;
use crate::spline::BezierSpline;

pub use sampler::{luminance, RaySolid, ScalarField, UvMode};

// =============================================================================
// VOLUME DESCRIPTOR
// =============================================================================

/// A volume to classify points against.
///
/// Every `transform` maps the volume's own (canonical or target-local)
/// space into the query mesh's space; the driver inverts it once per
/// evaluation. `Points` positions are given directly in query space.
///
/// `Texture` and `Solid` wrap external services that are not reentrant, so
/// those kinds are evaluated serially; all other kinds are classified in
/// parallel.
pub enum Volume<'a> {
    /// Canonical unit cube (|x|, |y|, |z| ≤ 1 in local space).
    Box {
        /// Volume-local → query-space transform.
        transform: Affine3A,
    },
    /// Canonical unit sphere.
    Sphere {
        /// Volume-local → query-space transform.
        transform: Affine3A,
    },
    /// Canonical unit cylinder (radius 1, half-height 1, axis Z).
    Cylinder {
        /// Volume-local → query-space transform.
        transform: Affine3A,
    },
    /// A closed triangulated target tested by parity ray-cast, with
    /// nearest-surface distances for soft selection.
    Mesh {
        /// The triangulated target.
        mesh: &'a TargetMesh,
        /// Target-local → query-space transform.
        transform: Affine3A,
    },
    /// A curve target; classification is the distance to the nearest point
    /// on any curve (soft selection only, there is no interior).
    Spline {
        /// The curve set.
        spline: &'a BezierSpline,
        /// Target-local → query-space transform.
        transform: Affine3A,
    },
    /// A particle/point-cloud target; classification is the distance to the
    /// nearest point within the falloff radius.
    Points {
        /// Point positions, in query space.
        points: &'a [Vec3],
    },
    /// An external solid queried through a non-reentrant ray-intersection
    /// service. Evaluated serially.
    Solid {
        /// The intersection service.
        solid: &'a dyn RaySolid,
        /// Target-local → query-space transform.
        transform: Affine3A,
    },
    /// A sampled scalar field; the sample value is the classification.
    /// Evaluated serially.
    Texture {
        /// The sampling service.
        sampler: &'a dyn ScalarField,
        /// Per-vertex UVW coordinates; vertices past the end sample at
        /// (0.5, 0.5, 0).
        uvw: &'a [Vec3],
        /// Out-of-range UV handling.
        mode: UvMode,
    },
    /// Non-spatial: faces whose material tag equals the id.
    MaterialId(u16),
    /// Non-spatial: smoothing-group test. At vertex level a face matches if
    /// its groups overlap the mask; at face level the groups must equal the
    /// mask exactly.
    SmoothingGroups(u32),
}

impl Volume<'_> {
    /// Whether per-vertex classification may run across worker threads.
    ///
    /// `Texture` and `Solid` wrap stateful external services that must not
    /// be entered concurrently; everything else reads only shared immutable
    /// data during classification.
    #[must_use]
    pub fn is_thread_safe(&self) -> bool {
        !matches!(self, Volume::Texture { .. } | Volume::Solid { .. })
    }

    /// Whether the volume selects by face tags instead of geometry.
    #[must_use]
    pub fn is_tag(&self) -> bool {
        matches!(self, Volume::MaterialId(_) | Volume::SmoothingGroups(_))
    }
}

impl fmt::Debug for Volume<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Volume::Box { .. } => "Box",
            Volume::Sphere { .. } => "Sphere",
            Volume::Cylinder { .. } => "Cylinder",
            Volume::Mesh { .. } => "Mesh",
            Volume::Spline { .. } => "Spline",
            Volume::Points { .. } => "Points",
            Volume::Solid { .. } => "Solid",
            Volume::Texture { .. } => "Texture",
            Volume::MaterialId(id) => return write!(f, "MaterialId({id})"),
            Volume::SmoothingGroups(mask) => return write!(f, "SmoothingGroups({mask:#x})"),
        };
        f.write_str(name)
    }
}

// =============================================================================
// CANONICAL PRIMITIVES
// =============================================================================

/// The three canonical primitive volumes, tested in their local unit space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Canonical {
    /// Unit cube.
    Box,
    /// Unit sphere.
    Sphere,
    /// Unit cylinder, axis Z.
    Cylinder,
}

impl Canonical {
    /// Hard containment of a point already in canonical local space:
    /// exactly `1.0` inside, `0.0` outside.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use glam::Vec3;
    /// use volume_select::Canonical;
    ///
    /// assert_eq!(Canonical::Box.contains(Vec3::ZERO), 1.0);
    /// assert_eq!(Canonical::Box.contains(Vec3::new(2.0, 0.0, 0.0)), 0.0);
    /// ```
    #[must_use]
    pub fn contains(&self, p: Vec3) -> f32 {
        let inside = match self {
            Canonical::Box => p.x.abs() <= 1.0 && p.y.abs() <= 1.0 && p.z.abs() <= 1.0,
            Canonical::Sphere => p.length_squared() <= 1.0,
            Canonical::Cylinder => p.x * p.x + p.y * p.y <= 1.0 && p.z.abs() <= 1.0,
        };
        if inside {
            1.0
        } else {
            0.0
        }
    }

    /// Closed-form proxy distance from the primitive's surface.
    ///
    /// `p` is the point in canonical local space; `scale` holds the world
    /// length of each local axis, so the returned distance is in world
    /// units. Negative inside (for the box), positive outside.
    ///
    /// For the sphere and cylinder this is `|(p - normalize(p)) * scale|`,
    /// which is not the exact distance to a non-uniformly scaled
    /// ellipsoid - an approximation kept deliberately, since the falloff
    /// shape downstream is tuned to it.
    #[must_use]
    pub fn distance(&self, p: Vec3, scale: Vec3) -> f32 {
        match self {
            Canonical::Box => {
                let mut diff = Vec3::ZERO;
                let mut max = 0.0_f32;
                for i in 0..3 {
                    diff[i] = (p[i].abs() - 1.0) * scale[i];
                    if i == 0 || diff[i] > max {
                        max = diff[i];
                    }
                    if diff[i] < 0.0 {
                        diff[i] = 0.0;
                    }
                }
                if max < 0.0 {
                    // This far inside the box.
                    max
                } else {
                    diff.length()
                }
            }
            Canonical::Sphere => ((p - p.normalize_or_zero()) * scale).length(),
            Canonical::Cylinder => {
                // The flattened radial form applies only for z in [0, 1];
                // everywhere else the full 3D form is used.
                if p.z < 0.0 || p.z > 1.0 {
                    ((p - p.normalize_or_zero()) * scale).length()
                } else {
                    let flat = Vec3::new(p.x, p.y, 0.0);
                    ((flat - flat.normalize_or_zero()) * scale).length()
                }
            }
        }
    }
}

// =============================================================================
// TARGET-MESH QUERIES
// =============================================================================

/// Parity ray-cast containment test for a point in target-local space.
///
/// Casts a ray toward -X and counts face crossings to the left of the
/// point, pruning faces by their Y/Z hard-box extents; an odd count means
/// the point is inside. Entries are scanned from the start - every face
/// left of the query can cross the ray.
#[must_use]
pub fn mesh_contains(mesh: &TargetMesh, bounds: &FaceBounds, p: Vec3) -> bool {
    let mut crossings = 0_u32;
    for entry in bounds.hard_candidates() {
        if p.x < entry.hard.min.x {
            break;
        }
        if !entry.hard_contains_yz(p.y, p.z) {
            continue;
        }
        let face = entry.face as usize;
        let n = mesh.normal(face);
        // Ray direction is (-1, 0, 0); a face parallel to it cannot cross.
        let rn = -n.x;
        if rn.abs() < GEOM_EPSILON {
            continue;
        }
        let [c0, c1, c2] = mesh.corners(face);
        let d = c0.dot(n);
        let a = (d - p.dot(n)) / rn;
        let mut hit = p + a * Vec3::NEG_X;
        if hit.x >= p.x {
            continue;
        }
        // Nudge the hit off any exactly-coincident vertex Z to dodge a
        // degenerate coplanarity case. A targeted workaround, not a fix.
        if c0.z == hit.z || c1.z == hit.z || c2.z == hit.z {
            hit.z += RAY_NUDGE;
        }
        let bary = mesh.barycentric(face, hit);
        if bary.x > 0.0
            && bary.x < 1.0
            && bary.y > 0.0
            && bary.y < 1.0
            && bary.z > 0.0
            && bary.z < 1.0
        {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

/// Distance from `p` (target-local) to the nearest target face whose soft
/// box contains it, or `None` when no soft box is near.
#[must_use]
pub fn mesh_soft_distance(mesh: &TargetMesh, bounds: &FaceBounds, p: Vec3) -> Option<f32> {
    let mut closest = FAR_DISTANCE;
    for entry in bounds.soft_candidates(p.x) {
        if p.x < entry.soft.min.x {
            break;
        }
        if entry.soft_contains(p) {
            let d = face_distance_squared(mesh, closest, p, entry.face as usize);
            if d < closest {
                closest = d;
            }
        }
    }
    (closest < FAR_DISTANCE).then(|| closest.sqrt())
}

/// Squared distance from `p` to triangle `face`: the perpendicular distance
/// when the foot lies inside the triangle (barycentric test), otherwise the
/// minimum distance to its three edges. Returns the sentinel when the
/// perpendicular distance already exceeds `best`.
fn face_distance_squared(mesh: &TargetMesh, best: f32, p: Vec3, face: usize) -> f32 {
    let n = mesh.normal(face);
    let rn = n.length_squared();
    let [c0, c1, c2] = mesh.corners(face);
    if rn < GEOM_EPSILON {
        // Degenerate face; only its edges carry distance.
        return edge_distance_squared(p, c0, c1, c2);
    }
    let d = c0.dot(n);
    let a = (p.dot(n) - d) / rn;
    // Vector from the plane to the point, along the normal.
    let to_plane = a * n;
    let dist = to_plane.length_squared();
    if dist >= best {
        return FAR_DISTANCE;
    }
    let bary = mesh.barycentric(face, p - to_plane);
    if bary.x < 0.0 || bary.x > 1.0 || bary.y < 0.0 || bary.y > 1.0 || bary.z < 0.0 || bary.z > 1.0
    {
        edge_distance_squared(p, c0, c1, c2)
    } else {
        dist
    }
}

fn edge_distance_squared(p: Vec3, c0: Vec3, c1: Vec3, c2: Vec3) -> f32 {
    segment_distance_squared(p, c0, c1)
        .min(segment_distance_squared(p, c1, c2))
        .min(segment_distance_squared(p, c2, c0))
}

/// Squared distance from `p` to the segment [a, b] by clamped projection.
#[must_use]
pub fn segment_distance_squared(p: Vec3, a: Vec3, b: Vec3) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < GEOM_EPSILON {
        return p.distance_squared(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance_squared(a + t * ab)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests;
