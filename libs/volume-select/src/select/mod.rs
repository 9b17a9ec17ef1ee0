//! # Selection Driver
//!
//! The evaluation driver and selection combinator: classify every vertex of
//! a [`SelectMesh`](crate::mesh::SelectMesh) against a
//! [`Volume`](crate::volume::Volume), then fold the results into the
//! caller's [`SelectionState`] according to the combine method, the
//! inversion flag, and the optional soft falloff.
//!
//! ## Structure
//!
//! - [`SelectOptions`] - method, invert, level, face rule, falloff
//! - [`SelectionState`] - vertex bits, optional weights, face bits
//! - [`select`] - one full evaluation pass
//!
//! Classification of thread-safe volume kinds runs across the rayon pool;
//! `Texture` and `Solid` kinds run serially because their collaborating
//! services are not reentrant. Combination is always serial - it is a
//! cheap linear fold over the classification table.

use config::constants::{FAR_DISTANCE, HARD_SELECT_THRESHOLD, SOLID_RAY_RANGE, SOLID_RAY_STEP};
use glam::{Affine3A, Vec3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bounds::{Aabb, FaceBounds};
use crate::falloff::Falloff;
use crate::grid::UniformGrid;
use crate::mesh::{PolyFace, SelectMesh};
use crate::volume::{mesh_contains, mesh_soft_distance, Canonical, Volume};

// =============================================================================
// OPTIONS
// =============================================================================

/// How a new selection combines with the existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectMethod {
    /// Discard the existing selection and take the new one.
    #[default]
    Replace,
    /// Union: weights saturate at 1.
    Add,
    /// Difference: weights floor at 0.
    Subtract,
}

/// How face selection is derived from vertex containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FaceRule {
    /// Every vertex of the face must be contained.
    Window,
    /// Any contained vertex selects the face.
    #[default]
    Crossing,
}

/// Which sub-object level the evaluation writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectLevel {
    /// Whole-object selection: no sub-object state is written.
    Object,
    /// Per-vertex bits, plus weights when a falloff is active.
    #[default]
    Vertex,
    /// Per-face bits derived from vertex containment.
    Face,
}

/// Full parameter set for one evaluation pass.
///
/// ## Example
///
/// ```rust
/// use volume_select::{Falloff, SelectMethod, SelectOptions};
///
/// let options = SelectOptions {
///     method: SelectMethod::Add,
///     falloff: Some(Falloff::new(5.0, 0.0, 0.0).unwrap()),
///     ..SelectOptions::default()
/// };
/// assert!(!options.invert);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectOptions {
    /// Combine method.
    pub method: SelectMethod,
    /// Invert the result, applied after combination.
    pub invert: bool,
    /// Sub-object level to write.
    pub level: SelectLevel,
    /// Vertex-to-face derivation rule.
    pub face_rule: FaceRule,
    /// Soft falloff; `None` keeps the selection a binary mask.
    pub falloff: Option<Falloff>,
}

// =============================================================================
// SELECTION STATE
// =============================================================================

/// Caller-owned selection buffers, mutated in place by [`select`].
///
/// The weight array exists only while soft selection is active; whenever it
/// is present it runs parallel to the vertex bits with `bit == (weight ==
/// 1.0)`.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    vertices: Vec<bool>,
    weights: Option<Vec<f32>>,
    faces: Vec<bool>,
}

impl SelectionState {
    /// Empty state; buffers are sized on first use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize the buffers to the mesh, keeping existing bits where indices
    /// overlap.
    pub fn fit_to(&mut self, mesh: &SelectMesh) {
        self.vertices.resize(mesh.vertex_count(), false);
        self.faces.resize(mesh.face_count(), false);
        if let Some(weights) = &mut self.weights {
            weights.resize(mesh.vertex_count(), 0.0);
        }
    }

    /// Vertex selection bits.
    #[must_use]
    pub fn vertices(&self) -> &[bool] {
        &self.vertices
    }

    /// Face selection bits.
    #[must_use]
    pub fn faces(&self) -> &[bool] {
        &self.faces
    }

    /// Soft-selection weights, present only after a soft evaluation.
    #[must_use]
    pub fn weights(&self) -> Option<&[f32]> {
        self.weights.as_deref()
    }

    /// Set a vertex bit directly (for seeding an existing selection).
    pub fn set_vertex(&mut self, index: usize, selected: bool) {
        self.vertices[index] = selected;
    }

    /// Set a face bit directly.
    pub fn set_face(&mut self, index: usize, selected: bool) {
        self.faces[index] = selected;
    }

    /// Allocate the weight array, seeding 1.0 under already-set bits so an
    /// existing hard selection survives an Add/Subtract soft pass.
    fn ensure_weights(&mut self) {
        if self.weights.is_none() {
            self.weights = Some(
                self.vertices
                    .iter()
                    .map(|&b| if b { 1.0 } else { 0.0 })
                    .collect(),
            );
        }
    }

    fn drop_weights(&mut self) {
        self.weights = None;
    }
}

// =============================================================================
// DRIVER
// =============================================================================

/// Run one evaluation pass: classify every vertex of `mesh` against
/// `volume` and fold the result into `state` at the requested level.
///
/// The evaluation itself never fails; degenerate inputs (empty targets, an
/// out-of-reach volume) resolve to an empty classification, which still
/// honors the combine method and inversion.
///
/// ## Example
///
/// ```rust
/// use glam::{Affine3A, Vec3};
/// use volume_select::{SelectMesh, SelectOptions, SelectionState, Volume};
///
/// let mesh = SelectMesh::new(
///     vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)],
///     vec![],
/// ).unwrap();
/// let volume = Volume::Sphere {
///     transform: Affine3A::from_scale(Vec3::splat(2.0)),
/// };
/// let mut state = SelectionState::new();
/// volume_select::select(&mesh, &volume, &SelectOptions::default(), &mut state);
/// assert_eq!(state.vertices(), &[true, false]);
/// ```
pub fn select(
    mesh: &SelectMesh,
    volume: &Volume<'_>,
    options: &SelectOptions,
    state: &mut SelectionState,
) {
    state.fit_to(mesh);

    if matches!(options.level, SelectLevel::Object) {
        // Whole-object selection is the host's concern; nothing per-vertex
        // survives it.
        state.drop_weights();
        return;
    }

    if volume.is_tag() {
        select_by_tags(mesh, volume, options, state);
        return;
    }

    let table = classify_all(mesh, volume, options.falloff);
    let texture = matches!(volume, Volume::Texture { .. });

    match options.level {
        SelectLevel::Vertex => combine_vertices(options, state, table.as_deref(), texture),
        SelectLevel::Face => combine_faces(mesh, options, state, table.as_deref(), texture),
        SelectLevel::Object => {}
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Per-vertex classification table.
///
/// Convention: `f <= 0.0` is hard containment, `0 < f < FAR_DISTANCE` is a
/// surface distance for the falloff curve, `f >= FAR_DISTANCE` is a miss.
/// For `Texture` the value is instead the sampled weight itself, already
/// snapped to 1.0 above the hard threshold.
///
/// `None` means the volume cannot reach the mesh at all (bounds-level early
/// reject, or an empty target).
fn classify_all(
    mesh: &SelectMesh,
    volume: &Volume<'_>,
    falloff: Option<Falloff>,
) -> Option<Vec<f32>> {
    let positions = mesh.positions();
    let soft_radius = falloff.map(|f| f.distance());
    let reach = soft_radius.unwrap_or(0.0);

    match volume {
        Volume::Box { transform } => {
            classify_canonical(positions, mesh.bounds(), Canonical::Box, transform, soft_radius)
        }
        Volume::Sphere { transform } => classify_canonical(
            positions,
            mesh.bounds(),
            Canonical::Sphere,
            transform,
            soft_radius,
        ),
        Volume::Cylinder { transform } => classify_canonical(
            positions,
            mesh.bounds(),
            Canonical::Cylinder,
            transform,
            soft_radius,
        ),
        Volume::Mesh {
            mesh: target,
            transform,
        } => {
            let reject = target.bounds().transformed(transform).enlarged(reach);
            if !reject.intersects(&mesh.bounds()) {
                return None;
            }
            let inv = transform.inverse();
            let bounds = FaceBounds::build(target, soft_radius);
            Some(
                positions
                    .par_iter()
                    .map(|&p| {
                        let q = inv.transform_point3(p);
                        if mesh_contains(target, &bounds, q) {
                            0.0
                        } else if soft_radius.is_some() {
                            mesh_soft_distance(target, &bounds, q).unwrap_or(FAR_DISTANCE)
                        } else {
                            FAR_DISTANCE
                        }
                    })
                    .collect(),
            )
        }
        Volume::Spline { spline, transform } => {
            let reject = spline.bounds().transformed(transform).enlarged(reach);
            if !reject.intersects(&mesh.bounds()) {
                return None;
            }
            if soft_radius.is_none() {
                // A curve has no interior; without a falloff it selects
                // nothing.
                return Some(vec![FAR_DISTANCE; positions.len()]);
            }
            let inv = transform.inverse();
            Some(
                positions
                    .par_iter()
                    .map(|&p| spline.nearest_distance(inv.transform_point3(p)))
                    .collect(),
            )
        }
        Volume::Points { points } => {
            let reject = Aabb::from_points(points).enlarged(reach);
            if !reject.intersects(&mesh.bounds()) {
                return None;
            }
            let grid = UniformGrid::build(points);
            Some(
                positions
                    .par_iter()
                    .map(|&p| grid.closest_point(p, reach).map_or(FAR_DISTANCE, |(_, d)| d))
                    .collect(),
            )
        }
        Volume::Solid { solid, transform } => {
            let local_bounds = solid.bounds();
            let reject = local_bounds.transformed(transform);
            if !reject.intersects(&mesh.bounds()) {
                return None;
            }
            let inv = transform.inverse();
            Some(
                positions
                    .iter()
                    .map(|&p| {
                        let q = inv.transform_point3(p);
                        if !local_bounds.contains(q) {
                            FAR_DISTANCE
                        } else if solid_contains(*solid, q) {
                            0.0
                        } else {
                            FAR_DISTANCE
                        }
                    })
                    .collect(),
            )
        }
        Volume::Texture { sampler, uvw, mode } => Some(
            positions
                .iter()
                .enumerate()
                .map(|(i, &p)| {
                    let uv = uvw.get(i).copied().unwrap_or(Vec3::new(0.5, 0.5, 0.0));
                    let value = sampler.sample(p, mode.remap(uv));
                    if value > HARD_SELECT_THRESHOLD {
                        1.0
                    } else {
                        value
                    }
                })
                .collect(),
        ),
        // Tag kinds are dispatched before classification.
        Volume::MaterialId(_) | Volume::SmoothingGroups(_) => None,
    }
}

fn classify_canonical(
    positions: &[Vec3],
    mesh_bounds: Aabb,
    kind: Canonical,
    transform: &Affine3A,
    soft_radius: Option<f32>,
) -> Option<Vec<f32>> {
    let unit = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    let reject = unit
        .transformed(transform)
        .enlarged(soft_radius.unwrap_or(0.0));
    if !reject.intersects(&mesh_bounds) {
        return None;
    }
    let inv = transform.inverse();
    let scale = axis_scales(transform);
    Some(
        positions
            .par_iter()
            .map(|&p| {
                let q = inv.transform_point3(p);
                if kind.contains(q) == 1.0 {
                    0.0
                } else if soft_radius.is_some() {
                    kind.distance(q, scale)
                } else {
                    FAR_DISTANCE
                }
            })
            .collect(),
    )
}

/// World length of each local axis of the transform.
fn axis_scales(transform: &Affine3A) -> Vec3 {
    Vec3::new(
        transform.matrix3.x_axis.length(),
        transform.matrix3.y_axis.length(),
        transform.matrix3.z_axis.length(),
    )
}

/// Parity containment against an external ray-intersection service: cast a
/// ray from the point and count surface crossings, stepping just past each
/// hit, up to a fixed total range.
fn solid_contains(solid: &dyn crate::volume::RaySolid, p: Vec3) -> bool {
    let dir = Vec3::X;
    let mut origin = p;
    let mut traveled = 0.0_f32;
    let mut crossings = 0_u32;
    while traveled < SOLID_RAY_RANGE {
        match solid.intersect_ray(origin, dir) {
            Some(t) if t >= 0.0 => {
                crossings += 1;
                let advance = t + SOLID_RAY_STEP;
                origin += dir * advance;
                traveled += advance;
            }
            _ => break,
        }
    }
    crossings % 2 == 1
}

// =============================================================================
// COMBINATOR
// =============================================================================

/// Map one classification value to a weight in [0, 1].
fn shaped_weight(f: f32, texture: bool, falloff: Option<Falloff>) -> f32 {
    if f >= FAR_DISTANCE {
        0.0
    } else if texture {
        f.clamp(0.0, 1.0)
    } else if f <= 0.0 {
        1.0
    } else {
        falloff.map_or(0.0, |fo| fo.response(f).clamp(0.0, 1.0))
    }
}

/// Hard-containment test of one classification value, for the binary paths.
fn hard_hit(f: f32, texture: bool) -> bool {
    if texture {
        f == 1.0
    } else {
        f <= 0.0
    }
}

fn combine_vertices(
    options: &SelectOptions,
    state: &mut SelectionState,
    table: Option<&[f32]>,
    texture: bool,
) {
    if matches!(options.method, SelectMethod::Replace) {
        state.drop_weights();
        state.vertices.fill(false);
    }

    if options.falloff.is_some() || texture {
        state.ensure_weights();
        let vertices = &mut state.vertices;
        if let Some(weights) = &mut state.weights {
            for (i, w) in weights.iter_mut().enumerate() {
                let f = table.map_or(FAR_DISTANCE, |t| t[i]);
                let new = shaped_weight(f, texture, options.falloff);
                let mut combined = match options.method {
                    SelectMethod::Replace => new,
                    SelectMethod::Add => (*w + new).min(1.0),
                    SelectMethod::Subtract => (*w - new).max(0.0),
                };
                if options.invert {
                    combined = 1.0 - combined;
                }
                *w = combined;
                vertices[i] = combined == 1.0;
            }
        }
    } else {
        state.drop_weights();
        for (i, bit) in state.vertices.iter_mut().enumerate() {
            let hit = table.map_or(false, |t| hard_hit(t[i], texture));
            let combined = match options.method {
                SelectMethod::Replace => hit,
                SelectMethod::Add => *bit || hit,
                SelectMethod::Subtract => *bit && !hit,
            };
            *bit = if options.invert { !combined } else { combined };
        }
    }
}

fn combine_faces(
    mesh: &SelectMesh,
    options: &SelectOptions,
    state: &mut SelectionState,
    table: Option<&[f32]>,
    texture: bool,
) {
    // Weights are a vertex-level concept.
    state.drop_weights();
    if matches!(options.method, SelectMethod::Replace) {
        state.faces.fill(false);
    }

    for (fi, face) in mesh.faces().iter().enumerate() {
        let hit = match table {
            None => false,
            Some(t) => {
                let contained = |&v: &u32| hard_hit(t[v as usize], texture);
                match options.face_rule {
                    FaceRule::Window => {
                        !face.verts.is_empty() && face.verts.iter().all(contained)
                    }
                    FaceRule::Crossing => face.verts.iter().any(contained),
                }
            }
        };
        let combined = match options.method {
            SelectMethod::Replace => hit,
            SelectMethod::Add => state.faces[fi] || hit,
            SelectMethod::Subtract => state.faces[fi] && !hit,
        };
        state.faces[fi] = if options.invert { !combined } else { combined };
    }
}

// =============================================================================
// TAG SELECTION
// =============================================================================

/// Whether a face matches the tag volume for *vertex-level* selection:
/// material equality, or any smoothing-group overlap.
fn face_matches_for_vertices(face: &PolyFace, volume: &Volume<'_>) -> bool {
    match volume {
        Volume::MaterialId(id) => face.material == *id,
        Volume::SmoothingGroups(mask) => face.smoothing & mask != 0,
        _ => false,
    }
}

/// Face-level tag match. Smoothing groups must match the mask *exactly*
/// here, a stricter test than the vertex-level overlap.
fn face_matches_exact(face: &PolyFace, volume: &Volume<'_>) -> bool {
    match volume {
        Volume::MaterialId(id) => face.material == *id,
        Volume::SmoothingGroups(mask) => face.smoothing == *mask,
        _ => false,
    }
}

fn select_by_tags(
    mesh: &SelectMesh,
    volume: &Volume<'_>,
    options: &SelectOptions,
    state: &mut SelectionState,
) {
    match options.level {
        SelectLevel::Vertex => {
            if matches!(options.method, SelectMethod::Replace) {
                state.vertices.fill(false);
            }

            // `touching`: the vertex has at least one matching incident
            // face. `surrounded`: every incident face matches (vacuously
            // false for isolated vertices).
            let n = mesh.vertex_count();
            let mut touching = vec![false; n];
            let mut surrounded = vec![true; n];
            let mut incident = vec![false; n];
            for face in mesh.faces() {
                let m = face_matches_for_vertices(face, volume);
                for &v in &face.verts {
                    let v = v as usize;
                    incident[v] = true;
                    touching[v] |= m;
                    surrounded[v] &= m;
                }
            }

            // Any live weight array stays in step with the bits: matched
            // vertices saturate to 1.0 or 0.0 per method, the rest keep
            // their soft weights, and inversion mirrors both.
            let mut weights = state.weights.as_deref_mut();
            for (i, bit) in state.vertices.iter_mut().enumerate() {
                let hit = match options.face_rule {
                    FaceRule::Window => incident[i] && surrounded[i],
                    FaceRule::Crossing => touching[i],
                };
                let combined = match options.method {
                    SelectMethod::Replace => hit,
                    SelectMethod::Add => *bit || hit,
                    SelectMethod::Subtract => *bit && !hit,
                };
                *bit = if options.invert { !combined } else { combined };
                if let Some(w) = weights.as_deref_mut() {
                    let mut value = match options.method {
                        SelectMethod::Replace => {
                            if hit {
                                1.0
                            } else {
                                0.0
                            }
                        }
                        SelectMethod::Add => {
                            if hit {
                                1.0
                            } else {
                                w[i]
                            }
                        }
                        SelectMethod::Subtract => {
                            if hit {
                                0.0
                            } else {
                                w[i]
                            }
                        }
                    };
                    if options.invert {
                        value = 1.0 - value;
                    }
                    w[i] = value;
                }
            }
        }
        SelectLevel::Face => {
            if matches!(options.method, SelectMethod::Replace) {
                state.faces.fill(false);
            }
            for (fi, face) in mesh.faces().iter().enumerate() {
                let hit = face_matches_exact(face, volume);
                let combined = match options.method {
                    SelectMethod::Replace => hit,
                    SelectMethod::Add => state.faces[fi] || hit,
                    SelectMethod::Subtract => state.faces[fi] && !hit,
                };
                state.faces[fi] = if options.invert { !combined } else { combined };
            }
        }
        SelectLevel::Object => {}
    }
}

// =============================================================================
// TESTS
// =============================================================================
