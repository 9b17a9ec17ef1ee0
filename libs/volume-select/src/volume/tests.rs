//! Point-classifier tests.

use super::*;
use config::constants::FAR_DISTANCE;
use glam::Affine3A;

/// Closed unit cube (corners at ±1), twelve triangles.
fn cube_target() -> TargetMesh {
    let positions = vec![
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ];
    let triangles = vec![
        [0, 1, 2],
        [0, 2, 3], // z = -1
        [4, 6, 5],
        [4, 7, 6], // z = +1
        [0, 3, 7],
        [0, 7, 4], // x = -1
        [1, 5, 6],
        [1, 6, 2], // x = +1
        [0, 4, 5],
        [0, 5, 1], // y = -1
        [3, 2, 6],
        [3, 6, 7], // y = +1
    ];
    TargetMesh::new(positions, triangles).unwrap()
}

#[test]
fn test_canonical_box_containment() {
    assert_eq!(Canonical::Box.contains(Vec3::ZERO), 1.0);
    assert_eq!(Canonical::Box.contains(Vec3::ONE), 1.0); // boundary inclusive
    assert_eq!(Canonical::Box.contains(Vec3::new(2.0, 0.0, 0.0)), 0.0);
}

#[test]
fn test_canonical_sphere_containment() {
    assert_eq!(Canonical::Sphere.contains(Vec3::ZERO), 1.0);
    assert_eq!(Canonical::Sphere.contains(Vec3::new(1.0, 0.0, 0.0)), 1.0);
    assert_eq!(Canonical::Sphere.contains(Vec3::ONE), 0.0);
}

#[test]
fn test_canonical_cylinder_containment() {
    assert_eq!(Canonical::Cylinder.contains(Vec3::ZERO), 1.0);
    assert_eq!(Canonical::Cylinder.contains(Vec3::new(0.0, 0.0, 0.9)), 1.0);
    assert_eq!(Canonical::Cylinder.contains(Vec3::new(0.0, 0.0, 1.1)), 0.0);
    assert_eq!(Canonical::Cylinder.contains(Vec3::new(0.8, 0.8, 0.0)), 0.0);
}

#[test]
fn test_box_distance_outside() {
    let d = Canonical::Box.distance(Vec3::new(2.0, 0.0, 0.0), Vec3::ONE);
    assert!((d - 1.0).abs() < 1.0e-6);
    // Axis scale stretches the excess.
    let d = Canonical::Box.distance(Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 1.0));
    assert!((d - 3.0).abs() < 1.0e-6);
}

#[test]
fn test_box_distance_inside_is_negative() {
    let d = Canonical::Box.distance(Vec3::new(0.5, 0.0, 0.0), Vec3::ONE);
    assert!(d < 0.0);
}

#[test]
fn test_sphere_distance_approximation() {
    let d = Canonical::Sphere.distance(Vec3::new(2.0, 0.0, 0.0), Vec3::ONE);
    assert!((d - 1.0).abs() < 1.0e-6);
    let d = Canonical::Sphere.distance(Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 1.0));
    assert!((d - 3.0).abs() < 1.0e-6);
}

#[test]
fn test_cylinder_distance_radial_and_axial() {
    let radial = Canonical::Cylinder.distance(Vec3::new(2.0, 0.0, 0.0), Vec3::ONE);
    assert!((radial - 1.0).abs() < 1.0e-6);
    let axial = Canonical::Cylinder.distance(Vec3::new(0.0, 0.0, 2.0), Vec3::ONE);
    assert!((axial - 1.0).abs() < 1.0e-6);
}

#[test]
fn test_cylinder_distance_lower_half_keeps_full_form() {
    // Below z = 0 the radial flattening does not apply, so the distance
    // picks up the z component: |p - normalize(p)| = |p| - 1 here.
    let d = Canonical::Cylinder.distance(Vec3::new(2.0, 0.0, -0.5), Vec3::ONE);
    let expected = 4.25_f32.sqrt() - 1.0;
    assert!((d - expected).abs() < 1.0e-5);
    assert!(d > 1.0); // strictly more than the flattened radial 1.0
}

#[test]
fn test_cube_parity_containment() {
    let cube = cube_target();
    let bounds = FaceBounds::build(&cube, None);
    // Off-diagonal probes, so no ray grazes a face-split edge.
    assert!(mesh_contains(&cube, &bounds, Vec3::new(0.0, 0.2, 0.1)));
    assert!(mesh_contains(&cube, &bounds, Vec3::new(-0.7, -0.3, 0.4)));
    assert!(!mesh_contains(&cube, &bounds, Vec3::new(2.0, 0.2, 0.1)));
    assert!(!mesh_contains(&cube, &bounds, Vec3::new(0.0, 2.0, 0.1)));
    assert!(!mesh_contains(&cube, &bounds, Vec3::new(-2.0, 0.2, 0.1)));
}

#[test]
fn test_empty_target_contains_nothing() {
    let empty = TargetMesh::new(vec![], vec![]).unwrap();
    let bounds = FaceBounds::build(&empty, Some(1.0));
    assert!(!mesh_contains(&empty, &bounds, Vec3::ZERO));
    assert_eq!(mesh_soft_distance(&empty, &bounds, Vec3::ZERO), None);
}

#[test]
fn test_soft_distance_perpendicular_foot() {
    let tri = TargetMesh::new(
        vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)],
        vec![[0, 1, 2]],
    )
    .unwrap();
    let bounds = FaceBounds::build(&tri, Some(1.0));
    let d = mesh_soft_distance(&tri, &bounds, Vec3::new(0.5, 0.5, 0.5)).unwrap();
    assert!((d - 0.5).abs() < 1.0e-5);
}

#[test]
fn test_soft_distance_falls_back_to_edges() {
    let tri = TargetMesh::new(
        vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)],
        vec![[0, 1, 2]],
    )
    .unwrap();
    let bounds = FaceBounds::build(&tri, Some(1.0));
    // Past the corner at (2, 0, 0): nearest feature is that corner.
    let d = mesh_soft_distance(&tri, &bounds, Vec3::new(3.0, 0.0, 0.0)).unwrap();
    assert!((d - 1.0).abs() < 1.0e-5);
}

#[test]
fn test_soft_distance_out_of_reach() {
    let tri = TargetMesh::new(
        vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)],
        vec![[0, 1, 2]],
    )
    .unwrap();
    let bounds = FaceBounds::build(&tri, Some(1.0));
    assert_eq!(mesh_soft_distance(&tri, &bounds, Vec3::new(10.0, 10.0, 10.0)), None);
}

#[test]
fn test_segment_distance() {
    let a = Vec3::ZERO;
    let b = Vec3::new(10.0, 0.0, 0.0);
    // Perpendicular foot on the segment.
    assert!((segment_distance_squared(Vec3::new(5.0, 2.0, 0.0), a, b) - 4.0).abs() < 1.0e-5);
    // Clamped to an endpoint.
    assert!((segment_distance_squared(Vec3::new(12.0, 0.0, 0.0), a, b) - 4.0).abs() < 1.0e-5);
    // Degenerate segment.
    assert!((segment_distance_squared(Vec3::new(3.0, 0.0, 0.0), a, a) - 9.0).abs() < 1.0e-5);
}

#[test]
fn test_volume_thread_safety_split() {
    struct NullField;
    impl ScalarField for NullField {
        fn sample(&self, _point: Vec3, _uvw: Vec3) -> f32 {
            0.0
        }
    }

    let spatial = Volume::Sphere {
        transform: Affine3A::IDENTITY,
    };
    assert!(spatial.is_thread_safe());
    assert!(!spatial.is_tag());

    let field = NullField;
    let serial = Volume::Texture {
        sampler: &field,
        uvw: &[],
        mode: UvMode::Clamp,
    };
    assert!(!serial.is_thread_safe());

    assert!(Volume::MaterialId(3).is_tag());
    assert!(Volume::SmoothingGroups(0b10).is_tag());
}

#[test]
fn test_uv_mode_remap() {
    let uv = Vec3::new(1.5, -0.25, 0.5);
    assert_eq!(UvMode::Clamp.remap(uv), Vec3::new(1.0, 0.0, 0.5));
    assert_eq!(UvMode::Wrap.remap(uv), Vec3::new(0.5, 0.75, 0.5));
}

#[test]
fn test_luminance_weights() {
    assert!((luminance(1.0, 1.0, 1.0) - 1.0).abs() < 1.0e-6);
    assert_eq!(luminance(0.0, 0.0, 0.0), 0.0);
    assert!(luminance(0.0, 1.0, 0.0) > luminance(1.0, 0.0, 0.0));
}

#[test]
fn test_debug_names() {
    assert_eq!(format!("{:?}", Volume::MaterialId(7)), "MaterialId(7)");
    assert_eq!(
        format!(
            "{:?}",
            Volume::Box {
                transform: Affine3A::IDENTITY
            }
        ),
        "Box"
    );
}

#[test]
fn test_far_sentinel_kills_response() {
    let falloff = crate::falloff::Falloff::new(10.0, 0.0, 0.0).unwrap();
    assert_eq!(falloff.response(FAR_DISTANCE), 0.0);
}
