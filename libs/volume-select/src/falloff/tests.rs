//! Falloff response tests.

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_boundary_values() {
    let falloff = Falloff::new(10.0, 0.0, 0.0).unwrap();
    assert_eq!(falloff.response(0.0), 1.0);
    assert_eq!(falloff.response(10.0), 0.0);
    assert_eq!(falloff.response(10.1), 0.0);
}

#[test]
fn test_midpoint_is_half() {
    // The symmetric cubic with zero pinch/bubble crosses exactly 0.5 at the
    // midpoint of the falloff band.
    let falloff = Falloff::new(10.0, 0.0, 0.0).unwrap();
    assert_eq!(falloff.response(5.0), 0.5);
}

#[test]
fn test_monotonically_non_increasing() {
    let falloff = Falloff::new(10.0, 0.0, 0.0).unwrap();
    let mut previous = falloff.response(0.0);
    for step in 1..=100 {
        let current = falloff.response(step as f32 * 0.1);
        assert!(current <= previous, "rose at step {step}");
        previous = current;
    }
}

#[test]
fn test_bubble_fattens_the_curve() {
    let plain = Falloff::new(10.0, 0.0, 0.0).unwrap();
    let bubbled = Falloff::new(10.0, 0.0, 1.0).unwrap();
    assert!(bubbled.response(5.0) > plain.response(5.0));
    assert_relative_eq!(bubbled.response(5.0), 0.875, epsilon = 1.0e-6);
}

#[test]
fn test_pinch_thins_the_curve() {
    let plain = Falloff::new(10.0, 0.0, 0.0).unwrap();
    let pinched = Falloff::new(10.0, 1.0, 0.0).unwrap();
    assert!(pinched.response(5.0) < plain.response(5.0));
    assert_relative_eq!(pinched.response(5.0), 0.125, epsilon = 1.0e-6);
}

#[test]
fn test_zero_radius_short_circuits() {
    let falloff = Falloff::new(0.0, 0.0, 0.0).unwrap();
    assert_eq!(falloff.response(0.0), 0.0);
    assert_eq!(falloff.response(1.0), 0.0);
}

#[test]
fn test_rejects_bad_distance() {
    assert!(Falloff::new(-1.0, 0.0, 0.0).is_err());
    assert!(Falloff::new(f32::NAN, 0.0, 0.0).is_err());
    assert!(Falloff::new(f32::INFINITY, 0.0, 0.0).is_err());
}

#[test]
fn test_accessors() {
    let falloff = Falloff::new(4.0, 0.5, -0.25).unwrap();
    assert_eq!(falloff.distance(), 4.0);
    assert_eq!(falloff.pinch(), 0.5);
    assert_eq!(falloff.bubble(), -0.25);
}
