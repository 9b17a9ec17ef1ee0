//! Curve-distance tests.

use super::*;
use config::constants::FAR_DISTANCE;

fn straight_spline() -> BezierSpline {
    BezierSpline::new(vec![BezierCurve::from_polyline(
        &[Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)],
        false,
    )])
}

#[test]
fn test_point_at_endpoints() {
    let curve = BezierCurve::new(vec![[
        Vec3::ZERO,
        Vec3::new(1.0, 2.0, 0.0),
        Vec3::new(2.0, 2.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
    ]]);
    assert_eq!(curve.point_at(0, 0.0), Vec3::ZERO);
    assert_eq!(curve.point_at(0, 1.0), Vec3::new(3.0, 0.0, 0.0));
}

#[test]
fn test_polyline_reproduces_line() {
    // Equally spaced collinear control points make the cubic linear in u.
    let curve = BezierCurve::from_polyline(&[Vec3::ZERO, Vec3::new(9.0, 0.0, 0.0)], false);
    let p = curve.point_at(0, 1.0 / 3.0);
    assert!((p.x - 3.0).abs() < 1.0e-4);
}

#[test]
fn test_closed_polyline_segment_count() {
    let points = [Vec3::ZERO, Vec3::X, Vec3::Y];
    assert_eq!(BezierCurve::from_polyline(&points, false).segment_count(), 2);
    assert_eq!(BezierCurve::from_polyline(&points, true).segment_count(), 3);
}

#[test]
fn test_nearest_distance_to_line() {
    let d = straight_spline().nearest_distance(Vec3::new(5.0, 3.0, 0.0));
    assert!((d - 3.0).abs() < 1.0e-2);
}

#[test]
fn test_nearest_distance_on_curve_is_small() {
    let d = straight_spline().nearest_distance(Vec3::new(3.0, 0.0, 0.0));
    assert!(d < 0.1);
}

#[test]
fn test_nearest_distance_past_endpoint() {
    // The search stays on the curve, so the answer is the endpoint distance.
    let d = straight_spline().nearest_distance(Vec3::new(12.0, 0.0, 0.0));
    // The bisection lands within its final window of u = 1, so the answer
    // is only as tight as that window.
    assert!((d - 2.0).abs() < 0.1);
}

#[test]
fn test_empty_spline_is_far() {
    let spline = BezierSpline::new(vec![]);
    assert!(spline.is_empty());
    assert_eq!(spline.nearest_distance(Vec3::ZERO), FAR_DISTANCE);
}

#[test]
fn test_bounds_cover_control_points() {
    let spline = BezierSpline::new(vec![BezierCurve::new(vec![[
        Vec3::ZERO,
        Vec3::new(0.0, 5.0, 0.0),
        Vec3::new(10.0, 5.0, 0.0),
        Vec3::new(10.0, 0.0, 0.0),
    ]])]);
    let b = spline.bounds();
    assert_eq!(b.min, Vec3::ZERO);
    assert_eq!(b.max, Vec3::new(10.0, 5.0, 0.0));
}

#[test]
fn test_multi_curve_takes_minimum() {
    let near = BezierCurve::from_polyline(&[Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)], false);
    let far = BezierCurve::from_polyline(
        &[Vec3::new(100.0, 0.0, 0.0), Vec3::new(101.0, 0.0, 0.0)],
        false,
    );
    let spline = BezierSpline::new(vec![far, near]);
    let d = spline.nearest_distance(Vec3::new(0.0, 2.0, 0.0));
    assert!((d - 2.0).abs() < 1.0e-2);
}
