//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// CLASSIFICATION TESTS
// =============================================================================

#[test]
fn test_far_distance_is_huge() {
    assert!(
        FAR_DISTANCE > 1.0e30,
        "FAR_DISTANCE must dwarf any plausible scene distance"
    );
}

#[test]
fn test_hard_select_threshold_below_one() {
    assert!(HARD_SELECT_THRESHOLD < 1.0);
    assert!(HARD_SELECT_THRESHOLD > 0.9);
}

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_geom_epsilon_is_small() {
    assert!(GEOM_EPSILON > 0.0);
    assert!(GEOM_EPSILON < 1.0e-3);
}

#[test]
fn test_ray_nudge_exceeds_epsilon() {
    assert!(RAY_NUDGE > GEOM_EPSILON);
}

#[test]
fn test_box_pad_is_positive() {
    assert!(BOX_PAD > 0.0);
}

// =============================================================================
// EVALUATION TESTS
// =============================================================================

#[test]
fn test_grid_resolution_cap() {
    assert!(MAX_GRID_RESOLUTION >= 1);
}

#[test]
fn test_curve_refinement_parameters() {
    assert!(CURVE_SEED_WINDOWS >= 1);
    assert!(CURVE_REFINE_DEPTH >= 1);
}

// =============================================================================
// SAMPLING TESTS
// =============================================================================

#[test]
fn test_luminance_weights_sum_to_one() {
    let sum = LUMA_R + LUMA_G + LUMA_B;
    assert!((sum - 1.0).abs() < 1.0e-6);
}
