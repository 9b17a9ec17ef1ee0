//! # Soft-Falloff Response
//!
//! The analytic blend curve mapping a surface distance to a soft-selection
//! weight. The curve is a cubic Hermite-style blend whose tangents are
//! biased by the pinch and bubble shape parameters.

use serde::{Deserialize, Serialize};

use crate::error::SelectError;

// =============================================================================
// FALLOFF
// =============================================================================

/// Soft-selection falloff parameters.
///
/// `distance` is the soft radius beyond the hard boundary; `pinch` and
/// `bubble` reshape the response curve and may be negative.
///
/// ## Example
///
/// ```rust
/// use volume_select::Falloff;
///
/// let falloff = Falloff::new(10.0, 0.0, 0.0).unwrap();
/// assert_eq!(falloff.response(0.0), 1.0);
/// assert_eq!(falloff.response(5.0), 0.5);
/// assert_eq!(falloff.response(10.0), 0.0);
/// assert_eq!(falloff.response(11.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Falloff {
    distance: f32,
    pinch: f32,
    bubble: f32,
}

impl Falloff {
    /// Create falloff parameters; the distance must be non-negative.
    pub fn new(distance: f32, pinch: f32, bubble: f32) -> Result<Self, SelectError> {
        if distance < 0.0 || !distance.is_finite() {
            return Err(SelectError::InvalidFalloff(distance));
        }
        Ok(Self {
            distance,
            pinch,
            bubble,
        })
    }

    /// The soft radius beyond the hard boundary.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Curve pinch parameter.
    #[must_use]
    pub fn pinch(&self) -> f32 {
        self.pinch
    }

    /// Curve bubble parameter.
    #[must_use]
    pub fn bubble(&self) -> f32 {
        self.bubble
    }

    /// Response weight for a distance from the hard boundary.
    ///
    /// Zero beyond the falloff radius, one at the boundary itself. The
    /// result is not clamped; callers clamp the composited weight to [0, 1]
    /// after combination. A zero radius short-circuits to zero rather than
    /// dividing.
    #[must_use]
    pub fn response(&self, dist: f32) -> f32 {
        if self.distance < dist {
            return 0.0;
        }
        if self.distance == 0.0 {
            return 0.0;
        }
        let u = (self.distance - dist) / self.distance;
        let u2 = u * u;
        let s = 1.0 - u;
        (3.0 * u * self.bubble * s + 3.0 * u2 * (1.0 - self.pinch)) * s + u * u2
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests;
