//! # Config Crate
//!
//! Centralized configuration constants for the volume-select engine.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{FAR_DISTANCE, GEOM_EPSILON};
//!
//! // FAR_DISTANCE marks "outside, no soft weight" classification results
//! let classification: f32 = FAR_DISTANCE;
//! assert!(classification >= FAR_DISTANCE);
//!
//! // GEOM_EPSILON guards near-degenerate geometric divisions
//! let denom: f32 = 1.0e-9;
//! assert!(denom.abs() < GEOM_EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
