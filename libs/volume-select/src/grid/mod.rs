//! # Uniform Grid
//!
//! A bucketed uniform grid over a point cloud supporting radius-bounded
//! nearest-point queries. Built once per evaluation and discarded after;
//! resolution grows with point count up to a fixed cap.

use config::constants::MAX_GRID_RESOLUTION;
use glam::Vec3;

use crate::bounds::Aabb;

// =============================================================================
// UNIFORM GRID
// =============================================================================

/// Bucketed uniform grid over particle/point positions.
///
/// ## Example
///
/// ```rust
/// use glam::Vec3;
/// use volume_select::UniformGrid;
///
/// let grid = UniformGrid::build(&[
///     Vec3::ZERO,
///     Vec3::new(10.0, 0.0, 0.0),
/// ]);
/// let (index, dist) = grid.closest_point(Vec3::new(1.0, 0.0, 0.0), 5.0).unwrap();
/// assert_eq!(index, 0);
/// assert!((dist - 1.0).abs() < 1.0e-6);
/// ```
#[derive(Debug, Clone)]
pub struct UniformGrid {
    points: Vec<Vec3>,
    cells: Vec<Vec<u32>>,
    resolution: usize,
    bounds: Aabb,
    cell_size: Vec3,
}

impl UniformGrid {
    /// Build a grid over `points`. An empty slice yields an empty grid that
    /// answers every query with `None`.
    #[must_use]
    pub fn build(points: &[Vec3]) -> Self {
        let bounds = Aabb::from_points(points).fixed_up();
        let resolution = if points.is_empty() {
            1
        } else {
            ((points.len() as f32).cbrt().ceil() as usize).clamp(1, MAX_GRID_RESOLUTION)
        };
        let width = if bounds.is_empty() {
            Vec3::ONE
        } else {
            bounds.max - bounds.min
        };
        let cell_size = width / resolution as f32;

        let mut grid = Self {
            points: points.to_vec(),
            cells: vec![Vec::new(); resolution * resolution * resolution],
            resolution,
            bounds,
            cell_size,
        };
        for (i, &p) in points.iter().enumerate() {
            let [cx, cy, cz] = grid.cell_coords(p);
            let idx = grid.cell_index(cx, cy, cz);
            grid.cells[idx].push(i as u32);
        }
        grid
    }

    /// Whether the grid holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points loaded into the grid.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Index and distance of the nearest point within `radius` of `p`, or
    /// `None` if no point is that close.
    #[must_use]
    pub fn closest_point(&self, p: Vec3, radius: f32) -> Option<(u32, f32)> {
        if self.points.is_empty() || radius < 0.0 {
            return None;
        }
        let lo = self.cell_coords(p - Vec3::splat(radius));
        let hi = self.cell_coords(p + Vec3::splat(radius));

        let mut best: Option<(u32, f32)> = None;
        for cx in lo[0]..=hi[0] {
            for cy in lo[1]..=hi[1] {
                for cz in lo[2]..=hi[2] {
                    for &i in &self.cells[self.cell_index(cx, cy, cz)] {
                        let d = p.distance_squared(self.points[i as usize]);
                        if best.map_or(true, |(_, bd)| d < bd) {
                            best = Some((i, d));
                        }
                    }
                }
            }
        }

        best.and_then(|(i, d2)| {
            let d = d2.sqrt();
            (d <= radius).then_some((i, d))
        })
    }

    /// Clamped cell coordinates of a point.
    fn cell_coords(&self, p: Vec3) -> [usize; 3] {
        let mut out = [0usize; 3];
        for i in 0..3 {
            let cell = ((p[i] - self.bounds.min[i]) / self.cell_size[i]).floor();
            out[i] = (cell.max(0.0) as usize).min(self.resolution - 1);
        }
        out
    }

    fn cell_index(&self, cx: usize, cy: usize, cz: usize) -> usize {
        (cz * self.resolution + cy) * self.resolution + cx
    }
}

// =============================================================================
// TESTS
// =============================================================================
