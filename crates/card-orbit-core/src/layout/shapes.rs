//! Closed-form generators for the deterministic arrangements

use std::f64::consts::PI;

use crate::spatial::{Pose, Vec3};

const TABLE_COLUMNS: usize = 20;
const TABLE_COLUMN_SPACING: f64 = 140.0;
const TABLE_ROW_SPACING: f64 = 180.0;
const TABLE_ORIGIN_X: f64 = -1330.0;
const TABLE_ORIGIN_Y: f64 = 990.0;

const HELIX_ANGLE_STEP: f64 = 0.1;
const HELIX_RISE: f64 = 30.0;
const HELIX_TOP: f64 = 3000.0;

const GRID_COLUMNS: usize = 5;
const GRID_ROWS: usize = 4;
const GRID_SPACING: f64 = 400.0;
const GRID_OFFSET: f64 = 800.0;
const GRID_LAYER_DEPTH: f64 = 1000.0;
const GRID_NEAR_Z: f64 = -2000.0;

/// Flat reading grid, 20 columns wide, filled left-to-right then top-to-bottom.
pub fn table(count: usize) -> Vec<Pose> {
    (0..count)
        .map(|i| {
            let col = (i % TABLE_COLUMNS) as f64;
            let row = (i / TABLE_COLUMNS) as f64;
            Pose::at(Vec3::new(
                col * TABLE_COLUMN_SPACING + TABLE_ORIGIN_X,
                -(row * TABLE_ROW_SPACING) + TABLE_ORIGIN_Y,
                0.0,
            ))
        })
        .collect()
}

/// Cards spread over a sphere, each facing away from the center.
pub fn sphere(count: usize, radius: f64) -> Vec<Pose> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as f64;
    let spiral = (n * PI).sqrt();

    (0..count)
        .map(|i| {
            let phi = (-1.0 + (2.0 * i as f64) / n).clamp(-1.0, 1.0).acos();
            let theta = spiral * phi;
            let position = Vec3::from_spherical(radius, phi, theta);
            Pose::looking_at(position, position * 2.0)
        })
        .collect()
}

/// Double helix descending from y = 3000; odd items sit on the opposite strand.
pub fn helix(count: usize, radius: f64) -> Vec<Pose> {
    (0..count)
        .map(|i| {
            let theta = i as f64 * HELIX_ANGLE_STEP + PI * (i % 2) as f64;
            let y = -(i as f64 * HELIX_RISE) + HELIX_TOP;
            let position = Vec3::from_cylindrical(radius, theta, y);
            let gaze = Vec3::new(position.x * 2.0, position.y, position.z * 2.0);
            Pose::looking_at(position, gaze)
        })
        .collect()
}

/// 5x4 planes stacked 1000 units apart in depth.
pub fn grid(count: usize) -> Vec<Pose> {
    (0..count)
        .map(|i| {
            let col = (i % GRID_COLUMNS) as f64;
            let row = ((i / GRID_COLUMNS) % GRID_ROWS) as f64;
            let layer = (i / (GRID_COLUMNS * GRID_ROWS)) as f64;
            Pose::at(Vec3::new(
                col * GRID_SPACING - GRID_OFFSET,
                -(row * GRID_SPACING) + GRID_OFFSET,
                layer * GRID_LAYER_DEPTH + GRID_NEAR_Z,
            ))
        })
        .collect()
}
