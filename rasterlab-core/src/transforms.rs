//! Affine point-set transforms.
//!
//! Pure maps over point sets, pivot-aware where the operation has a
//! fixed reference point. Composition order is the caller's explicit
//! responsibility; nothing here sequences transforms.

use crate::Point;
use serde::{Deserialize, Serialize};

/// Per-axis scale multipliers; 1.0 leaves an axis unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
}

impl ScaleFactors {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn uniform(factor: f64) -> Self {
        Self {
            x: factor,
            y: factor,
        }
    }
}

/// Translate every point by `delta`.
pub fn translate(points: &[Point], delta: Point) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.x + delta.x, p.y + delta.y))
        .collect()
}

/// Rotate a point set about `pivot`.
///
/// Positive angles are counter-clockwise in the standard math
/// convention (clockwise on a y-down raster canvas). Results are
/// rounded to the nearest grid cell.
pub fn rotate(points: &[Point], angle_degrees: f64, pivot: Point) -> Vec<Point> {
    let theta = angle_degrees.to_radians();
    let (sin, cos) = theta.sin_cos();

    points
        .iter()
        .map(|p| {
            let dx = f64::from(p.x - pivot.x);
            let dy = f64::from(p.y - pivot.y);
            let x = f64::from(pivot.x) + dx * cos - dy * sin;
            let y = f64::from(pivot.y) + dx * sin + dy * cos;
            Point::new(x.round() as i32, y.round() as i32)
        })
        .collect()
}

/// Scale a point set about `pivot` with independent per-axis factors.
pub fn scale(points: &[Point], factors: ScaleFactors, pivot: Point) -> Vec<Point> {
    points
        .iter()
        .map(|p| {
            let x = f64::from(pivot.x) + f64::from(p.x - pivot.x) * factors.x;
            let y = f64::from(pivot.y) + f64::from(p.y - pivot.y) * factors.y;
            Point::new(x.round() as i32, y.round() as i32)
        })
        .collect()
}
