use crate::Point;
use serde::{Deserialize, Serialize};

/// Axis-aligned clip window with inclusive bounds.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`. Constructors do
/// not enforce it; callers check `is_valid` before clipping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipWindow {
    pub min: Point,
    pub max: Point,
}

impl ClipWindow {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Build a window the way the host supplies it: a center cell plus
    /// width and height in grid cells.
    pub fn from_center(center: Point, width: i32, height: i32) -> Self {
        let half_width = width / 2;
        let half_height = height / 2;
        Self {
            min: Point::new(center.x - half_width, center.y - half_height),
            max: Point::new(center.x + half_width, center.y + half_height),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// The four corners in the traversal order the clipper uses:
    /// min, top-left, max, bottom-right.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min.x, self.min.y),
            Point::new(self.min.x, self.max.y),
            Point::new(self.max.x, self.max.y),
            Point::new(self.max.x, self.min.y),
        ]
    }
}
