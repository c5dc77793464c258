use crate::{OpError, Operation};
use log::debug;
use rasterlab_compute::{
    clip_line, clip_polygon, evaluate_bezier, rasterize_circle, rasterize_ellipse,
    rasterize_line, rasterize_polyline, rasterize_wireframe, recursive_fill, scanline_fill,
    CUBOID_EDGES,
};
use rasterlab_core::{rotate, scale, translate, ClipWindow, Point, ScaleFactors, Tag};

/// Mutable drawing-session state.
///
/// Owns the single "current point set" the host displays, the raw
/// clicks collected since the last operation, and the optional clip
/// window. Every algorithm call goes through [`Board::apply`]; the
/// host is expected to run one operation at a time and repaint from
/// [`Board::points`] afterwards.
#[derive(Debug, Clone, Default)]
pub struct Board {
    points: Vec<Point>,
    clicks: Vec<Point>,
    window: Option<ClipWindow>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a grid-space click from the host.
    pub fn push_click(&mut self, p: Point) {
        self.clicks.push(p);
    }

    pub fn clicks(&self) -> &[Point] {
        &self.clicks
    }

    /// The point set the host should display.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Replace the displayed set wholesale (e.g. loading a figure).
    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    pub fn set_window(&mut self, window: ClipWindow) {
        self.window = Some(window);
    }

    pub fn clear_window(&mut self) {
        self.window = None;
    }

    pub fn window(&self) -> Option<&ClipWindow> {
        self.window.as_ref()
    }

    /// Drop displayed points and pending clicks alike.
    pub fn clear(&mut self) {
        self.points.clear();
        self.clicks.clear();
    }

    /// Rasterized border of the active window, tagged for display.
    /// Empty when no window is set.
    pub fn window_outline(&self) -> Vec<Point> {
        let Some(window) = self.window else {
            return Vec::new();
        };

        let corners = window.corners();
        let mut closed = corners.to_vec();
        closed.push(corners[0]);

        rasterize_polyline(&closed)
            .into_iter()
            .map(|p| p.with_tag(Tag::Window))
            .collect()
    }

    /// Run one operation and replace the displayed set with its
    /// result. Returns the new display-set size.
    ///
    /// Operations that draw from clicks clear them on success, so the
    /// host starts the next figure from an empty input buffer;
    /// transforms and projections leave pending clicks alone.
    pub fn apply(&mut self, op: Operation) -> Result<usize, OpError> {
        let (result, consumes_clicks) = match &op {
            Operation::Line => {
                self.require_clicks(2)?;
                (rasterize_line(self.clicks[0], self.clicks[1]), true)
            }
            Operation::Polyline { close } => {
                self.require_clicks(2)?;
                let result = if *close {
                    let mut closed = self.clicks.clone();
                    closed.push(self.clicks[0]);
                    rasterize_polyline(&closed)
                } else {
                    rasterize_polyline(&self.clicks)
                };
                (result, true)
            }
            Operation::Circle { radius } => {
                self.require_clicks(1)?;
                (rasterize_circle(self.last_click(), *radius), true)
            }
            Operation::Ellipse { rx, ry } => {
                self.require_clicks(1)?;
                (rasterize_ellipse(self.last_click(), *rx, *ry), true)
            }
            Operation::Bezier { steps } => {
                self.require_clicks(3)?;
                (evaluate_bezier(&self.clicks, *steps), true)
            }
            Operation::RecursiveFill => {
                self.require_clicks(1)?;
                self.require_boundary()?;
                let mut result = self.points.clone();
                result.extend(recursive_fill(self.last_click(), &self.points));
                (result, true)
            }
            Operation::ScanlineFill => {
                self.require_clicks(1)?;
                self.require_boundary()?;
                let mut result = self.points.clone();
                result.extend(scanline_fill(self.last_click(), &self.points));
                (result, true)
            }
            Operation::ClipLine => {
                self.require_clicks(2)?;
                let window = self.require_window()?;
                let clipped = clip_line(self.clicks[0], self.clicks[1], &window);
                (rasterize_polyline(&clipped), true)
            }
            Operation::ClipPolygon => {
                self.require_clicks(3)?;
                let window = self.require_window()?;
                let mut clipped = clip_polygon(&self.clicks, &window);
                let result = if clipped.is_empty() {
                    Vec::new()
                } else {
                    clipped.push(clipped[0]);
                    rasterize_polyline(&clipped)
                };
                (result, true)
            }
            Operation::Translate { dx, dy } => {
                (translate(&self.points, Point::new(*dx, *dy)), false)
            }
            Operation::Rotate {
                angle_degrees,
                pivot,
            } => (rotate(&self.points, *angle_degrees, *pivot), false),
            Operation::Scale { x, y, pivot } => (
                scale(&self.points, ScaleFactors::new(*x, *y), *pivot),
                false,
            ),
            Operation::ProjectCuboid {
                vertices,
                projection,
            } => {
                let mut projected = Vec::with_capacity(vertices.len());
                for v in vertices.iter() {
                    projected.push(
                        projection
                            .project(*v)
                            .ok_or(OpError::DegenerateProjection)?,
                    );
                }
                (rasterize_wireframe(&projected, &CUBOID_EDGES), false)
            }
        };

        debug!("applied {:?}: {} points displayed", op, result.len());

        self.points = result;
        if consumes_clicks {
            self.clicks.clear();
        }
        Ok(self.points.len())
    }

    fn last_click(&self) -> Point {
        self.clicks[self.clicks.len() - 1]
    }

    fn require_clicks(&self, needed: usize) -> Result<(), OpError> {
        if self.clicks.len() < needed {
            return Err(OpError::NotEnoughPoints {
                needed,
                got: self.clicks.len(),
            });
        }
        Ok(())
    }

    fn require_boundary(&self) -> Result<(), OpError> {
        if self.points.is_empty() {
            return Err(OpError::EmptyBoundary);
        }
        Ok(())
    }

    fn require_window(&self) -> Result<ClipWindow, OpError> {
        let window = self.window.ok_or(OpError::MissingWindow)?;
        if !window.is_valid() {
            return Err(OpError::InvalidWindow);
        }
        Ok(window)
    }
}
