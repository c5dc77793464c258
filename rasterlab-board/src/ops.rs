use rasterlab_core::{Point, Point3, Projection};
use serde::{Deserialize, Serialize};

/// One request from the host to the engine.
///
/// Rasterizing operations consume the board's accumulated clicks,
/// fills seed from the last click against the displayed set as
/// boundary, clips require the active window, and transforms rewrite
/// the displayed set in place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Operation {
    /// Bresenham segment between the first two clicks.
    Line,

    /// Polyline over all clicks; `close` repeats the first click at
    /// the end to outline a polygon.
    Polyline { close: bool },

    /// Midpoint circle centered on the last click.
    Circle { radius: i32 },

    /// Midpoint ellipse centered on the last click.
    Ellipse { rx: i32, ry: i32 },

    /// De Casteljau samples over the clicks as control points.
    Bezier { steps: u32 },

    /// Recursive flood fill seeded at the last click; the displayed
    /// set is the boundary, and the interior is appended to it.
    RecursiveFill,

    /// Scanline flood fill seeded at the last click.
    ScanlineFill,

    /// Cohen-Sutherland clip of the segment between the first two
    /// clicks; the surviving segment is rasterized for display.
    ClipLine,

    /// Sutherland-Hodgman clip of the clicks as a polygon; the
    /// surviving outline is closed and rasterized for display.
    ClipPolygon,

    /// Translate the displayed set.
    Translate { dx: i32, dy: i32 },

    /// Rotate the displayed set about `pivot` (degrees, CCW).
    Rotate { angle_degrees: f64, pivot: Point },

    /// Scale the displayed set about `pivot` with per-axis factors
    /// (1.0 = unchanged).
    Scale { x: f64, y: f64, pivot: Point },

    /// Project a cuboid's 8 vertices (bottom ring then top ring) and
    /// rasterize its 12 edges.
    ProjectCuboid {
        vertices: [Point3; 8],
        projection: Projection,
    },
}
