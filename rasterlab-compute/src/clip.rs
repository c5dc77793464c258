//! Line and polygon clipping against a rectangular window.
//!
//! Both clippers run in f64 internally and round to grid cells once at
//! the end, so intersection points keep full precision across
//! successive boundary passes.

use rasterlab_core::{ClipWindow, Point};

// Cohen-Sutherland outcode bits
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn outcode(x: f64, y: f64, window: &ClipWindow) -> u8 {
    let mut code = 0;

    if x < f64::from(window.min.x) {
        code |= LEFT;
    } else if x > f64::from(window.max.x) {
        code |= RIGHT;
    }
    if y < f64::from(window.min.y) {
        code |= BOTTOM;
    } else if y > f64::from(window.max.y) {
        code |= TOP;
    }

    code
}

/// Cohen-Sutherland line clip.
///
/// Returns the surviving segment as 1-2 points: 2 in the common case,
/// 1 when the segment grazes the window at a single cell after
/// rounding, none when it lies fully outside.
pub fn clip_line(a: Point, b: Point, window: &ClipWindow) -> Vec<Point> {
    let x_min = f64::from(window.min.x);
    let x_max = f64::from(window.max.x);
    let y_min = f64::from(window.min.y);
    let y_max = f64::from(window.max.y);

    let (mut x1, mut y1) = (f64::from(a.x), f64::from(a.y));
    let (mut x2, mut y2) = (f64::from(b.x), f64::from(b.y));
    let mut code1 = outcode(x1, y1, window);
    let mut code2 = outcode(x2, y2, window);

    loop {
        if code1 | code2 == 0 {
            break; // both endpoints inside
        }
        if code1 & code2 != 0 {
            return Vec::new(); // both beyond the same boundary
        }

        let code_out = if code1 != 0 { code1 } else { code2 };

        // The chosen boundary always crosses the segment, so the
        // divisions below never see a zero delta.
        let (x, y) = if code_out & TOP != 0 {
            (x1 + (x2 - x1) * (y_max - y1) / (y2 - y1), y_max)
        } else if code_out & BOTTOM != 0 {
            (x1 + (x2 - x1) * (y_min - y1) / (y2 - y1), y_min)
        } else if code_out & RIGHT != 0 {
            (x_max, y1 + (y2 - y1) * (x_max - x1) / (x2 - x1))
        } else {
            (x_min, y1 + (y2 - y1) * (x_min - x1) / (x2 - x1))
        };

        if code_out == code1 {
            x1 = x;
            y1 = y;
            code1 = outcode(x1, y1, window);
        } else {
            x2 = x;
            y2 = y;
            code2 = outcode(x2, y2, window);
        }
    }

    let p1 = Point::new(x1.round() as i32, y1.round() as i32);
    let p2 = Point::new(x2.round() as i32, y2.round() as i32);
    if p1 == p2 {
        vec![p1]
    } else {
        vec![p1, p2]
    }
}

/// Sutherland-Hodgman polygon clip.
///
/// The vertex list is implicitly closed (each vertex's predecessor
/// wraps to the last). The window's edges are processed in the fixed
/// order left, top, right, bottom; a vertex survives a pass when it
/// lies strictly on the interior side of the edge under clockwise
/// traversal. An empty intermediate polygon short-circuits. Fewer than
/// 3 vertices clip to an empty set.
pub fn clip_polygon(vertices: &[Point], window: &ClipWindow) -> Vec<Point> {
    if vertices.len() < 3 {
        return Vec::new();
    }

    let min = (f64::from(window.min.x), f64::from(window.min.y));
    let max = (f64::from(window.max.x), f64::from(window.max.y));

    // Window edges in clockwise traversal order
    let edges = [
        ((min.0, min.1), (min.0, max.1)), // left
        ((min.0, max.1), (max.0, max.1)), // top
        ((max.0, max.1), (max.0, min.1)), // right
        ((max.0, min.1), (min.0, min.1)), // bottom
    ];

    let mut clipped: Vec<(f64, f64)> = vertices
        .iter()
        .map(|p| (f64::from(p.x), f64::from(p.y)))
        .collect();

    for (edge_start, edge_end) in edges {
        clipped = clip_against_edge(&clipped, edge_start, edge_end);
        if clipped.is_empty() {
            break; // fully outside the window
        }
    }

    clipped
        .into_iter()
        .map(|(x, y)| Point::new(x.round() as i32, y.round() as i32))
        .collect()
}

fn clip_against_edge(
    polygon: &[(f64, f64)],
    edge_start: (f64, f64),
    edge_end: (f64, f64),
) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(polygon.len() + 1);

    for i in 0..polygon.len() {
        let current = polygon[i];
        let prev = polygon[(i + polygon.len() - 1) % polygon.len()];

        let current_inside = is_inside(current, edge_start, edge_end);
        let prev_inside = is_inside(prev, edge_start, edge_end);

        if current_inside {
            if !prev_inside {
                out.push(intersect(prev, current, edge_start, edge_end));
            }
            out.push(current);
        } else if prev_inside {
            out.push(intersect(prev, current, edge_start, edge_end));
        }
    }

    out
}

/// Half-plane test: the interior is where the cross product against
/// the clockwise edge direction is strictly negative.
fn is_inside(p: (f64, f64), edge_start: (f64, f64), edge_end: (f64, f64)) -> bool {
    (edge_end.0 - edge_start.0) * (p.1 - edge_start.1)
        - (edge_end.1 - edge_start.1) * (p.0 - edge_start.0)
        < 0.0
}

/// Intersection of the lines through (p1, p2) and (p3, p4), in the
/// two-line determinant form. Only called for segments that straddle
/// the clip edge, so the denominator is nonzero.
fn intersect(
    p1: (f64, f64),
    p2: (f64, f64),
    p3: (f64, f64),
    p4: (f64, f64),
) -> (f64, f64) {
    let denominator = (p1.0 - p2.0) * (p3.1 - p4.1) - (p1.1 - p2.1) * (p3.0 - p4.0);

    let det12 = p1.0 * p2.1 - p1.1 * p2.0;
    let det34 = p3.0 * p4.1 - p3.1 * p4.0;

    (
        (det12 * (p3.0 - p4.0) - (p1.0 - p2.0) * det34) / denominator,
        (det12 * (p3.1 - p4.1) - (p1.1 - p2.1) * det34) / denominator,
    )
}
