//! Point-location predicates for polygons.
//!
//! Hosts use these to validate user picks before dispatching an
//! operation: a fill seed must be strictly inside the boundary
//! polygon, a pivot may sit anywhere.

use crate::Point;

const EPSILON: f64 = 1e-9;

/// True when `p` lies on the segment from `a` to `b`.
pub fn point_on_segment(p: Point, a: Point, b: Point) -> bool {
    let abx = f64::from(b.x - a.x);
    let aby = f64::from(b.y - a.y);
    let apx = f64::from(p.x - a.x);
    let apy = f64::from(p.y - a.y);

    // Colinear first, then within the segment's projection range
    let cross = apy * abx - apx * aby;
    if cross.abs() > EPSILON {
        return false;
    }

    let dot = apx * abx + apy * aby;
    if dot < 0.0 {
        return false;
    }

    dot <= abx * abx + aby * aby
}

/// Even-odd point-in-polygon test over an implicitly closed vertex
/// list. Points lying exactly on an edge count as outside: edges are
/// boundary, not interior.
pub fn point_in_polygon(p: Point, vertices: &[Point]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let x = f64::from(p.x);
    let y = f64::from(p.y);
    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        if point_on_segment(p, vertices[i], vertices[j]) {
            return false;
        }

        let xi = f64::from(vertices[i].x);
        let yi = f64::from(vertices[i].y);
        let xj = f64::from(vertices[j].x);
        let yj = f64::from(vertices[j].y);

        let crosses =
            (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi + f64::EPSILON) + xi;
        if crosses {
            inside = !inside;
        }

        j = i;
    }

    inside
}
