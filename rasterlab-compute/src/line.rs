use rasterlab_core::Point;

/// Rasterize the segment from `a` to `b` with Bresenham's
/// integer-error method.
///
/// Steps one pixel per iteration along the dominant axis and lets the
/// doubled-error decision variable pull the secondary axis along, so
/// the result covers the segment with no gaps and includes both
/// endpoints. All 8 octants are handled through the delta signs;
/// `a == b` yields a single point.
pub fn rasterize_line(a: Point, b: Point) -> Vec<Point> {
    let delta_x = b.x - a.x;
    let delta_y = b.y - a.y;
    let abs_dx = delta_x.abs();
    let abs_dy = delta_y.abs();

    let mut x = a.x;
    let mut y = a.y;

    let mut points = Vec::with_capacity(abs_dx.max(abs_dy) as usize + 1);
    points.push(Point::new(x, y));

    if abs_dx > abs_dy {
        // x drives: at most one y step per x step
        let mut error = 2 * abs_dy - abs_dx;
        for _ in 0..abs_dx {
            x += delta_x.signum();
            if error < 0 {
                error += 2 * abs_dy;
            } else {
                y += delta_y.signum();
                error += 2 * abs_dy - 2 * abs_dx;
            }
            points.push(Point::new(x, y));
        }
    } else {
        // y drives (diagonals land here: x steps every iteration)
        let mut error = 2 * abs_dx - abs_dy;
        for _ in 0..abs_dy {
            y += delta_y.signum();
            if error < 0 {
                error += 2 * abs_dx;
            } else {
                x += delta_x.signum();
                error += 2 * abs_dx - 2 * abs_dy;
            }
            points.push(Point::new(x, y));
        }
    }

    points
}

/// Rasterize the consecutive segments of an open polyline.
///
/// Closing is the caller's choice: repeat the first point at the end
/// of `points` to outline a polygon. Shared endpoints are emitted once
/// per segment; rasterizers never deduplicate. Fewer than 2 points
/// yield an empty set.
pub fn rasterize_polyline(points: &[Point]) -> Vec<Point> {
    let mut out = Vec::new();
    for pair in points.windows(2) {
        out.extend(rasterize_line(pair[0], pair[1]));
    }
    out
}
