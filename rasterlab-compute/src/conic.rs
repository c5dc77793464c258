use rasterlab_core::Point;

/// Midpoint circle rasterization.
///
/// Walks one octant from `(0, radius)` with the integer decision
/// variable `d = 1 - radius` and emits the 8-way symmetric reflections
/// of every step. Pixels on the axes and the diagonal come out more
/// than once; rasterizers never deduplicate. A negative radius yields
/// an empty set.
pub fn rasterize_circle(center: Point, radius: i32) -> Vec<Point> {
    if radius < 0 {
        return Vec::new();
    }

    let mut points = Vec::new();
    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;

    push_octant_points(&mut points, center, x, y);

    while x < y {
        x += 1;
        if d < 0 {
            // midpoint inside the circle: stay on this row
            d += 2 * x + 1;
        } else {
            y -= 1;
            d += 2 * (x - y) + 1;
        }
        push_octant_points(&mut points, center, x, y);
    }

    points
}

/// Reflections of `(x, y)` across both axes and the diagonal.
fn push_octant_points(points: &mut Vec<Point>, center: Point, x: i32, y: i32) {
    points.push(Point::new(center.x + x, center.y + y));
    points.push(Point::new(center.x - x, center.y + y));
    points.push(Point::new(center.x + x, center.y - y));
    points.push(Point::new(center.x - x, center.y - y));
    points.push(Point::new(center.x + y, center.y + x));
    points.push(Point::new(center.x - y, center.y + x));
    points.push(Point::new(center.x + y, center.y - x));
    points.push(Point::new(center.x - y, center.y - x));
}

/// Two-region midpoint ellipse rasterization.
///
/// Region 1 steps x while the boundary slope stays below 1, region 2
/// steps y down to the x axis. Each step emits 4-way symmetric points
/// only: with `rx != ry` the diagonal reflection does not lie on the
/// ellipse. Negative radii yield an empty set.
pub fn rasterize_ellipse(center: Point, rx: i32, ry: i32) -> Vec<Point> {
    if rx < 0 || ry < 0 {
        return Vec::new();
    }

    let rx_sq = f64::from(rx * rx);
    let ry_sq = f64::from(ry * ry);

    let mut x = 0;
    let mut y = ry;

    // Incremental slope terms: dx = 2·ry²·x, dy = 2·rx²·y
    let mut dx = 0.0;
    let mut dy = 2.0 * rx_sq * f64::from(y);

    let mut points = Vec::new();

    // Region 1
    let mut p1 = ry_sq - rx_sq * f64::from(ry) + 0.25 * rx_sq;
    while dx < dy {
        push_quadrant_points(&mut points, center, x, y);

        x += 1;
        dx += 2.0 * ry_sq;

        if p1 < 0.0 {
            p1 += dx + ry_sq;
        } else {
            y -= 1;
            dy -= 2.0 * rx_sq;
            p1 += dx - dy + ry_sq;
        }
    }

    // Region 2
    let mut p2 = ry_sq * (f64::from(x) + 0.5).powi(2) + rx_sq * f64::from(y - 1).powi(2)
        - rx_sq * ry_sq;
    while y >= 0 {
        push_quadrant_points(&mut points, center, x, y);

        y -= 1;
        dy -= 2.0 * rx_sq;

        if p2 > 0.0 {
            p2 += rx_sq - dy;
        } else {
            x += 1;
            dx += 2.0 * ry_sq;
            p2 += dx - dy + rx_sq;
        }
    }

    points
}

/// Reflections of `(x, y)` across both axes.
fn push_quadrant_points(points: &mut Vec<Point>, center: Point, x: i32, y: i32) {
    points.push(Point::new(center.x + x, center.y + y));
    points.push(Point::new(center.x - x, center.y + y));
    points.push(Point::new(center.x + x, center.y - y));
    points.push(Point::new(center.x - x, center.y - y));
}
