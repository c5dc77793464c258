//! Cross-module scenarios: boundaries produced by one rasterizer feed
//! the next algorithm, the way a host chains operations.

use rasterlab_compute::{
    clip_polygon, evaluate_bezier, rasterize_polyline, rasterize_wireframe, recursive_fill,
    scanline_fill, CUBOID_EDGES,
};
use rasterlab_core::{orthographic, ClipWindow, Point, Point3, Projection, ProjectionPlane};
use std::collections::HashSet;

fn coverage(points: Vec<Point>) -> HashSet<Point> {
    points.into_iter().collect()
}

#[test]
fn fill_variants_agree_on_rasterized_square() {
    // The canonical scenario: a 10x10 square outline encloses exactly
    // 81 interior cells
    let boundary = rasterize_polyline(&[
        Point::new(0, 0),
        Point::new(10, 0),
        Point::new(10, 10),
        Point::new(0, 10),
        Point::new(0, 0),
    ]);
    let seed = Point::new(5, 5);

    let recursive = coverage(recursive_fill(seed, &boundary));
    let scanline = coverage(scanline_fill(seed, &boundary));

    assert_eq!(recursive.len(), 81);
    assert_eq!(recursive, scanline);
    for p in &recursive {
        assert!(p.x >= 1 && p.x <= 9 && p.y >= 1 && p.y <= 9);
    }
}

#[test]
fn fill_respects_bezier_closed_by_polyline() {
    // Close a flat Bezier arch with a baseline, then fill under it
    let control = [Point::new(0, 0), Point::new(10, 14), Point::new(20, 0)];
    let mut outline = evaluate_bezier(&control, 40);
    outline.extend(rasterize_polyline(&[
        Point::new(20, 0),
        Point::new(0, 0),
    ]));

    let filled = coverage(scanline_fill(Point::new(10, 3), &outline));
    assert!(!filled.is_empty());
    assert!(filled.contains(&Point::new(10, 3)));
    // Nothing leaks below the baseline
    assert!(filled.iter().all(|p| p.y > 0));
}

#[test]
fn clipped_polygon_rasterizes_inside_window() {
    let window = ClipWindow::new(Point::new(0, 0), Point::new(20, 20));
    let polygon = [
        Point::new(-10, 5),
        Point::new(10, -10),
        Point::new(30, 5),
        Point::new(10, 30),
    ];

    let mut clipped = clip_polygon(&polygon, &window);
    assert!(!clipped.is_empty());
    for p in &clipped {
        assert!(window.contains(*p));
    }

    // Outline the clipped region the way the host displays it
    clipped.push(clipped[0]);
    let outline = rasterize_polyline(&clipped);
    for p in outline {
        assert!(window.contains(p), "outline pixel {:?} left the window", p);
    }
}

#[test]
fn projected_cuboid_wireframe_covers_both_faces() {
    // Unit cube scaled to 10, pushed back in z, cavalier-projected
    let cube = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(10.0, 0.0, 0.0),
        Point3::new(10.0, 10.0, 0.0),
        Point3::new(0.0, 10.0, 0.0),
        Point3::new(0.0, 0.0, 10.0),
        Point3::new(10.0, 0.0, 10.0),
        Point3::new(10.0, 10.0, 10.0),
        Point3::new(0.0, 10.0, 10.0),
    ];
    let projection = Projection::Cavalier {
        angle_degrees: 45.0,
        depth_scale: 0.5,
    };

    let vertices: Vec<Point> = cube
        .iter()
        .map(|v| projection.project(*v).expect("oblique projection is total"))
        .collect();
    let wireframe = coverage(rasterize_wireframe(&vertices, &CUBOID_EDGES));

    // Front face corners project unchanged
    assert!(wireframe.contains(&Point::new(0, 0)));
    assert!(wireframe.contains(&Point::new(10, 10)));
    // Back face corners are sheared by 0.5·cos45·10 = ~3.5 cells
    assert!(wireframe.contains(&vertices[4]));
    assert!(wireframe.contains(&vertices[6]));
    // Each edge contributes at least its endpoints
    assert!(wireframe.len() > 12);
}

#[test]
fn orthographic_wireframe_of_flat_cube_is_a_square() {
    let cube = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(8.0, 0.0, 0.0),
        Point3::new(8.0, 8.0, 0.0),
        Point3::new(0.0, 8.0, 0.0),
        Point3::new(0.0, 0.0, 8.0),
        Point3::new(8.0, 0.0, 8.0),
        Point3::new(8.0, 8.0, 8.0),
        Point3::new(0.0, 8.0, 8.0),
    ];
    let vertices: Vec<Point> = cube
        .iter()
        .map(|v| orthographic(*v, ProjectionPlane::XY))
        .collect();

    let wireframe = coverage(rasterize_wireframe(&vertices, &CUBOID_EDGES));
    // Depth is discarded: only the 8x8 square outline remains
    assert!(wireframe.iter().all(|p| {
        p.x == 0 || p.x == 8 || p.y == 0 || p.y == 8
    }));
}
