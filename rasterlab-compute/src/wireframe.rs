use crate::line::rasterize_line;
use rasterlab_core::Point;

/// Edge table of a cuboid whose 8 vertices are ordered as a bottom
/// ring (0-3) followed by a top ring (4-7).
pub const CUBOID_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0), // bottom ring
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4), // top ring
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7), // verticals
];

/// Rasterize a wireframe from projected vertices.
///
/// Each edge indexes into `vertices` and is drawn with the line
/// rasterizer; shared vertices are emitted once per incident edge.
/// Edges referencing a missing vertex are skipped.
pub fn rasterize_wireframe(vertices: &[Point], edges: &[(usize, usize)]) -> Vec<Point> {
    let mut out = Vec::new();

    for &(i, j) in edges {
        let (Some(&a), Some(&b)) = (vertices.get(i), vertices.get(j)) else {
            continue;
        };
        out.extend(rasterize_line(a, b));
    }

    out
}
