//! Region fill over a sparse boundary set.
//!
//! The boundary is a collection of pixel coordinates, not a bitmap:
//! both fills key their lookups on `(x, y)` pairs so the grid stays
//! unbounded. Neither fill limits itself beyond the visited set:
//! seeding an open boundary runs until memory or the call stack gives
//! out, and keeping the region closed is the caller's contract.

use rasterlab_core::{Point, Tag};
use std::collections::HashSet;

/// Recursive 4-connected flood fill from `seed`.
///
/// A pixel is filled iff it is neither boundary nor already visited;
/// neighbors are explored east, west, south, north. Every filled pixel
/// carries [`Tag::Fill`]. Prefer [`scanline_fill`] for large regions:
/// this variant consumes one call-stack frame per pixel.
pub fn recursive_fill(seed: Point, boundary: &[Point]) -> Vec<Point> {
    let boundary: HashSet<(i32, i32)> = boundary.iter().map(|p| (p.x, p.y)).collect();
    let mut visited = HashSet::new();
    let mut filled = Vec::new();

    fill_from(seed.x, seed.y, &boundary, &mut visited, &mut filled);

    filled
}

fn fill_from(
    x: i32,
    y: i32,
    boundary: &HashSet<(i32, i32)>,
    visited: &mut HashSet<(i32, i32)>,
    filled: &mut Vec<Point>,
) {
    if visited.contains(&(x, y)) || boundary.contains(&(x, y)) {
        return;
    }

    visited.insert((x, y));
    filled.push(Point::tagged(x, y, Tag::Fill));

    fill_from(x + 1, y, boundary, visited, filled); // east
    fill_from(x - 1, y, boundary, visited, filled); // west
    fill_from(x, y + 1, boundary, visited, filled); // south
    fill_from(x, y - 1, boundary, visited, filled); // north
}

/// Span-based flood fill with an explicit work stack.
///
/// Pops a pixel, walks left and right to the span walls on its row,
/// fills the whole inclusive span, and seeds the rows above and below
/// from every span pixel. One stack operation covers a full horizontal
/// run, against one recursive call per pixel in [`recursive_fill`];
/// coverage is identical for a closed boundary and interior seed.
pub fn scanline_fill(seed: Point, boundary: &[Point]) -> Vec<Point> {
    let boundary: HashSet<(i32, i32)> = boundary.iter().map(|p| (p.x, p.y)).collect();
    let mut filled_set: HashSet<(i32, i32)> = HashSet::new();
    let mut filled = Vec::new();
    let mut stack = vec![(seed.x, seed.y)];

    while let Some((x, y)) = stack.pop() {
        if boundary.contains(&(x, y)) || filled_set.contains(&(x, y)) {
            continue;
        }

        // Walk to the span walls on this row
        let mut x_left = x;
        while !boundary.contains(&(x_left, y)) && !filled_set.contains(&(x_left, y)) {
            x_left -= 1;
        }
        x_left += 1;

        let mut x_right = x;
        while !boundary.contains(&(x_right, y)) && !filled_set.contains(&(x_right, y)) {
            x_right += 1;
        }
        x_right -= 1;

        for xi in x_left..=x_right {
            if filled_set.insert((xi, y)) {
                filled.push(Point::tagged(xi, y, Tag::Fill));

                if !boundary.contains(&(xi, y - 1)) && !filled_set.contains(&(xi, y - 1)) {
                    stack.push((xi, y - 1));
                }
                if !boundary.contains(&(xi, y + 1)) && !filled_set.contains(&(xi, y + 1)) {
                    stack.push((xi, y + 1));
                }
            }
        }
    }

    filled
}
