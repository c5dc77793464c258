//! Rasterization algorithms over integer point sets.
//!
//! Every function is pure and total: inputs below an algorithm's
//! minimum arity produce an empty point set instead of panicking, and
//! no call mutates its inputs or shares state with another.

pub mod clip;
pub mod conic;
pub mod curve;
pub mod fill;
pub mod line;
pub mod wireframe;

pub use clip::{clip_line, clip_polygon};
pub use conic::{rasterize_circle, rasterize_ellipse};
pub use curve::evaluate_bezier;
pub use fill::{recursive_fill, scanline_fill};
pub use line::{rasterize_line, rasterize_polyline};
pub use wireframe::{rasterize_wireframe, CUBOID_EDGES};
