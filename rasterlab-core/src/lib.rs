pub mod point;
pub mod polygon;
pub mod projections;
pub mod transforms;
pub mod window;

pub use point::{Point, Point3, Tag};
pub use polygon::{point_in_polygon, point_on_segment};
pub use projections::{
    cabinet, cavalier, orthographic, perspective, Projection, ProjectionPlane,
};
pub use transforms::{rotate, scale, translate, ScaleFactors};
pub use window::ClipWindow;
