//! 3D-to-2D projections.
//!
//! Every projection maps a [`Point3`] to an integer [`Point`]. The
//! perspective projection is the one partial map: a point on the eye
//! plane (`z + d == 0`) has no finite image and comes back as `None`.

use crate::{Point, Point3};
use serde::{Deserialize, Serialize};

/// Axis plane an orthographic projection flattens onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionPlane {
    XY,
    XZ,
    YZ,
}

/// Orthographic projection: discard one axis, round the rest.
pub fn orthographic(p: Point3, plane: ProjectionPlane) -> Point {
    let (x, y) = match plane {
        ProjectionPlane::XY => (p.x, p.y),
        ProjectionPlane::XZ => (p.x, p.z),
        ProjectionPlane::YZ => (p.y, p.z),
    };
    Point::new(x.round() as i32, y.round() as i32)
}

/// Cavalier oblique projection with a caller-chosen depth scale.
pub fn cavalier(p: Point3, angle_degrees: f64, depth_scale: f64) -> Point {
    let theta = angle_degrees.to_radians();
    let x = p.x + depth_scale * theta.cos() * p.z;
    let y = p.y + depth_scale * theta.sin() * p.z;
    Point::new(x.round() as i32, y.round() as i32)
}

/// Cabinet oblique projection: cavalier with depth foreshortened to 0.5.
pub fn cabinet(p: Point3, angle_degrees: f64) -> Point {
    cavalier(p, angle_degrees, 0.5)
}

/// Perspective projection with focal distance `d`.
///
/// `x' = x·d/(z+d)`, `y' = y·d/(z+d)`. Returns `None` when
/// `z + d == 0`: the point sits on the eye plane and its image is not
/// finite.
pub fn perspective(p: Point3, focal_distance: f64) -> Option<Point> {
    let denominator = p.z + focal_distance;
    if denominator == 0.0 {
        return None;
    }
    let x = p.x * focal_distance / denominator;
    let y = p.y * focal_distance / denominator;
    Some(Point::new(x.round() as i32, y.round() as i32))
}

/// Projection parameters as a single serializable value, so a host can
/// carry its projection panel settings as one message field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Projection {
    Orthographic {
        plane: ProjectionPlane,
    },
    Cavalier {
        angle_degrees: f64,
        depth_scale: f64,
    },
    Cabinet {
        angle_degrees: f64,
    },
    Perspective {
        focal_distance: f64,
    },
}

impl Projection {
    /// Project one point. `None` only for the perspective eye-plane
    /// degeneracy.
    pub fn project(&self, p: Point3) -> Option<Point> {
        match *self {
            Projection::Orthographic { plane } => Some(orthographic(p, plane)),
            Projection::Cavalier {
                angle_degrees,
                depth_scale,
            } => Some(cavalier(p, angle_degrees, depth_scale)),
            Projection::Cabinet { angle_degrees } => Some(cabinet(p, angle_degrees)),
            Projection::Perspective { focal_distance } => perspective(p, focal_distance),
        }
    }
}
