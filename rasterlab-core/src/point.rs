use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Display category attached to a point.
///
/// The host maps each tag to a color when painting grid cells; no
/// algorithm branches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Interior pixel produced by a region fill.
    Fill,
    /// Outline pixel of a rasterized figure.
    Outline,
    /// User-picked marker (control point, pivot, seed).
    Control,
    /// Clip window border.
    Window,
}

/// Integer grid point with an optional display tag.
///
/// Equality and hashing use the coordinates only: two points on the
/// same grid cell are the same pixel no matter how they are displayed.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    /// Rendering hint only; never consulted by algorithmic logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, tag: None }
    }

    pub fn tagged(x: i32, y: i32, tag: Tag) -> Self {
        Self {
            x,
            y,
            tag: Some(tag),
        }
    }

    /// Same coordinates, different tag.
    pub fn with_tag(self, tag: Tag) -> Self {
        Self {
            tag: Some(tag),
            ..self
        }
    }

    /// Coordinate pair, dropping the tag.
    pub fn into_parts(self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

/// Real-valued 3D point, used only as projection input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_point_construction_and_parts() {
        let point = Point::new(10, -20);
        assert_eq!(point.x, 10);
        assert_eq!(point.y, -20);
        assert_eq!(point.tag, None);
        assert_eq!(point.into_parts(), (10, -20));
    }

    #[test]
    fn test_equality_ignores_tag() {
        let plain = Point::new(3, 4);
        let filled = Point::tagged(3, 4, Tag::Fill);
        assert_eq!(plain, filled);
    }

    #[test]
    fn test_different_coordinates_not_equal() {
        assert_ne!(Point::new(3, 4), Point::new(4, 3));
    }

    #[test]
    fn test_hash_set_dedupes_by_coordinates() {
        let mut set = HashSet::new();
        set.insert(Point::new(1, 1));
        set.insert(Point::tagged(1, 1, Tag::Fill));
        set.insert(Point::tagged(1, 1, Tag::Outline));
        set.insert(Point::new(2, 1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_with_tag_keeps_coordinates() {
        let point = Point::new(7, 8).with_tag(Tag::Control);
        assert_eq!(point.x, 7);
        assert_eq!(point.y, 8);
        assert_eq!(point.tag, Some(Tag::Control));
    }

    #[test]
    fn test_untagged_point_serializes_without_tag_field() {
        let json = serde_json::to_string(&Point::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2}"#);
    }

    #[test]
    fn test_point_serialization_roundtrip() {
        let original = Point::tagged(-5, 12, Tag::Window);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
        assert_eq!(restored.tag, Some(Tag::Window));
    }

    #[test]
    fn test_point3_construction() {
        let p = Point3::new(1.5, -2.5, 3.0);
        assert_eq!(p.x, 1.5);
        assert_eq!(p.y, -2.5);
        assert_eq!(p.z, 3.0);
    }

    #[test]
    fn test_point3_serialization_roundtrip() {
        let original = Point3::new(0.25, 100.0, -7.5);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Point3 = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
