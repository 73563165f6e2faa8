//! Source-image pixel space: origin at the top-left corner, y grows downwards.

use serde::{Deserialize, Serialize};

/// Unit tag for coordinates measured in source-image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ImagePx;

pub type Point = euclid::Point2D<f64, ImagePx>;
pub type Vector = euclid::Vector2D<f64, ImagePx>;
pub type Rect = euclid::Rect<f64, ImagePx>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    euclid::rect(x, y, width, height)
}

/// `a` at `t = 0`, `b` at `t = 1`.
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    a + (b - a) * t
}

/// Unit normal to the left of `v` in screen terms: `(-v.y, v.x) / |v|`. `None` for a zero vector.
pub fn unit_normal(v: Vector) -> Option<Vector> {
    let len = v.length();
    (len > 0.0).then(|| euclid::vec2(-v.y / len, v.x / len))
}

/// Signed distance of `p` from the line through `a` and `b`, positive on the
/// [`unit_normal`] side. Zero when `a == b`.
pub fn offset_from_line(a: Point, b: Point, p: Point) -> f64 {
    unit_normal(b - a).map_or(0.0, |n| (p - a).dot(n))
}
