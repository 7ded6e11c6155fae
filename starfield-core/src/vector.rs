//! 2D vector helpers on top of `glam::Vec2`

use crate::error::DegenerateVectorError;
use glam::Vec2;

/// Position, velocity and acceleration type used throughout the core
pub type Vector2f = Vec2;

pub fn add(a: Vector2f, b: Vector2f) -> Vector2f {
    a + b
}

pub fn scale(v: Vector2f, s: f32) -> Vector2f {
    v * s
}

/// Euclidean norm
pub fn length(v: Vector2f) -> f32 {
    v.length()
}

pub fn dot(a: Vector2f, b: Vector2f) -> f32 {
    a.dot(b)
}

pub fn distance(a: Vector2f, b: Vector2f) -> f32 {
    a.distance(b)
}

/// `v` rotated by +90 degrees
pub fn perpendicular(v: Vector2f) -> Vector2f {
    Vec2::new(-v.y, v.x)
}

/// Unit vector in the direction of `v`.
///
/// A zero-length (or non-finite) input has no direction and is reported
/// instead of being mapped to the zero vector.
pub fn normalize(v: Vector2f) -> Result<Vector2f, DegenerateVectorError> {
    v.try_normalize().ok_or(DegenerateVectorError)
}
