use crate::error::{ConfigError, DegenerateVectorError};
use crate::vector::{self, Vector2f};
use glam::Vec2;

/// Ratio between a body's radius and its mass
pub const RADIUS_PER_MASS: f32 = 1.05;

/// A massive, collidable circle in the arena
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    mass: f32,
    radius: f32,
    pub position: Vector2f,
    pub velocity: Vector2f,
    pub acceleration: Vector2f,
}

impl Body {
    /// Create a body with zero acceleration. The radius follows from the mass.
    pub fn new(mass: f32, position: Vector2f, velocity: Vector2f) -> Result<Self, ConfigError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ConfigError::NonPositiveMass { index: 0, mass });
        }
        if !position.is_finite() {
            return Err(ConfigError::NonFiniteVector { index: 0, field: "position" });
        }
        if !velocity.is_finite() {
            return Err(ConfigError::NonFiniteVector { index: 0, field: "velocity" });
        }

        Ok(Self {
            mass,
            radius: mass * RADIUS_PER_MASS,
            position,
            velocity,
            acceleration: Vec2::ZERO,
        })
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether the two circles touch or overlap
    pub fn overlaps(&self, other: &Body) -> bool {
        vector::distance(self.position, other.position) <= self.radius + other.radius
    }

    /// Velocity this body would have after an elastic collision with `other`.
    ///
    /// The velocities are split along the contact normal and its tangent. Only
    /// the normal components exchange momentum; the tangential component of
    /// this body is kept.
    pub fn collision_velocity(&self, other: &Body) -> Result<Vector2f, DegenerateVectorError> {
        let normal = vector::normalize(other.position - self.position)?;
        let tangent = vector::perpendicular(normal);

        let v1n = vector::dot(self.velocity, normal);
        let v1t = vector::dot(self.velocity, tangent);
        let v2n = vector::dot(other.velocity, normal);

        let m1 = self.mass;
        let m2 = other.mass;
        let v1n_after = ((m1 - m2) * v1n + 2.0 * m2 * v2n) / (m1 + m2);

        Ok(vector::add(
            vector::scale(normal, v1n_after),
            vector::scale(tangent, v1t),
        ))
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn momentum(&self) -> Vector2f {
        self.velocity * self.mass
    }
}
