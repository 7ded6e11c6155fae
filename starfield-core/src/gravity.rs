use crate::body::Body;
use crate::vector::Vector2f;
use glam::Vec2;
use log::warn;

/// Direct-summation Newtonian gravity between every pair of bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityField {
    g: f32,
    min_distance: f32,
}

impl GravityField {
    pub fn new(g: f32, min_distance: f32) -> Self {
        Self { g, min_distance }
    }

    pub fn gravitational_constant(&self) -> f32 {
        self.g
    }

    /// Force exerted on `body` by `other`, pointing from `body` toward `other`.
    ///
    /// The separation is clamped to `min_distance` so close encounters stay
    /// finite. Coincident bodies have no defined direction and contribute no
    /// force.
    pub fn pair_force(&self, body: &Body, other: &Body) -> Vector2f {
        let r = other.position - body.position;
        let dist = r.length();
        if dist == 0.0 {
            warn!(
                "coincident bodies at ({}, {}), skipping gravity for this pair",
                body.position.x, body.position.y
            );
            return Vec2::ZERO;
        }

        let direction = r / dist;
        let clamped = dist.max(self.min_distance);
        let force_mag = self.g * body.mass() * other.mass() / (clamped * clamped);
        direction * force_mag
    }

    /// Compute the acceleration of every body from the current snapshot
    pub fn accelerations(&self, bodies: &[Body]) -> Vec<Vector2f> {
        bodies
            .iter()
            .enumerate()
            .map(|(i, body)| {
                let total = bodies
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .fold(Vec2::ZERO, |acc, (_, other)| acc + self.pair_force(body, other));
                total / body.mass()
            })
            .collect()
    }

    /// Overwrite each body's acceleration with the field's value
    pub fn apply(&self, bodies: &mut [Body]) {
        let accelerations = self.accelerations(bodies);
        for (body, accel) in bodies.iter_mut().zip(accelerations) {
            body.acceleration = accel;
        }
    }
}
