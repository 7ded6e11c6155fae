//! Circle-circle collision response and arena containment

use crate::body::Body;
use crate::config::Arena;
use crate::vector::{self, Vector2f};
use glam::Vec2;
use log::{debug, warn};

/// Outcome of one collision phase
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionReport {
    /// Per body, whether it touched at least one other body
    pub collided: Vec<bool>,
    /// Separation of the closest pair seen this phase, `None` with fewer than two bodies
    pub closest_distance: Option<f32>,
}

impl CollisionReport {
    pub fn any(&self) -> bool {
        self.collided.iter().any(|c| *c)
    }
}

/// Resolves overlaps with elastic collisions and keeps bodies inside the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResolver {
    arena: Arena,
}

impl CollisionResolver {
    pub fn new(arena: Arena) -> Self {
        Self { arena }
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Overlapping pairs `(i, j)` with `i < j`
    pub fn detect(&self, bodies: &[Body]) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                if bodies[i].overlaps(&bodies[j]) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Replace the velocity of every colliding body.
    ///
    /// Every ordered pair is evaluated against the same snapshot, so the result
    /// does not depend on which body is visited first. A body hit by several
    /// others receives the sum of the per-pair velocities.
    pub fn resolve(&self, bodies: &mut [Body]) -> CollisionReport {
        let n = bodies.len();
        let mut new_velocities = vec![Vec2::ZERO; n];
        let mut collided = vec![false; n];
        let mut replaced = vec![false; n];
        let mut closest_distance: Option<f32> = None;

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (a, b) = (&bodies[i], &bodies[j]);
                let dist = vector::distance(a.position, b.position);
                closest_distance = Some(closest_distance.map_or(dist, |d| d.min(dist)));

                if dist > a.radius() + b.radius() {
                    continue;
                }
                collided[i] = true;
                match a.collision_velocity(b) {
                    Ok(v) => {
                        debug!("body {} collided with body {} at distance {}", i, j, dist);
                        new_velocities[i] += v;
                        replaced[i] = true;
                    }
                    Err(e) => warn!("bodies {} and {} share a centre: {}", i, j, e),
                }
            }
        }

        // A body whose only contacts were degenerate keeps its velocity
        for ((body, hit), v) in bodies.iter_mut().zip(&replaced).zip(new_velocities) {
            if *hit {
                body.velocity = v;
            }
        }

        CollisionReport {
            collided,
            closest_distance,
        }
    }

    /// Point velocities back inward for bodies whose edge left the arena.
    ///
    /// Each axis is handled on its own. Positions are left untouched.
    pub fn contain(&self, bodies: &mut [Body]) {
        for body in bodies.iter_mut() {
            body.velocity = self.contained_velocity(body);
        }
    }

    fn contained_velocity(&self, body: &Body) -> Vector2f {
        let r = body.radius();
        let Vec2 { x: px, y: py } = body.position;
        let mut v = body.velocity;

        if px - r < 0.0 {
            v.x = v.x.abs();
        } else if px + r > self.arena.width {
            v.x = -v.x.abs();
        }

        if py - r < 0.0 {
            v.y = v.y.abs();
        } else if py + r > self.arena.height {
            v.y = -v.y.abs();
        }

        v
    }
}
