use crate::body::Body;
use crate::collision::CollisionResolver;
use crate::config::{Scenario, SimulationConfig, Toggles};
use crate::error::ConfigError;
use crate::gravity::GravityField;
use crate::integrator;
use crate::vector::Vector2f;
use glam::Vec2;
use log::info;

/// What a renderer needs to draw one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub index: usize,
    pub position: Vector2f,
    pub radius: f32,
    pub velocity: Vector2f,
    pub collided: bool,
}

/// Summary of one completed step
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub step: u64,
    pub collided: Vec<bool>,
    pub closest_distance: Option<f32>,
}

/// The bodies and the physics acting on them
#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<Body>,
    gravity: GravityField,
    resolver: CollisionResolver,
    toggles: Toggles,
    steps_taken: u64,
    last_collided: Vec<bool>,
}

impl World {
    pub fn new(config: SimulationConfig, bodies: Vec<Body>) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "world with {} bodies, G={}, arena {}x{}",
            bodies.len(),
            config.gravitational_constant,
            config.arena.width,
            config.arena.height
        );

        let n = bodies.len();
        Ok(Self {
            bodies,
            gravity: GravityField::new(config.gravitational_constant, config.min_distance),
            resolver: CollisionResolver::new(config.arena),
            toggles: config.toggles,
            steps_taken: 0,
            last_collided: vec![false; n],
        })
    }

    pub fn from_scenario(scenario: &Scenario) -> Result<Self, ConfigError> {
        scenario.validate()?;
        Self::new(scenario.config, scenario.build_bodies()?)
    }

    /// Run gravity, collisions and containment, then integrate
    pub fn step(&mut self) -> StepReport {
        if self.toggles.gravity {
            self.gravity.apply(&mut self.bodies);
        } else {
            for body in &mut self.bodies {
                body.acceleration = Vec2::ZERO;
            }
        }

        let (collided, closest_distance) = if self.toggles.collision {
            let report = self.resolver.resolve(&mut self.bodies);
            (report.collided, report.closest_distance)
        } else {
            (vec![false; self.bodies.len()], None)
        };

        if self.toggles.border {
            self.resolver.contain(&mut self.bodies);
        }

        integrator::step(&mut self.bodies);

        self.steps_taken += 1;
        self.last_collided.clone_from(&collided);
        StepReport {
            step: self.steps_taken,
            collided,
            closest_distance,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn toggles(&self) -> Toggles {
        self.toggles
    }

    pub fn set_toggles(&mut self, toggles: Toggles) {
        self.toggles = toggles;
    }

    pub fn toggles_mut(&mut self) -> &mut Toggles {
        &mut self.toggles
    }

    pub fn gravity(&self) -> &GravityField {
        &self.gravity
    }

    pub fn resolver(&self) -> &CollisionResolver {
        &self.resolver
    }

    pub fn body_states(&self) -> Vec<BodyState> {
        self.bodies
            .iter()
            .zip(&self.last_collided)
            .enumerate()
            .map(|(index, (body, collided))| BodyState {
                index,
                position: body.position,
                radius: body.radius(),
                velocity: body.velocity,
                collided: *collided,
            })
            .collect()
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn total_momentum(&self) -> Vector2f {
        self.bodies.iter().map(Body::momentum).fold(Vec2::ZERO, |a, b| a + b)
    }
}
