//! Simulation configuration and scenario files.
//!
//! A scenario is a YAML document with an optional `config` block and a list of
//! bodies. Anything left out of `config` keeps its default value:
//!
//! ```yaml
//! config:
//!   gravitational_constant: 6.6743
//!   arena: { width: 1280, height: 720 }
//!   toggles: { gravity: true, collision: true, border: true }
//!
//! bodies:
//!   - mass: 20.2
//!     position: [640, 260]
//!   - mass: 20.2
//!     position: [640, 460]
//!     velocity: [1, 0]
//! ```

use crate::body::Body;
use crate::error::{ConfigError, ScenarioError};
use glam::Vec2;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Gravitational constant scaled for on-screen motion
pub const DEFAULT_GRAVITATIONAL_CONSTANT: f32 = 6.6743;

/// Separation below which gravity stops growing
pub const DEFAULT_MIN_DISTANCE: f32 = 1e-3;

/// Rectangular arena with its origin in the top-left corner
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Switches for the three phases of a step
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Toggles {
    pub gravity: bool,
    pub collision: bool,
    pub border: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            gravity: true,
            collision: true,
            border: true,
        }
    }
}

impl Toggles {
    /// Every phase disabled, bodies only drift
    pub fn none() -> Self {
        Self {
            gravity: false,
            collision: false,
            border: false,
        }
    }
}

/// Constants shared by the whole simulation
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravitational_constant: f32,
    pub min_distance: f32,
    pub arena: Arena,
    pub toggles: Toggles,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            min_distance: DEFAULT_MIN_DISTANCE,
            arena: Arena::default(),
            toggles: Toggles::default(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = self.gravitational_constant;
        if !(g.is_finite() && g >= 0.0) {
            return Err(ConfigError::InvalidGravitationalConstant(g));
        }
        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return Err(ConfigError::InvalidMinDistance(self.min_distance));
        }
        let Arena { width, height } = self.arena;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidArena { width, height });
        }
        Ok(())
    }
}

/// Initial state of one body
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub mass: f32,
    pub position: [f32; 2],
    #[serde(default)]
    pub velocity: [f32; 2],
}

impl BodySpec {
    pub fn new(mass: f32, position: [f32; 2], velocity: [f32; 2]) -> Self {
        Self {
            mass,
            position,
            velocity,
        }
    }

    pub fn build(&self) -> Result<Body, ConfigError> {
        Body::new(
            self.mass,
            Vec2::from_array(self.position),
            Vec2::from_array(self.velocity),
        )
    }
}

/// Everything needed to start a run
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Scenario {
    #[serde(default)]
    pub config: SimulationConfig,
    pub bodies: Vec<BodySpec>,
}

impl Default for Scenario {
    /// Two equal stars 200 units apart, the lower one drifting right
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            bodies: vec![
                BodySpec::new(20.2, [640.0, 260.0], [0.0, 0.0]),
                BodySpec::new(20.2, [640.0, 460.0], [1.0, 0.0]),
            ],
        }
    }
}

impl Scenario {
    pub fn from_yaml(source: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_yaml::from_str(source)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let source = fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()?;
        if self.bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }
        for (i, spec) in self.bodies.iter().enumerate() {
            spec.build().map_err(|e| e.at_index(i))?;
        }
        Ok(())
    }

    /// Construct the bodies, in declaration order
    pub fn build_bodies(&self) -> Result<Vec<Body>, ConfigError> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, spec)| spec.build().map_err(|e| e.at_index(i)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_two_star_setup() {
        let scenario = Scenario::default();
        assert_eq!(scenario.bodies.len(), 2);
        assert_eq!(scenario.config.arena, Arena { width: 1280.0, height: 720.0 });
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let src = "config:\n  toggles:\n    border: false\nbodies:\n  - mass: 1.0\n    position: [1, 2]\n";
        let scenario = Scenario::from_yaml(src).unwrap();
        assert!(scenario.config.toggles.gravity);
        assert!(!scenario.config.toggles.border);
        assert_eq!(scenario.config.gravitational_constant, DEFAULT_GRAVITATIONAL_CONSTANT);
        assert_eq!(scenario.bodies[0].velocity, [0.0, 0.0]);
    }

    #[test]
    fn test_bad_mass_reports_index() {
        let src = "bodies:\n  - mass: 1.0\n    position: [0, 0]\n  - mass: -2.0\n    position: [5, 0]\n";
        match Scenario::from_yaml(src) {
            Err(ScenarioError::Config(ConfigError::NonPositiveMass { index, mass })) => {
                assert_eq!(index, 1);
                assert_eq!(mass, -2.0);
            }
            other => panic!("expected mass error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_arena_rejected() {
        let mut config = SimulationConfig::default();
        config.arena.width = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidArena { .. })));
    }

    #[test]
    fn test_empty_bodies_rejected() {
        let result = Scenario::from_yaml("bodies: []\n");
        assert!(matches!(result, Err(ScenarioError::Config(ConfigError::NoBodies))));
    }
}
