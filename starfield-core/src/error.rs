//! Error types for the Starfield core
//!
//! Geometry errors are raised by the vector helpers and absorbed by the
//! physics phases. Configuration errors are raised before the first step.

use thiserror::Error;

/// Normalising a vector of zero length
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("cannot normalize a zero-length vector")]
pub struct DegenerateVectorError;

/// Invalid input supplied when building bodies or a world
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("body {index}: mass must be positive and finite, got {mass}")]
    NonPositiveMass { index: usize, mass: f32 },

    #[error("body {index}: {field} must be finite")]
    NonFiniteVector { index: usize, field: &'static str },

    #[error("arena must have positive size, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },

    #[error("gravitational constant must be finite and non-negative, got {0}")]
    InvalidGravitationalConstant(f32),

    #[error("minimum distance must be positive, got {0}")]
    InvalidMinDistance(f32),

    #[error("scenario defines no bodies")]
    NoBodies,
}

impl ConfigError {
    /// Attach the position of the offending body in its collection
    pub(crate) fn at_index(self, index: usize) -> Self {
        match self {
            ConfigError::NonPositiveMass { mass, .. } => ConfigError::NonPositiveMass { index, mass },
            ConfigError::NonFiniteVector { field, .. } => ConfigError::NonFiniteVector { index, field },
            other => other,
        }
    }
}

/// Failure while loading a scenario file
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid scenario: {0}")]
    Config(#[from] ConfigError),
}
