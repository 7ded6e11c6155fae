pub mod body;
pub mod collision;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gravity;
pub mod integrator;
pub mod runtime;
pub mod vector;
pub mod world;

pub use body::Body;
pub use collision::{CollisionReport, CollisionResolver};
pub use config::{Arena, BodySpec, Scenario, SimulationConfig, Toggles};
pub use error::{ConfigError, DegenerateVectorError, ScenarioError};
pub use gravity::GravityField;
pub use runtime::{
    build_simulation_context, build_simulation_context_from_source, get_body_states,
    run_scenario, step_simulation, SimulationContext, SimulationResult,
};
pub use world::{BodyState, StepReport, World};
