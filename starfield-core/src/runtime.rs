use crate::config::Scenario;
use crate::error::ScenarioError;
use crate::world::{BodyState, World};

/// A world together with its step budget
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub world: World,
    pub current_step: u64,
    pub max_steps: u64,
    /// Separation of the closest pair in the latest step
    pub closest_distance: Option<f32>,
}

/// Final state after running a scenario
#[derive(Debug)]
pub struct SimulationResult {
    pub steps: u64,
    pub bodies: Vec<BodyState>,
    /// Number of steps in which at least one body collided
    pub collisions: u64,
}

/// Build a simulation context from a scenario
pub fn build_simulation_context(
    scenario: &Scenario,
    max_steps: u64,
) -> Result<SimulationContext, ScenarioError> {
    let world = World::from_scenario(scenario)?;
    Ok(SimulationContext {
        world,
        current_step: 0,
        max_steps,
        closest_distance: None,
    })
}

/// Build a simulation context from YAML scenario source
pub fn build_simulation_context_from_source(
    source: &str,
    max_steps: u64,
) -> Result<SimulationContext, ScenarioError> {
    let scenario = Scenario::from_yaml(source)?;
    build_simulation_context(&scenario, max_steps)
}

/// Step the simulation once. Returns true once the step budget is used up.
pub fn step_simulation(ctx: &mut SimulationContext) -> bool {
    if ctx.current_step >= ctx.max_steps {
        return true;
    }

    let report = ctx.world.step();
    ctx.closest_distance = report.closest_distance;
    ctx.current_step += 1;

    ctx.current_step >= ctx.max_steps
}

/// Snapshot of every body for drawing
pub fn get_body_states(ctx: &SimulationContext) -> Vec<BodyState> {
    ctx.world.body_states()
}

/// Run a scenario for a fixed number of steps
pub fn run_scenario(scenario: &Scenario, steps: u64) -> Result<SimulationResult, ScenarioError> {
    let mut world = World::from_scenario(scenario)?;
    let mut collisions = 0;

    for _ in 0..steps {
        if world.step().collided.iter().any(|c| *c) {
            collisions += 1;
        }
    }

    Ok(SimulationResult {
        steps,
        bodies: world.body_states(),
        collisions,
    })
}
