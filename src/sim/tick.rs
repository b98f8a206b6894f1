//! Fixed-step simulation tick
//!
//! One call advances the whole world by exactly one step: physics, then the
//! camera, then the obstacle generator.

use super::physics::{PhysicsEvents, resolve_player};
use super::state::SimulationState;
use crate::input::Actions;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Actions held when the tick started
    pub actions: Actions,
}

impl From<Actions> for TickInput {
    fn from(actions: Actions) -> Self {
        Self { actions }
    }
}

/// Summary of one tick, for hosts and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub physics: PhysicsEvents,
    /// An obstacle was spawned this tick
    pub spawned: bool,
}

/// Advance the simulation by one step
pub fn tick(state: &mut SimulationState, input: &TickInput) -> TickReport {
    state.time_ticks += 1;

    let physics = resolve_player(
        &mut state.player,
        &state.obstacles,
        state.camera.x,
        input.actions,
        &state.config,
    );

    state.camera.follow(&state.player);

    let spawned = state
        .spawner
        .advance(&mut state.obstacles, state.camera.x, &state.config);

    TickReport { physics, spawned }
}
