//! Per-frame simulation tick
//!
//! Phases run in a fixed order: actions, player steering, bots, split-cells,
//! food drift, eating, food quota, win check, camera.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use super::{actions, ai, collision, world};

/// Input for a single tick, already in world coordinates
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer target in world space; `None` holds position
    pub pointer: Option<Vec2>,
    /// Dash toward the pointer
    pub dash: bool,
    /// Split toward the pointer
    pub split: bool,
    /// Eject a pellet toward the pointer
    pub eject: bool,
    /// Start a new session
    pub reset: bool,
    /// Stop the frame loop
    pub quit: bool,
}

/// Whether the host loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Quit,
}

/// Advance the session by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickControl {
    if input.quit {
        return TickControl::Quit;
    }

    state.events.clear();

    if input.reset {
        state.reset();
    }

    if state.phase != GamePhase::Playing {
        return TickControl::Continue;
    }

    let pointer = input.pointer.unwrap_or(state.player.pos);
    if input.dash {
        actions::dash(state, pointer);
    }
    if input.split {
        actions::split(state, pointer);
    }
    if input.eject {
        actions::eject(state, pointer);
    }

    state.time += dt;
    state.player.move_towards(pointer, dt);
    ai::update_bots(state, dt);
    world::update_split_cells(state, dt);
    world::drift_food(state, dt);

    collision::resolve_eating(state);

    world::replenish_food(state);
    world::check_victory(state);

    let focus = state.player.pos;
    state.camera.follow(focus);

    TickControl::Continue
}
