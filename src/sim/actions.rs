//! Player actions: dash, split and eject
//!
//! Every action aims at the pointer target. Unmet preconditions make the
//! action a silent no-op.

use glam::Vec2;

use super::state::{Blob, BlobKind, Food, GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::direction_or_zero;

/// Spend 5% of the player's mass for a burst of speed toward `pointer`
///
/// Returns whether the dash happened.
pub fn dash(state: &mut GameState, pointer: Vec2) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    let cost = state.player.mass * DASH_COST;
    if state.player.mass - cost < DASH_MIN_MASS {
        log::debug!("Dash skipped: mass {:.1} too low", state.player.mass);
        return false;
    }
    state.player.mass -= cost;
    state.player.vel += direction_or_zero(state.player.pos, pointer) * DASH_IMPULSE;
    state.events.push(GameEvent::Dashed { cost });
    true
}

/// Split the player in two, launching the new half toward `pointer`
///
/// Only one split-cell may exist at a time. Returns whether a cell was spawned.
pub fn split(state: &mut GameState, pointer: Vec2) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    if !state.split_cells.is_empty() || state.player.mass < SPLIT_MIN_MASS {
        log::debug!("Split skipped");
        return false;
    }

    let half = state.player.mass / 2.0;
    state.player.mass -= half;

    let dir = direction_or_zero(state.player.pos, pointer);
    let id = state.next_entity_id();
    let player = &state.player;
    let mut cell = Blob::new(
        id,
        BlobKind::SplitCell,
        player.pos + dir * (player.radius() + SPLIT_GAP),
        half,
        player.color,
    );
    cell.vel = dir * SPLIT_IMPULSE;
    cell.parent = Some(player.id);
    cell.remerge_at = Some(state.time + REMERGE_DELAY);

    log::info!("Player split: {:.1} + {:.1}", state.player.mass, half);
    state.split_cells.push(cell);
    state.events.push(GameEvent::Split { cell_id: id, mass: half });
    debug_assert!(state.split_cells.len() <= 1);
    true
}

/// Shed a little mass as a food pellet flying toward `pointer`
///
/// Rate limited to once per `EJECT_COOLDOWN` seconds of simulation time.
/// Returns whether a pellet was ejected.
pub fn eject(state: &mut GameState, pointer: Vec2) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    if state
        .last_eject
        .is_some_and(|last| state.time - last < EJECT_COOLDOWN)
    {
        return false;
    }
    if state.player.mass < EJECT_MIN_MASS {
        return false;
    }

    let mass = EJECT_MAX_MASS.min(state.player.mass * EJECT_FRACTION);
    state.player.mass -= mass;

    let dir = direction_or_zero(state.player.pos, pointer);
    let pos = state.player.pos + dir * (state.player.radius() + EJECT_GAP);
    let mut food = Food::spawn_at(pos, &mut state.rng);
    food.vel = dir * EJECT_SPEED;
    food.value = mass;
    state.food.push(food);

    state.last_eject = Some(state.time);
    state.events.push(GameEvent::Ejected { mass });
    true
}
