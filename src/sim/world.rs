//! World maintenance between motion and rendering
//!
//! Split-cell homing and remerge, food drift, food quota and the win check.

use super::state::{Food, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Pull split-cells toward the player and fold them back in when due
pub fn update_split_cells(state: &mut GameState, dt: f32) {
    let home = state.player.pos;
    for cell in &mut state.split_cells {
        cell.move_towards(home, dt);
    }

    let now = state.time;
    let mut merged = Vec::new();
    state.split_cells.retain(|cell| {
        let due = cell.remerge_at.is_some_and(|at| now >= at);
        if due {
            merged.push((cell.id, cell.mass));
        }
        !due
    });

    for (cell_id, mass) in merged {
        state.player.mass += mass;
        state.events.push(GameEvent::Remerged { cell_id, mass });
        log::info!("Split-cell {} remerged (+{:.1})", cell_id, mass);
    }
}

/// Advance every food particle; resting food is left untouched
pub fn drift_food(state: &mut GameState, dt: f32) {
    for food in &mut state.food {
        food.drift(dt);
    }
}

/// Add one batch of food when the population is under quota
pub fn replenish_food(state: &mut GameState) {
    if state.food.len() >= FOOD_QUOTA {
        return;
    }
    for _ in 0..FOOD_RESPAWN_BATCH {
        let food = Food::random(&mut state.rng);
        state.food.push(food);
    }
    state.events.push(GameEvent::FoodRespawned {
        count: FOOD_RESPAWN_BATCH,
    });
    log::debug!("Food replenished to {}", state.food.len());
}

/// Declare victory once no bot is left alive
pub fn check_victory(state: &mut GameState) {
    if state.phase == GamePhase::Playing && state.bots.iter().all(|b| !b.alive) {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won);
        log::info!("All bots eaten at t={:.2}s, player mass {:.0}", state.time, state.player.mass);
    }
}
