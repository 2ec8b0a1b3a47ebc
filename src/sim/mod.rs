//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Delta-time comes from the caller, never from a clock
//! - Randomness only from the session-owned seeded RNG
//! - Stable iteration order (bots keep spawn order)
//! - No rendering or platform dependencies

pub mod actions;
pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;
pub mod world;

pub use actions::{dash, eject, split};
pub use ai::{Steering, decide, update_bots};
pub use collision::{bot_can_eat, player_can_eat, reaches_food, resolve_eating};
pub use state::{
    Blob, BlobKind, Camera, Food, GameEvent, GamePhase, GameState, radius_for_mass, speed_for_radius,
};
pub use tick::{TickControl, TickInput, tick};
