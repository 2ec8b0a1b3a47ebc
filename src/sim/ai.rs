//! Bot decision making
//!
//! Each living bot looks at every other living blob (bots and the player),
//! flees the nearest clearly bigger one, otherwise chases the nearest clearly
//! smaller one, otherwise wanders toward a persistent random point.

use glam::Vec2;
use rand::Rng;

use super::state::{Blob, GameState, random_world_point};
use crate::consts::*;
use crate::manhattan;

/// What a bot decided to do this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steering {
    /// Run away from the blob at this position
    Flee { threat: Vec2 },
    /// Run at the blob at this position
    Chase { prey: Vec2 },
    /// Nothing interesting nearby
    Wander,
}

impl Steering {
    /// Target point for `Flee`/`Chase`, mirrored away from threats
    pub fn target(self, from: Vec2) -> Option<Vec2> {
        match self {
            Steering::Flee { threat } => Some(from - (threat - from)),
            Steering::Chase { prey } => Some(prey),
            Steering::Wander => None,
        }
    }
}

/// Classify the surroundings of `bot` against the given blobs
///
/// `others` may include `bot` itself (matched by id) and dead blobs; both are skipped.
pub fn decide<'a>(bot: &Blob, others: impl IntoIterator<Item = &'a Blob>) -> Steering {
    let mut threat: Option<(f32, Vec2)> = None;
    let mut prey: Option<(f32, Vec2)> = None;

    for other in others {
        if other.id == bot.id || !other.alive {
            continue;
        }
        let d = manhattan(other.pos, bot.pos);
        if other.mass > bot.mass * THREAT_MASS_RATIO && d < THREAT_RANGE {
            if threat.is_none_or(|(best, _)| d < best) {
                threat = Some((d, other.pos));
            }
        } else if other.mass * THREAT_MASS_RATIO < bot.mass
            && d < PREY_RANGE
            && prey.is_none_or(|(best, _)| d < best)
        {
            prey = Some((d, other.pos));
        }
    }

    match (threat, prey) {
        (Some((_, threat)), _) => Steering::Flee { threat },
        (None, Some((_, prey))) => Steering::Chase { prey },
        (None, None) => Steering::Wander,
    }
}

/// Move every living bot for one tick
///
/// Bots are processed in order and see the already-updated positions of the
/// bots before them.
pub fn update_bots(state: &mut GameState, dt: f32) {
    for i in 0..state.bots.len() {
        if !state.bots[i].alive {
            continue;
        }

        let steering = decide(
            &state.bots[i],
            state.bots.iter().chain(std::iter::once(&state.player)),
        );

        let bot = &mut state.bots[i];
        let target = match steering.target(bot.pos) {
            Some(target) => target,
            None => {
                let reroll = bot.wander_target.is_none() || state.rng.random_bool(WANDER_REROLL_CHANCE);
                if reroll {
                    bot.wander_target = Some(random_world_point(&mut state.rng));
                }
                bot.wander_target.unwrap_or(bot.pos)
            }
        };
        bot.move_towards(target, dt);
    }
}
