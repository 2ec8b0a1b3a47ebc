//! Eating rules
//!
//! Three independent checks run each tick, in order: player eats food,
//! player eats bots, bots eat the player. The player-eats and bot-eats
//! thresholds differ, leaving a band where neither side can eat the other.

use glam::Vec2;

use super::state::{Blob, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Whether the player at `player_pos` swallows a food particle
///
/// A cheap axis-aligned reject first, then a strict circle overlap test:
/// food exactly touching the player is not eaten.
#[inline]
pub fn reaches_food(player_pos: Vec2, player_radius: f32, food_pos: Vec2, food_radius: f32) -> bool {
    let d = food_pos - player_pos;
    let slack = player_radius + FOOD_REACH_SLACK;
    if d.x.abs() > slack || d.y.abs() > slack {
        return false;
    }
    let reach = player_radius + food_radius;
    d.x * d.x + d.y * d.y < reach * reach
}

/// Whether the player is big enough and close enough to eat a bot
pub fn player_can_eat(player: &Blob, bot: &Blob) -> bool {
    if player.mass <= bot.mass * PLAYER_EAT_MASS_RATIO {
        return false;
    }
    let (pr, br) = (player.radius(), bot.radius());
    if pr <= br * PLAYER_EAT_RADIUS_RATIO {
        return false;
    }
    let reach = pr - br * PLAYER_EAT_OVERLAP;
    player.pos.distance_squared(bot.pos) < reach * reach
}

/// Whether a bot is big enough and close enough to eat the player
pub fn bot_can_eat(bot: &Blob, player: &Blob) -> bool {
    if bot.mass <= player.mass * BOT_EAT_MASS_RATIO {
        return false;
    }
    let (br, pr) = (bot.radius(), player.radius());
    if br <= pr * BOT_EAT_RADIUS_RATIO {
        return false;
    }
    let reach = br - pr * BOT_EAT_OVERLAP;
    bot.pos.distance_squared(player.pos) < reach * reach
}

/// Apply all eating rules for this tick
pub fn resolve_eating(state: &mut GameState) {
    eat_food(state);
    eat_bots(state);
    check_player_eaten(state);
}

fn eat_food(state: &mut GameState) {
    let pos = state.player.pos;
    let radius = state.player.radius();
    let mut gained = 0.0;
    let events = &mut state.events;

    // Radius is fixed for the whole pass, as if every check saw the same frame
    state.food.retain(|food| {
        if reaches_food(pos, radius, food.pos, food.radius) {
            gained += food.value;
            events.push(GameEvent::FoodEaten { value: food.value });
            false
        } else {
            true
        }
    });
    state.player.mass += gained;
}

fn eat_bots(state: &mut GameState) {
    let mut rings = Vec::new();
    for bot in state.bots.iter_mut().filter(|b| b.alive) {
        if !player_can_eat(&state.player, bot) {
            continue;
        }
        let gained = bot.mass * PLAYER_EAT_GAIN;
        state.player.mass += gained;
        bot.alive = false;
        rings.push(bot.pos);
        state.events.push(GameEvent::BotEaten { bot_id: bot.id, gained });
        log::debug!("Player ate bot {} (+{:.1})", bot.id, gained);
    }
    for center in rings {
        state.spawn_food_ring(center, DEATH_RING_COUNT, DEATH_RING_RADIUS);
    }
}

fn check_player_eaten(state: &mut GameState) {
    let eater = state
        .bots
        .iter()
        .filter(|b| b.alive)
        .find(|b| bot_can_eat(b, &state.player))
        .map(|b| b.id);

    if let Some(bot_id) = eater {
        state.phase = GamePhase::Lost;
        state.events.push(GameEvent::PlayerEaten { bot_id });
        log::info!("Player eaten by bot {} at t={:.2}s", bot_id, state.time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{BlobKind, Food};

    #[test]
    fn test_food_exactly_touching_not_eaten() {
        // Player at the world corner keeps the offset arithmetic exact
        let mut state = GameState::empty_for_test(Vec2::ZERO, 600.0);
        let mut rng = rand_pcg::Pcg32::new(1, 1);
        let mut food = Food::spawn_at(Vec2::ZERO, &mut rng);
        food.radius = 5.0;
        food.pos = Vec2::new(state.player.radius() + 5.0, 0.0);
        state.food.push(food);

        resolve_eating(&mut state);
        assert_eq!(state.food.len(), 1);
        assert_eq!(state.player.mass, 600.0);
    }

    #[test]
    fn test_food_overlapping_eaten() {
        let mut state = GameState::empty_for_test(Vec2::new(500.0, 500.0), 600.0);
        let mut rng = rand_pcg::Pcg32::new(1, 1);
        let mut food = Food::spawn_at(Vec2::new(510.0, 500.0), &mut rng);
        food.radius = 5.0;
        food.value = 4.5;
        state.food.push(food);

        resolve_eating(&mut state);
        assert!(state.food.is_empty());
        assert!((state.player.mass - 604.5).abs() < 1e-3);
        assert_eq!(state.events, vec![GameEvent::FoodEaten { value: 4.5 }]);
    }

    #[test]
    fn test_reaches_food_box_reject() {
        // Slack is radius + 12: 23 is outside it, 15 overlaps
        assert!(!reaches_food(Vec2::ZERO, 10.0, Vec2::new(23.0, 0.0), 6.0));
        assert!(reaches_food(Vec2::ZERO, 10.0, Vec2::new(15.0, 0.0), 6.0));
    }

    #[test]
    fn test_equal_mass_never_eats() {
        let mut state = GameState::empty_for_test(Vec2::new(800.0, 800.0), 600.0);
        state.add_bot_for_test(Vec2::new(800.0, 800.0), 600.0);

        resolve_eating(&mut state);
        assert!(state.bots[0].alive);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.mass, 600.0);
        assert!(state.food.is_empty());
    }

    #[test]
    fn test_mass_ratio_boundaries() {
        let player = Blob::new(1, BlobKind::Player, Vec2::splat(500.0), 1100.0, [0; 3]);
        let bot = Blob::new(2, BlobKind::Bot, Vec2::splat(500.0), 1000.0, [0; 3]);
        // Exactly 1.10x is not enough
        assert!(!player_can_eat(&player, &bot));

        let big_bot = Blob::new(3, BlobKind::Bot, Vec2::splat(500.0), 1200.0, [0; 3]);
        let small_player = Blob::new(1, BlobKind::Player, Vec2::splat(500.0), 1000.0, [0; 3]);
        // Exactly 1.20x is not enough either
        assert!(!bot_can_eat(&big_bot, &small_player));
    }

    #[test]
    fn test_radius_ratio_gates_eating() {
        // 1.101x mass clears the mass ratio, but sqrt(1.101) < 1.05
        let player = Blob::new(1, BlobKind::Player, Vec2::splat(500.0), 1101.0, [0; 3]);
        let bot = Blob::new(2, BlobKind::Bot, Vec2::splat(500.0), 1000.0, [0; 3]);
        assert!(player.mass > bot.mass * PLAYER_EAT_MASS_RATIO);
        assert!(!player_can_eat(&player, &bot));

        // Both radii sit on the floor, so 1.5x mass still cannot eat
        let bot = Blob::new(3, BlobKind::Bot, Vec2::splat(500.0), 30.0, [0; 3]);
        let player = Blob::new(1, BlobKind::Player, Vec2::splat(500.0), 20.0, [0; 3]);
        assert_eq!(bot.radius(), MIN_RADIUS);
        assert_eq!(player.radius(), MIN_RADIUS);
        assert!(bot.mass > player.mass * BOT_EAT_MASS_RATIO);
        assert!(!bot_can_eat(&bot, &player));
    }

    #[test]
    fn test_hysteresis_gap() {
        // 1.15x: the player could eat the bot, but the reverse pairing could not
        let a = Blob::new(1, BlobKind::Player, Vec2::splat(500.0), 1150.0, [0; 3]);
        let b = Blob::new(2, BlobKind::Bot, Vec2::splat(500.0), 1000.0, [0; 3]);
        assert!(player_can_eat(&a, &b));
        assert!(!bot_can_eat(&a, &b));
    }

    #[test]
    fn test_player_eats_bot_drops_ring() {
        let mut state = GameState::empty_for_test(Vec2::new(1000.0, 1000.0), 2000.0);
        state.add_bot_for_test(Vec2::new(1005.0, 1000.0), 300.0);

        resolve_eating(&mut state);
        assert!(!state.bots[0].alive);
        assert!((state.player.mass - (2000.0 + 300.0 * 0.8)).abs() < 1e-3);
        assert_eq!(state.food.len(), DEATH_RING_COUNT);
        for f in &state.food {
            let d = f.pos.distance(Vec2::new(1005.0, 1000.0));
            assert!(d > DEATH_RING_RADIUS - 2.0 * DEATH_RING_JITTER);
            assert!(d < DEATH_RING_RADIUS + 2.0 * DEATH_RING_JITTER);
        }
    }

    #[test]
    fn test_bot_too_far_survives() {
        let mut state = GameState::empty_for_test(Vec2::new(1000.0, 1000.0), 2000.0);
        // Player radius ~44.7, bot radius ~17.3: reach is 44.7 - 10.4 = 34.3
        state.add_bot_for_test(Vec2::new(1040.0, 1000.0), 300.0);

        resolve_eating(&mut state);
        assert!(state.bots[0].alive);
    }

    #[test]
    fn test_bot_eats_player_loses() {
        let mut state = GameState::empty_for_test(Vec2::new(1000.0, 1000.0), 600.0);
        state.add_bot_for_test(Vec2::new(1003.0, 1000.0), 900.0);

        resolve_eating(&mut state);
        assert_eq!(state.phase, GamePhase::Lost);
        let bot_id = state.bots[0].id;
        assert!(state.events.contains(&GameEvent::PlayerEaten { bot_id }));
    }

    #[test]
    fn test_dead_bot_cannot_eat() {
        let mut state = GameState::empty_for_test(Vec2::new(1000.0, 1000.0), 600.0);
        let i = state.add_bot_for_test(Vec2::new(1000.0, 1000.0), 900.0);
        state.bots[i].alive = false;

        resolve_eating(&mut state);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_checks_do_not_short_circuit() {
        // Food eaten and player eaten in the same tick
        let mut state = GameState::empty_for_test(Vec2::new(1000.0, 1000.0), 600.0);
        let mut rng = rand_pcg::Pcg32::new(1, 1);
        let food = Food::spawn_at(Vec2::new(1002.0, 1000.0), &mut rng);
        state.food.push(food);
        state.add_bot_for_test(Vec2::new(1000.0, 1000.0), 5000.0);

        resolve_eating(&mut state);
        assert!(state.food.is_empty());
        assert!(state.player.mass > 600.0);
        assert_eq!(state.phase, GamePhase::Lost);
    }
}
