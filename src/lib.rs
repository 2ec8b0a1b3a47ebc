//! Blob Arena - a mass-absorption arena game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, bot AI, eating rules, game state)
//! - `renderer`: Render-layer contract (snapshots, shading, triangles, HUD)
//! - `game`: Frame orchestrator tying input, simulation and snapshots together
//! - `settings`: Host configuration

pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameResult, Game};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// World dimensions
    pub const WORLD_W: f32 = 3000.0;
    pub const WORLD_H: f32 = 2000.0;

    /// Default viewport size
    pub const VIEWPORT_W: f32 = 960.0;
    pub const VIEWPORT_H: f32 = 540.0;

    /// Largest delta-time accepted per frame (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Directions shorter than this are treated as zero
    pub const DIRECTION_EPSILON: f32 = 1e-3;
    /// Denominator padding for pointer directions in player actions
    pub const POINTER_EPSILON: f32 = 1e-5;

    // Blob derived properties
    pub const MIN_RADIUS: f32 = 6.0;
    pub const BASE_SPEED: f32 = 260.0;
    pub const SPEED_RADIUS_FACTOR: f32 = 0.04;
    pub const MIN_SPEED: f32 = 60.0;
    /// Fraction of the previous velocity kept each steering step
    pub const VELOCITY_RETAIN: f32 = 0.85;

    // Session setup
    pub const PLAYER_START_MASS: f32 = 600.0;
    pub const PLAYER_COLOR: [u8; 3] = [120, 200, 255];
    pub const BOT_COUNT: usize = 18;
    pub const BOT_SPAWN_MARGIN: f32 = 50.0;
    pub const BOT_MIN_MASS: u32 = 200;
    pub const BOT_MAX_MASS: u32 = 900;
    pub const BOT_COLORS: [[u8; 3]; 5] = [
        [255, 140, 120],
        [255, 200, 90],
        [170, 240, 170],
        [160, 200, 255],
        [255, 120, 180],
    ];
    pub const INITIAL_FOOD: usize = 1200;

    // Food
    pub const FOOD_MIN_RADIUS: u32 = 3;
    pub const FOOD_MAX_RADIUS: u32 = 6;
    pub const FOOD_COLORS: [[u8; 3]; 5] = [
        [255, 173, 72],
        [170, 240, 170],
        [150, 200, 255],
        [255, 120, 160],
        [255, 220, 120],
    ];
    /// Mass gained per unit of food radius
    pub const FOOD_VALUE_PER_RADIUS: f32 = 0.9;
    pub const FOOD_QUOTA: usize = 1000;
    pub const FOOD_RESPAWN_BATCH: usize = 50;
    pub const FOOD_FRICTION: f32 = 0.95;
    /// Food velocity below this magnitude snaps to zero
    pub const FOOD_SETTLE_SPEED: f32 = 1.0;

    // Bot AI
    pub const THREAT_MASS_RATIO: f32 = 1.35;
    pub const THREAT_RANGE: f32 = 480.0;
    pub const PREY_RANGE: f32 = 420.0;
    pub const WANDER_REROLL_CHANCE: f64 = 0.005;

    // Eating
    /// Axis-aligned slack for the player/food pre-check
    pub const FOOD_REACH_SLACK: f32 = 12.0;
    pub const PLAYER_EAT_MASS_RATIO: f32 = 1.10;
    pub const PLAYER_EAT_RADIUS_RATIO: f32 = 1.05;
    pub const PLAYER_EAT_OVERLAP: f32 = 0.6;
    pub const PLAYER_EAT_GAIN: f32 = 0.80;
    pub const BOT_EAT_MASS_RATIO: f32 = 1.20;
    pub const BOT_EAT_RADIUS_RATIO: f32 = 1.05;
    pub const BOT_EAT_OVERLAP: f32 = 0.9;

    // Death ring
    pub const DEATH_RING_COUNT: usize = 50;
    pub const DEATH_RING_RADIUS: f32 = 140.0;
    pub const DEATH_RING_JITTER: f32 = 10.0;

    // Dash
    pub const DASH_COST: f32 = 0.05;
    pub const DASH_MIN_MASS: f32 = 200.0;
    pub const DASH_IMPULSE: f32 = 900.0;

    // Split
    pub const SPLIT_MIN_MASS: f32 = 400.0;
    pub const SPLIT_GAP: f32 = 5.0;
    pub const SPLIT_IMPULSE: f32 = 1500.0;
    pub const REMERGE_DELAY: f32 = 6.0;

    // Eject
    pub const EJECT_COOLDOWN: f32 = 0.5;
    pub const EJECT_MIN_MASS: f32 = 200.0;
    pub const EJECT_MAX_MASS: f32 = 50.0;
    pub const EJECT_FRACTION: f32 = 0.1;
    pub const EJECT_GAP: f32 = 10.0;
    pub const EJECT_SPEED: f32 = 800.0;

    // Camera
    pub const CAMERA_SMOOTHING: f32 = 0.08;
}

/// Clamp a position into the world rectangle [0, W] x [0, H]
#[inline]
pub fn clamp_to_world(pos: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.clamp(0.0, consts::WORLD_W),
        pos.y.clamp(0.0, consts::WORLD_H),
    )
}

/// Unit vector from `from` to `to`, or zero when the points (nearly) coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    let dist = delta.length();
    if dist > consts::DIRECTION_EPSILON {
        delta / dist
    } else {
        Vec2::ZERO
    }
}

/// Direction with an epsilon-padded denominator (never divides by zero)
///
/// Player actions aim with this: a pointer sitting on the player yields a
/// vector of (almost) zero length rather than a NaN.
#[inline]
pub fn direction_or_zero(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    delta / (delta.length() + consts::POINTER_EPSILON)
}

/// Manhattan distance, used by bot perception
#[inline]
pub fn manhattan(a: Vec2, b: Vec2) -> f32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_world() {
        let p = clamp_to_world(Vec2::new(-5.0, consts::WORLD_H + 10.0));
        assert_eq!(p, Vec2::new(0.0, consts::WORLD_H));

        let inside = Vec2::new(100.0, 200.0);
        assert_eq!(clamp_to_world(inside), inside);
    }

    #[test]
    fn test_direction_to_degenerate() {
        let p = Vec2::new(10.0, 10.0);
        assert_eq!(direction_to(p, p), Vec2::ZERO);
        assert_eq!(direction_to(p, p + Vec2::splat(1e-4)), Vec2::ZERO);
    }

    #[test]
    fn test_direction_to_unit() {
        let d = direction_to(Vec2::ZERO, Vec2::new(3.0, 4.0));
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!((d.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_direction_or_zero_never_nan() {
        let d = direction_or_zero(Vec2::ONE, Vec2::ONE);
        assert_eq!(d, Vec2::ZERO);
        let d = direction_or_zero(Vec2::ZERO, Vec2::new(0.0, 100.0));
        assert!((d.y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan(Vec2::new(1.0, 1.0), Vec2::new(4.0, -3.0)), 7.0);
    }
}
