//! Game state and core simulation types
//!
//! Everything the simulation owns lives here: the player, bots, split-cells,
//! food, the camera and the session RNG.

use glam::Vec2;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{clamp_to_world, direction_to};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// The player was eaten
    Lost,
    /// Every bot is dead
    Won,
}

/// Role of a blob in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlobKind {
    Player,
    Bot,
    /// Temporary half of the player, remerges after a timer
    SplitCell,
}

/// Radius of a blob with the given mass (area ~ mass)
#[inline]
pub fn radius_for_mass(mass: f32) -> f32 {
    mass.max(0.0).sqrt().max(MIN_RADIUS)
}

/// Steering speed for a blob of the given radius; bigger is slower
#[inline]
pub fn speed_for_radius(radius: f32) -> f32 {
    (BASE_SPEED / (1.0 + SPEED_RADIUS_FACTOR * radius)).max(MIN_SPEED)
}

/// A mass-bearing circle: the player, a bot or a split-cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blob {
    pub id: u32,
    pub kind: BlobKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
    pub color: [u8; 3],
    pub alive: bool,
    /// Persistent wander destination (bots only)
    #[serde(default)]
    pub wander_target: Option<Vec2>,
    /// Id of the blob a split-cell remerges into
    #[serde(default)]
    pub parent: Option<u32>,
    /// Absolute simulation time of the remerge
    #[serde(default)]
    pub remerge_at: Option<f32>,
}

impl Blob {
    pub fn new(id: u32, kind: BlobKind, pos: Vec2, mass: f32, color: [u8; 3]) -> Self {
        debug_assert!(mass > 0.0, "blob mass must be positive");
        Self {
            id,
            kind,
            pos,
            vel: Vec2::ZERO,
            mass,
            color,
            alive: true,
            wander_target: None,
            parent: None,
            remerge_at: None,
        }
    }

    pub fn radius(&self) -> f32 {
        radius_for_mass(self.mass)
    }

    pub fn speed(&self) -> f32 {
        speed_for_radius(self.radius())
    }

    /// Steer toward a target with light inertia, then clamp into the world
    ///
    /// Shared by the player, bots and split-cells; only the target differs.
    pub fn move_towards(&mut self, target: Vec2, dt: f32) {
        let desired = direction_to(self.pos, target) * self.speed();
        self.vel = self.vel * VELOCITY_RETAIN + desired * (1.0 - VELOCITY_RETAIN);
        self.pos = clamp_to_world(self.pos + self.vel * dt);
    }
}

/// A food particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub pos: Vec2,
    /// Zero unless the food was ejected; decays by friction
    pub vel: Vec2,
    pub radius: f32,
    /// Mass credited to whoever eats it
    ///
    /// Radius x 0.9 for spawned food. Ejected pellets instead carry exactly
    /// the mass the player shed, so eject conserves total mass.
    pub value: f32,
    pub color: [u8; 3],
}

impl Food {
    /// Food of a random size class and color at a fixed position
    pub fn spawn_at(pos: Vec2, rng: &mut impl Rng) -> Self {
        let radius = rng.random_range(FOOD_MIN_RADIUS..=FOOD_MAX_RADIUS) as f32;
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            value: radius * FOOD_VALUE_PER_RADIUS,
            color: FOOD_COLORS[rng.random_range(0..FOOD_COLORS.len())],
        }
    }

    /// Food at a uniformly random world position
    pub fn random(rng: &mut impl Rng) -> Self {
        let pos = random_world_point(rng);
        Self::spawn_at(pos, rng)
    }

    /// Integrate velocity, apply friction and keep inside the world
    pub fn drift(&mut self, dt: f32) {
        if self.vel == Vec2::ZERO {
            return;
        }
        self.pos = clamp_to_world(self.pos + self.vel * dt);
        self.vel *= FOOD_FRICTION;
        if self.vel.length() < FOOD_SETTLE_SPEED {
            self.vel = Vec2::ZERO;
        }
    }
}

/// Uniformly random point in the world rectangle
pub fn random_world_point(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..=WORLD_W),
        rng.random_range(0.0..=WORLD_H),
    )
}

/// Viewport offset into the world
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Camera {
    /// Top-left corner of the viewport in world coordinates
    pub pos: Vec2,
    /// Viewport size in world units
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            viewport,
        }
    }

    /// Smooth toward centering `focus`, then keep the view inside the world
    pub fn follow(&mut self, focus: Vec2) {
        let target = focus - self.viewport * 0.5;
        self.pos += (target - self.pos) * CAMERA_SMOOTHING;
        self.pos = Vec2::new(
            self.pos.x.clamp(0.0, (WORLD_W - self.viewport.x).max(0.0)),
            self.pos.y.clamp(0.0, (WORLD_H - self.viewport.y).max(0.0)),
        );
    }

    /// Convert a screen position (pixels from the viewport corner) to world space
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.pos + screen
    }

    /// Whether a circle overlaps the viewport grown by `margin`
    pub fn sees(&self, pos: Vec2, radius: f32, margin: f32) -> bool {
        let rel = pos - self.pos;
        let pad = radius + margin;
        rel.x >= -pad && rel.y >= -pad && rel.x <= self.viewport.x + pad && rel.y <= self.viewport.y + pad
    }
}

/// Notable things that happened during a tick, for the host and for tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    FoodEaten { value: f32 },
    BotEaten { bot_id: u32, gained: f32 },
    PlayerEaten { bot_id: u32 },
    Dashed { cost: f32 },
    Split { cell_id: u32, mass: f32 },
    Remerged { cell_id: u32, mass: f32 },
    Ejected { mass: f32 },
    FoodRespawned { count: usize },
    Won,
    Reset { seed: u64 },
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed this session was built from
    pub seed: u64,
    /// Session-scoped RNG; re-seeded on reset
    #[serde(skip, default = "default_rng")]
    pub(crate) rng: Pcg32,
    /// Elapsed simulation time in seconds
    pub time: f32,
    pub phase: GamePhase,
    pub player: Blob,
    /// Bots in spawn order (dead bots stay, flagged, to keep order stable)
    pub bots: Vec<Blob>,
    pub food: Vec<Food>,
    /// Active split-cells of the player (at most one)
    pub split_cells: Vec<Blob>,
    pub camera: Camera,
    /// Simulation time of the last eject, if any
    pub last_eject: Option<f32>,
    /// Events raised since the start of the current tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Build a fresh session from a seed
    pub fn new(seed: u64, viewport: Vec2) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut next_id = 1;

        let player = Blob::new(
            next_id,
            BlobKind::Player,
            Vec2::new(WORLD_W / 2.0, WORLD_H / 2.0),
            PLAYER_START_MASS,
            PLAYER_COLOR,
        );
        next_id += 1;

        let mut bots = Vec::with_capacity(BOT_COUNT);
        for _ in 0..BOT_COUNT {
            let pos = Vec2::new(
                rng.random_range(BOT_SPAWN_MARGIN..=WORLD_W - BOT_SPAWN_MARGIN),
                rng.random_range(BOT_SPAWN_MARGIN..=WORLD_H - BOT_SPAWN_MARGIN),
            );
            let mass = rng.random_range(BOT_MIN_MASS..=BOT_MAX_MASS) as f32;
            let color = BOT_COLORS[rng.random_range(0..BOT_COLORS.len())];
            bots.push(Blob::new(next_id, BlobKind::Bot, pos, mass, color));
            next_id += 1;
        }

        let food = (0..INITIAL_FOOD).map(|_| Food::random(&mut rng)).collect();

        Self {
            seed,
            rng,
            time: 0.0,
            phase: GamePhase::Playing,
            player,
            bots,
            food,
            split_cells: Vec::new(),
            camera: Camera::new(viewport),
            last_eject: None,
            events: Vec::new(),
            next_id,
        }
    }

    /// Re-initialize the whole session with a seed drawn from the current RNG
    pub fn reset(&mut self) {
        let seed = self.rng.next_u64();
        let viewport = self.camera.viewport;
        *self = Self::new(seed, viewport);
        log::info!("Session reset (seed {})", seed);
        self.events.push(GameEvent::Reset { seed });
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn living_bots(&self) -> impl Iterator<Item = &Blob> {
        self.bots.iter().filter(|b| b.alive)
    }

    /// Mass of the player plus its active split-cells
    pub fn player_total_mass(&self) -> f32 {
        self.player.mass + self.split_cells.iter().map(|c| c.mass).sum::<f32>()
    }

    /// Player, split-cells, living bots and all food
    pub fn total_mass(&self) -> f32 {
        self.player_total_mass()
            + self.living_bots().map(|b| b.mass).sum::<f32>()
            + self.food.iter().map(|f| f.value).sum::<f32>()
    }

    /// Scatter a ring of food around a point (dropped by an eaten bot)
    pub fn spawn_food_ring(&mut self, center: Vec2, count: usize, radius: f32) {
        self.food.reserve(count);
        for i in 0..count {
            let angle = (i as f32 / count as f32) * std::f32::consts::TAU;
            let jitter = Vec2::new(
                self.rng.random_range(-DEATH_RING_JITTER..=DEATH_RING_JITTER),
                self.rng.random_range(-DEATH_RING_JITTER..=DEATH_RING_JITTER),
            );
            let pos = clamp_to_world(center + Vec2::new(angle.cos(), angle.sin()) * radius + jitter);
            let food = Food::spawn_at(pos, &mut self.rng);
            self.food.push(food);
        }
    }

    /// Test helper: an empty arena holding only the player
    #[cfg(test)]
    pub(crate) fn empty_for_test(player_pos: Vec2, player_mass: f32) -> Self {
        let mut state = Self::new(7, Vec2::new(VIEWPORT_W, VIEWPORT_H));
        state.bots.clear();
        state.food.clear();
        state.player.pos = player_pos;
        state.player.mass = player_mass;
        state
    }

    /// Test helper: push a bot and return its index
    #[cfg(test)]
    pub(crate) fn add_bot_for_test(&mut self, pos: Vec2, mass: f32) -> usize {
        let id = self.next_entity_id();
        self.bots.push(Blob::new(id, BlobKind::Bot, pos, mass, BOT_COLORS[0]));
        self.bots.len() - 1
    }
}
