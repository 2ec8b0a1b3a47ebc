//! Blob Arena entry point
//!
//! Native headless driver: runs the frame loop at a fixed delta-time with a
//! simple autopilot steering the player, then prints a JSON summary.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use blob_arena::renderer::{DrawableKind, Hud, RenderSnapshot, ShadingCache, build_frame};
use blob_arena::sim::{GameEvent, GamePhase, TickInput};
use blob_arena::{FrameResult, Game, Settings};

/// Pick a pointer target: the nearest food or clearly smaller bot
fn autopilot(snapshot: &RenderSnapshot) -> Option<Vec2> {
    let player = snapshot
        .entities
        .iter()
        .find(|e| e.kind == DrawableKind::Player)?;

    snapshot
        .entities
        .iter()
        .filter(|e| match e.kind {
            DrawableKind::Food => true,
            DrawableKind::Bot => e.radius * 1.2 < player.radius,
            _ => false,
        })
        .min_by(|a, b| {
            a.pos
                .distance_squared(player.pos)
                .partial_cmp(&b.pos.distance_squared(player.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|e| e.pos)
}

fn main() {
    env_logger::init();
    log::info!("Blob Arena (headless) starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    let dt = settings.frame_dt();
    let max_frames = (settings.demo_seconds / dt).ceil() as u64;

    let mut game = Game::new(seed, settings);
    let mut cache = ShadingCache::new();
    let mut snapshot = game.snapshot();
    let mut bots_eaten = 0usize;
    let mut vertices = 0usize;

    while game.frames() < max_frames {
        let input = TickInput {
            pointer: autopilot(&snapshot),
            ..Default::default()
        };
        snapshot = match game.frame(&input, dt) {
            FrameResult::Continue(snapshot) => snapshot,
            FrameResult::Quit => break,
        };

        bots_eaten += game
            .state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::BotEaten { .. }))
            .count();
        vertices = build_frame(&snapshot, &mut cache).len();

        if game.frames() % u64::from(game.settings.target_fps.max(1)) == 0 {
            log::debug!("{}", Hud::from_snapshot(&snapshot).mass_label);
        }
        if snapshot.phase != GamePhase::Playing {
            break;
        }
    }

    let hud = Hud::from_snapshot(&snapshot);
    let summary = serde_json::json!({
        "seed": seed,
        "frames": game.frames(),
        "time": snapshot.time,
        "phase": snapshot.phase,
        "player_mass": snapshot.player_mass,
        "bots_eaten": bots_eaten,
        "bots_alive": snapshot.count(DrawableKind::Bot),
        "visible_food": snapshot.count(DrawableKind::Food),
        "last_frame_vertices": vertices,
        "banner": hud.banner.map(|b| b.title),
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}
