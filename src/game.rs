//! Frame orchestrator
//!
//! One call per rendered frame: cap the delta-time, run the simulation tick,
//! and hand back a fresh render snapshot.

use glam::Vec2;

use crate::consts::MAX_FRAME_DT;
use crate::renderer::RenderSnapshot;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, TickControl, TickInput, tick};

/// Outcome of a frame
#[derive(Debug, Clone)]
pub enum FrameResult {
    /// Keep going; draw this
    Continue(RenderSnapshot),
    /// The user asked to quit
    Quit,
}

/// Game instance holding the session and host settings
pub struct Game {
    pub state: GameState,
    pub settings: Settings,
    last_phase: GamePhase,
    frames: u64,
}

impl Game {
    pub fn new(seed: u64, settings: Settings) -> Self {
        log::info!("New session (seed {})", seed);
        let state = GameState::new(seed, settings.viewport());
        Self {
            last_phase: state.phase,
            state,
            settings,
            frames: 0,
        }
    }

    /// Convert a pointer in screen pixels to world coordinates
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.state.camera.screen_to_world(screen)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance one frame of `dt` wall-clock seconds
    pub fn frame(&mut self, input: &TickInput, dt: f32) -> FrameResult {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        if tick(&mut self.state, input, dt) == TickControl::Quit {
            log::info!("Quit after {} frames", self.frames);
            return FrameResult::Quit;
        }
        self.frames += 1;

        let phase = self.state.phase;
        if phase != self.last_phase {
            match phase {
                GamePhase::Won => log::info!("Victory at t={:.1}s", self.state.time),
                GamePhase::Lost => log::info!("Defeat at t={:.1}s", self.state.time),
                GamePhase::Playing => log::info!("Back to playing"),
            }
            self.last_phase = phase;
        }

        FrameResult::Continue(self.snapshot())
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state, self.settings.cull_margin)
    }
}
