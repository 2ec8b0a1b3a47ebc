//! Read-only view of the simulation handed to the render layer each frame

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Blob, GamePhase, GameState};

/// What kind of entity a drawable is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawableKind {
    Food,
    Bot,
    SplitCell,
    Player,
}

impl DrawableKind {
    /// Blobs get the gradient body and outline; food is a flat disc
    pub fn is_blob(self) -> bool {
        self != DrawableKind::Food
    }
}

/// A circle to draw, in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub pos: Vec2,
    pub radius: f32,
    pub color: [u8; 3],
    pub kind: DrawableKind,
}

impl Drawable {
    fn from_blob(blob: &Blob, kind: DrawableKind) -> Self {
        Self {
            pos: blob.pos,
            radius: blob.radius(),
            color: blob.color,
            kind,
        }
    }
}

/// Everything the render layer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    /// Back to front: food, bots, split-cells, player
    pub entities: Vec<Drawable>,
    /// Top-left of the viewport in world coordinates
    pub camera: Vec2,
    pub viewport: Vec2,
    pub phase: GamePhase,
    pub player_mass: f32,
    pub time: f32,
}

impl RenderSnapshot {
    /// Capture the current state; food outside the viewport (plus margin) is culled
    pub fn capture(state: &GameState, cull_margin: f32) -> Self {
        let camera = &state.camera;
        let mut entities = Vec::with_capacity(state.food.len() / 4 + state.bots.len() + 2);

        entities.extend(
            state
                .food
                .iter()
                .filter(|f| camera.sees(f.pos, 0.0, cull_margin))
                .map(|f| Drawable {
                    pos: f.pos,
                    radius: f.radius,
                    color: f.color,
                    kind: DrawableKind::Food,
                }),
        );
        entities.extend(state.living_bots().map(|b| Drawable::from_blob(b, DrawableKind::Bot)));
        entities.extend(
            state
                .split_cells
                .iter()
                .map(|c| Drawable::from_blob(c, DrawableKind::SplitCell)),
        );
        entities.push(Drawable::from_blob(&state.player, DrawableKind::Player));

        Self {
            entities,
            camera: camera.pos,
            viewport: camera.viewport,
            phase: state.phase,
            player_mass: state.player.mass,
            time: state.time,
        }
    }

    /// World position to screen position
    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.camera
    }

    pub fn count(&self, kind: DrawableKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{TickInput, split, tick};

    #[test]
    fn test_snapshot_order_and_counts() {
        let mut state = GameState::new(4, Vec2::new(VIEWPORT_W, VIEWPORT_H));
        state.bots[0].alive = false;
        split(&mut state, Vec2::ZERO);

        let snap = RenderSnapshot::capture(&state, 10.0);
        assert_eq!(snap.entities.last().map(|e| e.kind), Some(DrawableKind::Player));
        assert_eq!(snap.count(DrawableKind::Bot), BOT_COUNT - 1);
        assert_eq!(snap.count(DrawableKind::SplitCell), 1);

        // Kinds never go backwards in draw order
        let rank = |k: DrawableKind| k as u8;
        assert!(snap.entities.windows(2).all(|w| rank(w[0].kind) <= rank(w[1].kind)));
        assert_eq!(snap.player_mass, state.player.mass);
        assert_eq!(snap.phase, GamePhase::Playing);
    }

    #[test]
    fn test_food_culled_to_viewport() {
        let mut state = GameState::new(4, Vec2::new(VIEWPORT_W, VIEWPORT_H));
        tick(&mut state, &TickInput::default(), 1.0 / 60.0);

        let snap = RenderSnapshot::capture(&state, 10.0);
        let visible = snap.count(DrawableKind::Food);
        assert!(visible < state.food.len());
        for e in snap.entities.iter().filter(|e| e.kind == DrawableKind::Food) {
            let s = snap.to_screen(e.pos);
            assert!(s.x >= -10.0 && s.x <= VIEWPORT_W + 10.0);
            assert!(s.y >= -10.0 && s.y <= VIEWPORT_H + 10.0);
        }
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(4, Vec2::new(VIEWPORT_W, VIEWPORT_H));
        let snap = RenderSnapshot::capture(&state, 10.0);
        let json = serde_json::to_string(&snap).expect("serialize");
        let back: RenderSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.entities.len(), snap.entities.len());
    }
}
