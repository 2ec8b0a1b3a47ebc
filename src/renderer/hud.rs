//! HUD text derived from a snapshot

use super::snapshot::RenderSnapshot;
use super::vertex::colors;
use crate::sim::GamePhase;

/// Controls hint shown under the mass counter
pub const CONTROLS_HINT: &str = "Mouse = move | SPACE = dash (-5% mass) | Q = split | E = eject";

/// End-of-round overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub color: [u8; 3],
}

/// Text lines for the HUD panel
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub mass_label: String,
    pub hint: &'static str,
    pub banner: Option<Banner>,
}

impl Hud {
    pub fn from_snapshot(snapshot: &RenderSnapshot) -> Self {
        let banner = match snapshot.phase {
            GamePhase::Playing => None,
            GamePhase::Lost => Some(Banner {
                title: "GAME OVER",
                subtitle: "[R] restart - [ESC] quit",
                color: colors::BANNER_LOST,
            }),
            GamePhase::Won => Some(Banner {
                title: "YOU WIN!",
                subtitle: "All bots defeated - [R] restart",
                color: colors::BANNER_WON,
            }),
        };

        Self {
            mass_label: format!("Mass: {}", snapshot.player_mass as u64),
            hint: CONTROLS_HINT,
            banner,
        }
    }
}
