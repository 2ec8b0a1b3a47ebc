//! Blob shading: a soft radial body plus a glowing outline
//!
//! Shading is a pure function of (radius, color). The render layer may
//! memoize it in a [`ShadingCache`]; the simulation never stores it.

use std::collections::HashMap;

use super::vertex::rgba;

/// Smallest body sprite radius, so tiny blobs still get a visible glow
pub const MIN_SPRITE_RADIUS: f32 = 16.0;

/// One outline ring drawn around a blob
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineRing {
    /// Ring radius (stroke width is one pixel)
    pub radius: f32,
    pub color: [f32; 4],
}

/// How to draw one blob body
#[derive(Debug, Clone, PartialEq)]
pub struct BlobShading {
    /// Radius of the gradient disc
    pub sprite_radius: f32,
    /// Opaque center color
    pub center: [f32; 4],
    /// Fully transparent rim color
    pub rim: [f32; 4],
    /// Outermost ring first
    pub outline: [OutlineRing; 3],
}

impl BlobShading {
    pub fn new(radius: f32, color: [u8; 3]) -> Self {
        let sprite_radius = radius.max(MIN_SPRITE_RADIUS);
        // Stroke width 3, 2, 1 with rising opacity toward the body
        let ring = |width: f32, alpha: u8| OutlineRing {
            radius: radius + width - 1.0,
            color: rgba(color, alpha),
        };
        Self {
            sprite_radius,
            center: rgba(color, 255),
            rim: rgba(color, 0),
            outline: [ring(3.0, 100), ring(2.0, 180), ring(1.0, 255)],
        }
    }

    /// Body opacity (0-255) at distance `r` from the center
    pub fn alpha_at(&self, r: f32) -> u8 {
        let t = (r / self.sprite_radius).clamp(0.0, 1.0);
        (255.0 * (1.0 - t)) as u8
    }
}

/// Memoized shading keyed by whole-pixel radius and color
#[derive(Debug, Default)]
pub struct ShadingCache {
    entries: HashMap<(u32, [u8; 3]), BlobShading>,
}

impl ShadingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shading for a blob; radii are rounded to whole pixels
    pub fn get(&mut self, radius: f32, color: [u8; 3]) -> &BlobShading {
        let px = radius.round().max(0.0) as u32;
        self.entries
            .entry((px, color))
            .or_insert_with(|| BlobShading::new(px as f32, color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop everything (e.g. on session reset)
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
