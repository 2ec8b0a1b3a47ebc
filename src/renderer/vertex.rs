//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with screen position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex list, ready for a GPU buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// 8-bit RGB plus alpha to normalized RGBA
#[inline]
pub fn rgba(color: [u8; 3], alpha: u8) -> [f32; 4] {
    [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        alpha as f32 / 255.0,
    ]
}

/// Colors for scene elements
pub mod colors {
    pub const BACKGROUND: [u8; 3] = [18, 20, 26];
    pub const GRID: [u8; 3] = [28, 32, 40];
    pub const HUD_PANEL: [u8; 3] = [25, 28, 36];
    pub const HUD_TEXT: [u8; 3] = [235, 235, 245];
    pub const HUD_HINT: [u8; 3] = [200, 220, 255];
    pub const BANNER_LOST: [u8; 3] = [255, 120, 120];
    pub const BANNER_WON: [u8; 3] = [180, 255, 180];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let verts = [Vertex::new(1.0, 2.0, [0.0; 4]); 3];
        assert_eq!(as_bytes(&verts).len(), 72);
    }

    #[test]
    fn test_rgba() {
        assert_eq!(rgba([255, 0, 255], 0), [1.0, 0.0, 1.0, 0.0]);
    }
}
