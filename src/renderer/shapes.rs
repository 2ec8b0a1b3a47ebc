//! Shape generation for 2D primitives
//!
//! Turns a [`RenderSnapshot`] into a flat triangle list in screen space.

use glam::Vec2;
use std::f32::consts::PI;

use super::shading::{BlobShading, ShadingCache};
use super::snapshot::RenderSnapshot;
use super::vertex::{Vertex, colors, rgba};

/// Background grid spacing in pixels
pub const GRID_STEP: f32 = 80.0;

/// Segment count for a circle of the given radius
fn segments_for(radius: f32) -> u32 {
    (radius * 0.75).clamp(12.0, 64.0) as u32
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    gradient_disc(center, radius, color, color, segments)
}

/// Filled circle whose color fades linearly from `inner` at the center to `outer` at the rim
pub fn gradient_disc(
    center: Vec2,
    radius: f32,
    inner: [f32; 4],
    outer: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, inner));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            outer,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            outer,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;
        let (dir1, dir2) = (
            Vec2::new(theta1.cos(), theta1.sin()),
            Vec2::new(theta2.cos(), theta2.sin()),
        );

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Screen-space offsets of the background grid lines
///
/// The grid is anchored to the world, so it scrolls with the camera.
pub fn grid_lines(camera: Vec2, viewport: Vec2, step: f32) -> (Vec<f32>, Vec<f32>) {
    let axis = |offset: f32, extent: f32| {
        let mut lines = Vec::new();
        let mut p = -offset.rem_euclid(step);
        while p < extent {
            lines.push(p);
            p += step;
        }
        lines
    };
    (axis(camera.x, viewport.x), axis(camera.y, viewport.y))
}

/// One-pixel-wide grid line quads
pub fn grid(camera: Vec2, viewport: Vec2) -> Vec<Vertex> {
    let color = rgba(colors::GRID, 255);
    let (xs, ys) = grid_lines(camera, viewport, GRID_STEP);
    let mut vertices = Vec::with_capacity((xs.len() + ys.len()) * 6);

    let mut quad = |min: Vec2, max: Vec2| {
        vertices.push(Vertex::new(min.x, min.y, color));
        vertices.push(Vertex::new(max.x, min.y, color));
        vertices.push(Vertex::new(min.x, max.y, color));
        vertices.push(Vertex::new(min.x, max.y, color));
        vertices.push(Vertex::new(max.x, min.y, color));
        vertices.push(Vertex::new(max.x, max.y, color));
    };
    for x in xs {
        quad(Vec2::new(x, 0.0), Vec2::new(x + 1.0, viewport.y));
    }
    for y in ys {
        quad(Vec2::new(0.0, y), Vec2::new(viewport.x, y + 1.0));
    }
    vertices
}

/// Body gradient plus outline for one blob
pub fn blob(center: Vec2, radius: f32, shading: &BlobShading) -> Vec<Vertex> {
    let segments = segments_for(shading.sprite_radius);
    let mut vertices = gradient_disc(center, shading.sprite_radius, shading.center, shading.rim, segments);
    let segments = segments_for(radius);
    for ring_def in &shading.outline {
        vertices.extend(ring(center, ring_def.radius - 1.0, ring_def.radius, ring_def.color, segments));
    }
    vertices
}

/// Tessellate a whole frame: grid, then entities in snapshot order
pub fn build_frame(snapshot: &RenderSnapshot, cache: &mut ShadingCache) -> Vec<Vertex> {
    let mut vertices = grid(snapshot.camera, snapshot.viewport);

    for entity in &snapshot.entities {
        let center = snapshot.to_screen(entity.pos);
        if entity.kind.is_blob() {
            let shading = cache.get(entity.radius, entity.color);
            vertices.extend(blob(center, entity.radius, shading));
        } else {
            vertices.extend(circle(center, entity.radius, rgba(entity.color, 255), 12));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::snapshot::DrawableKind;
    use crate::sim::GameState;

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::ZERO, 10.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);
        for v in verts.iter().skip(1).step_by(3) {
            let r = Vec2::from(v.position).length();
            assert!((r - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_gradient_disc_colors() {
        let verts = gradient_disc(Vec2::ZERO, 10.0, [1.0; 4], [0.0; 4], 12);
        assert_eq!(verts[0].color, [1.0; 4]);
        assert_eq!(verts[1].color, [0.0; 4]);
    }

    #[test]
    fn test_grid_lines_scroll() {
        let (xs, ys) = grid_lines(Vec2::new(100.0, 0.0), Vec2::new(400.0, 160.0), 80.0);
        assert_eq!(xs, vec![-20.0, 60.0, 140.0, 220.0, 300.0, 380.0]);
        assert_eq!(ys, vec![0.0, 80.0]);
    }

    #[test]
    fn test_build_frame_covers_all_entities() {
        let state = GameState::new(8, Vec2::new(VIEWPORT_W, VIEWPORT_H));
        let snap = RenderSnapshot::capture(&state, 10.0);
        let mut cache = ShadingCache::new();
        let verts = build_frame(&snap, &mut cache);

        let (xs, ys) = grid_lines(snap.camera, snap.viewport, GRID_STEP);
        let grid_len = (xs.len() + ys.len()) * 6;
        let food_len = snap.count(DrawableKind::Food) * 36;
        assert!(verts.len() > grid_len + food_len);
        assert!(!cache.is_empty());
        assert!(verts.len() % 3 == 0);
    }
}
