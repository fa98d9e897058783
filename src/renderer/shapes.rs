//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Segments used for entity circles
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let min = r.min();
    let max = r.max();
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle as a triangle fan
///
/// Rim points are computed once and shared by neighbouring triangles.
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let step = TAU / segments as f32;
    let rim: Vec<Vec2> = (0..=segments)
        .map(|i| center + Vec2::from_angle(i as f32 * step) * radius)
        .collect();

    rim.windows(2)
        .flat_map(|edge| [center, edge[0], edge[1]])
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}
