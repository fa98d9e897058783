//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (screen pixels) and color
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

    /// Byte stride of one vertex in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [20.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0, 1.0];
    /// Chemical walls (red-ish)
    pub const WALL: [f32; 4] = [200.0 / 255.0, 80.0 / 255.0, 80.0 / 255.0, 1.0];
    pub const GOAL: [f32; 4] = [0.0, 200.0 / 255.0, 100.0 / 255.0, 1.0];
    pub const PLAYER: [f32; 4] = [80.0 / 255.0, 160.0 / 255.0, 1.0, 1.0];
    pub const ENEMY: [f32; 4] = [1.0, 200.0 / 255.0, 0.0, 1.0];
}
