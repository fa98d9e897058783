//! Maze Escape - A top-down maze arcade game
//!
//! Core modules:
//! - `sim`: Simulation (scenes, movement, collisions, camera)
//! - `renderer`: Frame building (vertices + text) for the host to draw
//! - `platform`: Key bindings and held-input tracking
//! - `tuning`: Data-driven maze layout and balance
//! - `ui`: Per-scene text overlays
//! - `demo`: Seeded autopilot for unattended runs

pub mod demo;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::Tuning;

/// Game configuration constants (stock maze)
pub mod consts {
    use glam::Vec2;

    use crate::sim::Rect;

    /// Simulation steps per second (one step per rendered frame)
    pub const SIM_HZ: u32 = 60;

    /// Viewport dimensions
    pub const VIEW_W: f32 = 800.0;
    pub const VIEW_H: f32 = 500.0;

    /// World dimensions - bigger than the view so the camera has work to do
    pub const WORLD_W: f32 = 1600.0;
    pub const WORLD_H: f32 = 1000.0;

    /// Border wall thickness
    pub const BORDER_THICKNESS: f32 = 30.0;

    /// Player defaults
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(120.0, 120.0);
    pub const PLAYER_RADIUS: f32 = 14.0;
    pub const PLAYER_SPEED: f32 = 3.0;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 14.0;
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Finish zone
    pub const GOAL: Rect = Rect::new(1450.0, 850.0, 80.0, 80.0);
}
