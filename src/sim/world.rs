//! Static maze: walls, goal and world/view dimensions
//!
//! Built once from a [`Tuning`] and never mutated afterwards.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::circle_intersects_rect;
use super::rect::Rect;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Full playable area
    pub size: Vec2,
    /// Visible window onto the world
    pub view_size: Vec2,
    walls: Vec<Rect>,
    goal: Rect,
}

impl World {
    pub fn new(size: Vec2, view_size: Vec2, walls: Vec<Rect>, goal: Rect) -> Self {
        Self {
            size,
            view_size,
            walls,
            goal,
        }
    }

    /// Build the maze described by `tuning` (border walls first)
    pub fn build(tuning: &Tuning) -> Self {
        let walls = tuning.walls();
        log::debug!("Built maze with {} walls", walls.len());
        Self::new(tuning.world_size, tuning.view_size, walls, tuning.goal)
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn goal(&self) -> &Rect {
        &self.goal
    }

    /// True if a circle at `center` touches at least one wall
    pub fn any_wall_collides(&self, center: Vec2, radius: f32) -> bool {
        self.walls
            .iter()
            .any(|wall| circle_intersects_rect(center, radius, wall))
    }

    /// Clamp a circle center so the circle stays inside the world
    ///
    /// Written with min/max so a world smaller than the circle does not panic.
    pub fn clamp_inside(&self, center: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            center.x.max(radius).min(self.size.x - radius),
            center.y.max(radius).min(self.size.y - radius),
        )
    }
}
