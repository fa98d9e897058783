//! Hard-follow camera centered on the player

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::world::World;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Top-left corner of the view in world coordinates
    pub offset: Vec2,
}

impl Camera {
    /// Snap the view onto `target`, clamped so it never leaves the world
    pub fn follow(&mut self, target: Vec2, world: &World) {
        let max = (world.size - world.view_size).max(Vec2::ZERO);
        let centered = target - world.view_size / 2.0;
        self.offset = Vec2::new(
            centered.x.max(0.0).min(max.x),
            centered.y.max(0.0).min(max.y),
        );
    }

    /// World position to screen position
    #[inline]
    pub fn to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    #[test]
    fn test_follow_centers_player() {
        let world = World::build(&Tuning::default());
        let mut cam = Camera::default();
        cam.follow(Vec2::new(800.0, 500.0), &world);
        assert_eq!(cam.offset, Vec2::new(400.0, 250.0));
        assert_eq!(cam.to_screen(Vec2::new(800.0, 500.0)), Vec2::new(400.0, 250.0));
    }

    #[test]
    fn test_follow_clamps_at_corners() {
        let world = World::build(&Tuning::default());
        let mut cam = Camera::default();

        cam.follow(Vec2::new(120.0, 120.0), &world);
        assert_eq!(cam.offset, Vec2::ZERO);

        cam.follow(Vec2::new(1586.0, 986.0), &world);
        assert_eq!(cam.offset, Vec2::new(800.0, 500.0));
    }

    #[test]
    fn test_world_smaller_than_view_does_not_panic() {
        let tuning = Tuning {
            world_size: Vec2::new(400.0, 300.0),
            ..Tuning::default()
        };
        let world = World::build(&tuning);
        let mut cam = Camera::default();
        cam.follow(Vec2::new(200.0, 150.0), &world);
        assert_eq!(cam.offset, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_offset_stays_in_world(x in 14.0f32..1586.0, y in 14.0f32..986.0) {
            let world = World::build(&Tuning::default());
            let mut cam = Camera::default();
            cam.follow(Vec2::new(x, y), &world);
            prop_assert!(cam.offset.x >= 0.0 && cam.offset.x <= 1600.0 - 800.0);
            prop_assert!(cam.offset.y >= 0.0 && cam.offset.y <= 1000.0 - 500.0);
        }
    }
}
