//! Data-driven maze layout and game balance
//!
//! Loaded from JSON so a level can be tweaked without a rebuild. Every field
//! falls back to the stock maze when missing.

use std::path::Path;

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Rect;
use crate::sim::collision::circle_intersects_rect;

/// Player spawn and movement parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub spawn: Vec2,
    pub radius: f32,
    /// Units per tick along each held axis
    pub speed: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            spawn: PLAYER_SPAWN,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
        }
    }
}

/// One entry of the enemy roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub pos: Vec2,
    /// Direction per axis, each component in {-1, 0, 1}
    pub dir: IVec2,
    #[serde(default = "default_enemy_radius")]
    pub radius: f32,
    #[serde(default = "default_enemy_speed")]
    pub speed: f32,
}

fn default_enemy_radius() -> f32 {
    ENEMY_RADIUS
}

fn default_enemy_speed() -> f32 {
    ENEMY_SPEED
}

impl EnemySpawn {
    pub fn new(pos: Vec2, dir: IVec2) -> Self {
        Self {
            pos,
            dir,
            radius: ENEMY_RADIUS,
            speed: ENEMY_SPEED,
        }
    }
}

/// Complete level description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Visible area in pixels
    pub view_size: Vec2,
    /// Whole world, must exceed the view on both axes
    pub world_size: Vec2,
    /// Thickness of the four border walls
    pub border_thickness: f32,
    /// Walls inside the border
    pub interior_walls: Vec<Rect>,
    pub goal: Rect,
    pub player: PlayerTuning,
    pub enemies: Vec<EnemySpawn>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            view_size: Vec2::new(VIEW_W, VIEW_H),
            world_size: Vec2::new(WORLD_W, WORLD_H),
            border_thickness: BORDER_THICKNESS,
            interior_walls: vec![
                Rect::new(100.0, 200.0, 600.0, 30.0),
                Rect::new(300.0, 350.0, 30.0, 400.0),
                Rect::new(500.0, 500.0, 500.0, 30.0),
                Rect::new(900.0, 200.0, 30.0, 500.0),
                Rect::new(1100.0, 700.0, 350.0, 30.0),
            ],
            goal: GOAL,
            player: PlayerTuning::default(),
            enemies: vec![
                EnemySpawn::new(Vec2::new(600.0, 150.0), IVec2::new(1, 0)),
                EnemySpawn::new(Vec2::new(1200.0, 400.0), IVec2::new(0, 1)),
            ],
        }
    }
}

impl Tuning {
    /// Parse a tuning document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a JSON file, falling back to the stock maze
    pub fn load(path: &Path) -> Self {
        let tuning = match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        };

        for problem in tuning.validate() {
            log::warn!("Tuning: {}", problem);
        }
        tuning
    }

    /// All four border walls followed by the interior walls
    pub fn walls(&self) -> Vec<Rect> {
        let t = self.border_thickness;
        let (w, h) = (self.world_size.x, self.world_size.y);
        let mut walls = vec![
            Rect::new(0.0, 0.0, w, t),
            Rect::new(0.0, h - t, w, t),
            Rect::new(0.0, 0.0, t, h),
            Rect::new(w - t, 0.0, t, h),
        ];
        walls.extend_from_slice(&self.interior_walls);
        walls
    }

    /// Report layout problems; none of them are enforced at runtime
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.world_size.x <= self.view_size.x || self.world_size.y <= self.view_size.y {
            problems.push(format!(
                "world {:?} should be larger than view {:?}",
                self.world_size, self.view_size
            ));
        }

        let walls = self.walls();
        let spawn_blocked = walls
            .iter()
            .any(|w| circle_intersects_rect(self.player.spawn, self.player.radius, w));
        if spawn_blocked {
            problems.push(format!("player spawn {:?} touches a wall", self.player.spawn));
        }

        if walls.iter().any(|w| w.contains_point(self.goal.center())) {
            problems.push("goal center is inside a wall".to_string());
        }

        for (i, enemy) in self.enemies.iter().enumerate() {
            let d = enemy.dir;
            if !(-1..=1).contains(&d.x) || !(-1..=1).contains(&d.y) {
                problems.push(format!("enemy {} direction {:?} is not unit per axis", i, d));
            }
            if walls
                .iter()
                .any(|w| circle_intersects_rect(enemy.pos, enemy.radius, w))
            {
                problems.push(format!("enemy {} spawn {:?} touches a wall", i, enemy.pos));
            }
        }

        problems
    }
}
