//! Game state and core simulation types
//!
//! One `GameState` owns everything the simulation touches. It is created at
//! startup and mutated in place by [`super::tick`].

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::tick::TickInput;
use super::world::World;
use crate::tuning::{EnemySpawn, PlayerTuning, Tuning};

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scene {
    /// Title screen
    #[default]
    Start,
    /// Controls and rules
    Instructions,
    /// Active gameplay
    Game,
    /// Run ended (see [`EndCause`])
    End,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    HitWall,
    CaughtByEnemy,
    Escaped,
}

impl EndCause {
    /// Status line shown on the end screen
    pub fn message(&self) -> &'static str {
        match self {
            EndCause::HitWall => "Game Over! You touched a chemical wall.",
            EndCause::CaughtByEnemy => "Game Over! A monster got you.",
            EndCause::Escaped => "You escaped! 🎉",
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, EndCause::Escaped)
    }
}

/// The player-controlled circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Units per tick on each held axis
    pub speed: f32,
}

impl Player {
    pub fn new(tuning: &PlayerTuning) -> Self {
        Self {
            pos: tuning.spawn,
            radius: tuning.radius,
            speed: tuning.speed,
        }
    }

    /// Move one tick with axis-separated wall resolution
    ///
    /// Each axis is tried on its own and rolled back if it lands in a wall,
    /// so pushing diagonally into a wall slides along it. Diagonals are not
    /// normalized.
    pub fn step(&mut self, input: &TickInput, world: &World) {
        let delta = input.axis() * self.speed;
        let start = self.pos;

        self.pos.x += delta.x;
        if world.any_wall_collides(self.pos, self.radius) {
            self.pos.x = start.x;
        }

        self.pos.y += delta.y;
        if world.any_wall_collides(self.pos, self.radius) {
            self.pos.y = start.y;
        }

        self.pos = world.clamp_inside(self.pos, self.radius);
    }
}

/// A patrolling monster that bounces off walls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    /// Travel direction, each component in {-1, 0, 1}
    pub dir: IVec2,
    pub speed: f32,
}

impl Enemy {
    pub fn from_spawn(spawn: &EnemySpawn) -> Self {
        Self {
            pos: spawn.pos,
            radius: spawn.radius,
            dir: spawn.dir,
            speed: spawn.speed,
        }
    }

    /// Move one tick, reversing any axis that would enter a wall
    pub fn step(&mut self, world: &World) {
        let delta = self.dir.as_vec2() * self.speed;

        let next_x = Vec2::new(self.pos.x + delta.x, self.pos.y);
        if world.any_wall_collides(next_x, self.radius) {
            self.dir.x = -self.dir.x;
        } else {
            self.pos = next_x;
        }

        let next_y = Vec2::new(self.pos.x, self.pos.y + delta.y);
        if world.any_wall_collides(next_y, self.radius) {
            self.dir.y = -self.dir.y;
        } else {
            self.pos = next_y;
        }

        // A stopped enemy never recovers on its own
        if self.dir == IVec2::ZERO {
            self.dir.x = 1;
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Active screen
    pub scene: Scene,
    /// Walls, goal and dimensions (immutable)
    pub world: World,
    pub player: Player,
    /// Active enemies, in roster order
    pub enemies: Vec<Enemy>,
    pub camera: Camera,
    /// Set when the current run ended
    pub end_cause: Option<EndCause>,
    /// Simulation ticks in the current run
    pub time_ticks: u64,
    player_spawn: PlayerTuning,
    roster: Vec<EnemySpawn>,
}

impl GameState {
    /// Create the game on its start screen
    pub fn new(tuning: &Tuning) -> Self {
        let world = World::build(tuning);
        let player = Player::new(&tuning.player);
        let mut camera = Camera::default();
        camera.follow(player.pos, &world);

        let mut state = Self {
            scene: Scene::Start,
            world,
            player,
            enemies: Vec::new(),
            camera,
            end_cause: None,
            time_ticks: 0,
            player_spawn: tuning.player.clone(),
            roster: tuning.enemies.clone(),
        };
        state.spawn_enemies();
        state
    }

    /// Replace the enemy list with the initial roster
    pub fn spawn_enemies(&mut self) {
        self.enemies = self.roster.iter().map(Enemy::from_spawn).collect();
    }

    /// Put the player back at spawn and re-spawn enemies; walls stay
    pub fn reset_run(&mut self) {
        self.player.pos = self.player_spawn.spawn;
        self.spawn_enemies();
        self.camera.follow(self.player.pos, &self.world);
        self.end_cause = None;
        self.time_ticks = 0;
    }

    /// Status line for the end screen (empty until a run ends)
    pub fn end_message(&self) -> &'static str {
        self.end_cause.map(|c| c.message()).unwrap_or("")
    }
}
