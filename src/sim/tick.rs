//! Per-frame simulation step and scene transitions
//!
//! One call to [`tick`] is one rendered frame. Discrete actions arrive
//! between frames through [`handle_action`].

use glam::Vec2;

use super::collision::{circles_overlap, rect_contains_point};
use super::state::{EndCause, GameState, Scene};

/// A held movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A discrete press that can change the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Confirm,
    Help,
    Back,
    Restart,
}

/// Held-direction snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Input with the given directions held
    pub fn holding(directions: &[Direction]) -> Self {
        let mut input = Self::default();
        for &d in directions {
            input.set(d, true);
        }
        input
    }

    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    /// Unit step per axis (opposites cancel, diagonals are not normalized)
    pub fn axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.up {
            axis.y -= 1.0;
        }
        if self.down {
            axis.y += 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        if self.right {
            axis.x += 1.0;
        }
        axis
    }
}

/// Apply a discrete action to the scene machine
///
/// Returns true if the scene changed. Actions the active scene does not
/// recognise are ignored.
pub fn handle_action(state: &mut GameState, action: Action) -> bool {
    let from = state.scene;
    let to = match (from, action) {
        (Scene::Start, Action::Confirm) => Scene::Game,
        (Scene::Start, Action::Help) => Scene::Instructions,
        (Scene::Instructions, Action::Back) => Scene::Start,
        (Scene::End, Action::Restart) => {
            state.reset_run();
            log::info!("Run restarted");
            Scene::Game
        }
        (Scene::End, Action::Back) => Scene::Start,
        _ => {
            log::trace!("Ignoring {:?} in {:?}", action, from);
            return false;
        }
    };

    state.scene = to;
    log::info!("Scene {:?} -> {:?}", from, to);
    true
}

/// Advance the game by one frame
///
/// Only runs in the Game scene. Order: player, camera, enemies, then the
/// win/lose checks. Returns the end cause if this frame ended the run.
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<EndCause> {
    if state.scene != Scene::Game {
        return None;
    }

    state.time_ticks += 1;

    state.player.step(input, &state.world);
    state.camera.follow(state.player.pos, &state.world);
    for enemy in &mut state.enemies {
        enemy.step(&state.world);
    }

    let cause = evaluate(state)?;
    state.end_cause = Some(cause);
    state.scene = Scene::End;
    log::info!(
        "Run ended after {} ticks: {}",
        state.time_ticks,
        cause.message()
    );
    Some(cause)
}

/// Check the end conditions in priority order: wall, enemy, goal
pub fn evaluate(state: &GameState) -> Option<EndCause> {
    let player = &state.player;

    if state.world.any_wall_collides(player.pos, player.radius) {
        return Some(EndCause::HitWall);
    }

    let caught = state
        .enemies
        .iter()
        .any(|e| circles_overlap(player.pos, player.radius, e.pos, e.radius));
    if caught {
        return Some(EndCause::CaughtByEnemy);
    }

    if rect_contains_point(state.world.goal(), player.pos) {
        return Some(EndCause::Escaped);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rect;
    use crate::tuning::{EnemySpawn, Tuning};
    use glam::IVec2;

    fn in_game(tuning: &Tuning) -> GameState {
        let mut state = GameState::new(tuning);
        assert!(handle_action(&mut state, Action::Confirm));
        state
    }

    #[test]
    fn test_start_screen_transitions() {
        let mut state = GameState::new(&Tuning::default());

        assert!(handle_action(&mut state, Action::Help));
        assert_eq!(state.scene, Scene::Instructions);

        // Confirm means nothing on the instructions screen
        assert!(!handle_action(&mut state, Action::Confirm));
        assert_eq!(state.scene, Scene::Instructions);

        assert!(handle_action(&mut state, Action::Back));
        assert_eq!(state.scene, Scene::Start);

        assert!(!handle_action(&mut state, Action::Restart));
        assert!(!handle_action(&mut state, Action::Back));
        assert_eq!(state.scene, Scene::Start);

        assert!(handle_action(&mut state, Action::Confirm));
        assert_eq!(state.scene, Scene::Game);
    }

    #[test]
    fn test_actions_ignored_during_game() {
        let mut state = in_game(&Tuning::default());
        for action in [Action::Confirm, Action::Help, Action::Back, Action::Restart] {
            assert!(!handle_action(&mut state, action));
            assert_eq!(state.scene, Scene::Game);
        }
    }

    #[test]
    fn test_tick_does_nothing_outside_game() {
        let mut state = GameState::new(&Tuning::default());
        let input = TickInput::holding(&[Direction::Right]);
        assert_eq!(tick(&mut state, &input), None);
        assert_eq!(state.player.pos, Vec2::new(120.0, 120.0));
        assert_eq!(state.enemies[0].pos, Vec2::new(600.0, 150.0));
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_tick_moves_player_then_enemies() {
        let mut state = in_game(&Tuning::default());
        let input = TickInput::holding(&[Direction::Right]);
        assert_eq!(tick(&mut state, &input), None);
        assert_eq!(state.player.pos, Vec2::new(123.0, 120.0));
        assert_eq!(state.enemies[0].pos, Vec2::new(602.0, 150.0));
        assert_eq!(state.enemies[1].pos, Vec2::new(1200.0, 402.0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_camera_follows_player_in_tick() {
        let mut state = in_game(&Tuning::default());
        state.player.pos = Vec2::new(800.0, 420.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.camera.offset, Vec2::new(400.0, 170.0));
    }

    #[test]
    fn test_enemy_contact_ends_run() {
        let mut state = in_game(&Tuning::default());
        state.enemies[0].pos = Vec2::new(140.0, 120.0);
        state.enemies[0].dir = IVec2::new(0, 1);
        assert_eq!(tick(&mut state, &TickInput::default()), Some(EndCause::CaughtByEnemy));
        assert_eq!(state.scene, Scene::End);
        assert_eq!(state.end_message(), "Game Over! A monster got you.");
    }

    #[test]
    fn test_wall_beats_goal() {
        // A wall overlapping the goal, with the player already inside both
        let tuning = Tuning {
            interior_walls: vec![Rect::new(1480.0, 860.0, 40.0, 40.0)],
            enemies: Vec::new(),
            ..Tuning::default()
        };
        let mut state = in_game(&tuning);
        state.player.pos = Vec2::new(1470.0, 880.0);
        assert!(rect_contains_point(state.world.goal(), state.player.pos));

        assert_eq!(tick(&mut state, &TickInput::default()), Some(EndCause::HitWall));
        assert_eq!(state.end_message(), "Game Over! You touched a chemical wall.");
    }

    #[test]
    fn test_wall_beats_enemy_beats_goal() {
        let tuning = Tuning {
            interior_walls: vec![Rect::new(1480.0, 860.0, 40.0, 40.0)],
            enemies: vec![EnemySpawn::new(Vec2::new(1470.0, 880.0), IVec2::new(1, 0))],
            ..Tuning::default()
        };
        let mut state = in_game(&tuning);
        state.player.pos = Vec2::new(1470.0, 880.0);
        assert_eq!(evaluate(&state), Some(EndCause::HitWall));

        state.world = crate::sim::World::build(&Tuning {
            interior_walls: Vec::new(),
            ..tuning
        });
        assert_eq!(evaluate(&state), Some(EndCause::CaughtByEnemy));

        state.enemies.clear();
        assert_eq!(evaluate(&state), Some(EndCause::Escaped));
    }

    #[test]
    fn test_goal_edge_is_not_escape() {
        let tuning = Tuning {
            enemies: Vec::new(),
            ..Tuning::default()
        };
        let mut state = in_game(&tuning);
        // Center exactly on the goal's left edge
        state.player.pos = Vec2::new(1450.0, 890.0);
        assert_eq!(evaluate(&state), None);
        state.player.pos = Vec2::new(1451.0, 890.0);
        assert_eq!(evaluate(&state), Some(EndCause::Escaped));
    }

    #[test]
    fn test_hold_right_down_escapes_along_corridor() {
        // A floor guide below the diagonal steers the player into the goal
        let tuning = Tuning {
            interior_walls: vec![Rect::new(30.0, 905.0, 1400.0, 30.0)],
            ..Tuning::default()
        };
        let mut state = in_game(&tuning);
        assert_eq!(state.player.pos, Vec2::new(120.0, 120.0));
        assert_eq!(state.enemies.len(), 2);

        let input = TickInput::holding(&[Direction::Right, Direction::Down]);
        let mut outcome = None;
        for _ in 0..1000 {
            outcome = tick(&mut state, &input);
            if outcome.is_some() {
                break;
            }
        }

        assert_eq!(outcome, Some(EndCause::Escaped));
        assert_eq!(state.scene, Scene::End);
        assert!(state.end_message().starts_with("You escaped!"));
        assert!(rect_contains_point(state.world.goal(), state.player.pos));
        assert!(state.time_ticks > 400);
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = in_game(&Tuning::default());
        state.enemies[1].pos = Vec2::new(120.0, 140.0);
        assert_eq!(tick(&mut state, &TickInput::default()), Some(EndCause::CaughtByEnemy));

        assert!(handle_action(&mut state, Action::Restart));
        assert_eq!(state.scene, Scene::Game);
        assert_eq!(state.player.pos, Vec2::new(120.0, 120.0));
        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.enemies[0].pos, Vec2::new(600.0, 150.0));
        assert_eq!(state.enemies[0].dir, IVec2::new(1, 0));
        assert_eq!(state.enemies[1].pos, Vec2::new(1200.0, 400.0));
        assert_eq!(state.enemies[1].dir, IVec2::new(0, 1));
        assert_eq!(state.end_message(), "");
    }

    #[test]
    fn test_end_back_then_confirm_resumes_run() {
        let mut state = in_game(&Tuning::default());
        state.player.pos = Vec2::new(1490.0, 890.0);
        assert_eq!(tick(&mut state, &TickInput::default()), Some(EndCause::Escaped));
        let enemies = state.enemies.clone();

        assert!(!handle_action(&mut state, Action::Help));
        assert!(handle_action(&mut state, Action::Back));
        assert_eq!(state.scene, Scene::Start);

        // Only restart resets; confirm picks the run up where it stopped
        assert!(handle_action(&mut state, Action::Confirm));
        assert_eq!(state.scene, Scene::Game);
        assert_eq!(state.player.pos, Vec2::new(1490.0, 890.0));
        assert_eq!(state.enemies, enemies);

        // Still standing in the goal, so the next frame ends the run again
        assert_eq!(tick(&mut state, &TickInput::default()), Some(EndCause::Escaped));
        assert_eq!(state.scene, Scene::End);
    }

    #[test]
    fn test_end_scene_freezes_simulation() {
        let mut state = in_game(&Tuning::default());
        state.enemies[0].pos = state.player.pos;
        tick(&mut state, &TickInput::default());
        let enemies = state.enemies.clone();

        assert_eq!(tick(&mut state, &TickInput::holding(&[Direction::Down])), None);
        assert_eq!(state.enemies, enemies);
        assert_eq!(state.scene, Scene::End);
    }
}
