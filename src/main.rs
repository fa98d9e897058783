//! Maze Escape entry point
//!
//! Runs the game headless: the autopilot plays a few rounds through the same
//! key bindings and frame builder a windowed host would use.
//!
//! Usage: `maze-escape [tuning.json]` (set `RUST_LOG=info` to see the run)

use std::path::Path;

use maze_escape::Tuning;
use maze_escape::consts::SIM_HZ;
use maze_escape::demo::Autopilot;
use maze_escape::platform::InputState;
use maze_escape::renderer::build_frame;
use maze_escape::sim::{GameState, Scene, handle_action, tick};

/// Rounds to play before returning to the start screen
const ROUNDS: u32 = 3;
/// Give up on a round after this many ticks (one minute of play)
const MAX_TICKS_PER_ROUND: u64 = 60 * SIM_HZ as u64;
const DEMO_SEED: u64 = 0x5EED;

fn main() {
    env_logger::init();
    log::info!("Maze Escape (headless) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(Path::new(&path)),
        None => Tuning::default(),
    };

    let mut state = GameState::new(&tuning);
    let mut input = InputState::default();
    let mut pilot = Autopilot::new(DEMO_SEED);

    press(&mut state, &mut input, "Enter");

    let mut escapes = 0;
    let mut played = 0;
    for round in 1..=ROUNDS {
        let mut ticks = 0;
        while state.scene == Scene::Game && ticks < MAX_TICKS_PER_ROUND {
            let held = pilot.next_input();
            if let Some(cause) = tick(&mut state, &held) {
                if cause.is_win() {
                    escapes += 1;
                }
            }
            let frame = build_frame(&state);
            log::trace!("Frame: {} bytes of vertices", frame.vertex_bytes().len());
            ticks += 1;
        }
        played = round;

        if state.scene != Scene::End {
            log::info!(
                "Round {}: no result after {:.0}s at {:?}, stopping",
                round,
                ticks as f32 / SIM_HZ as f32,
                state.player.pos
            );
            break;
        }

        log::info!("Round {}: {}", round, state.end_message());
        if round < ROUNDS {
            press(&mut state, &mut input, "r");
        }
    }

    press(&mut state, &mut input, "b");
    log::info!("Escaped {} of {} rounds played", escapes, played);
}

/// Feed one key press through the bindings into the scene machine
fn press(state: &mut GameState, input: &mut InputState, key: &str) {
    if let Some(action) = input.key_down(key) {
        handle_action(state, action);
    }
    input.key_up(key);
}
