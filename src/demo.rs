//! Idle/demo mode - a seeded autopilot that wanders the maze
//!
//! Not smart: it holds a random set of directions for a while, then picks
//! again. Same seed, same inputs.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Direction, TickInput};

/// Ticks to hold one direction set before re-rolling
pub const DEFAULT_HOLD_TICKS: u32 = 45;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    hold_ticks: u32,
    remaining: u32,
    current: TickInput,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self::with_hold(seed, DEFAULT_HOLD_TICKS)
    }

    pub fn with_hold(seed: u64, hold_ticks: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            hold_ticks: hold_ticks.max(1),
            remaining: 0,
            current: TickInput::default(),
        }
    }

    /// Input for the next tick
    pub fn next_input(&mut self) -> TickInput {
        if self.remaining == 0 {
            self.current = self.roll();
            self.remaining = self.hold_ticks;
        }
        self.remaining -= 1;
        self.current
    }

    /// Pick up to one vertical and one horizontal direction, biased toward
    /// the goal corner (down/right)
    fn roll(&mut self) -> TickInput {
        let mut held = Vec::with_capacity(2);
        match self.rng.random_range(0..5) {
            0 => held.push(Direction::Up),
            1 | 2 => held.push(Direction::Down),
            _ => {}
        }
        match self.rng.random_range(0..5) {
            0 => held.push(Direction::Left),
            1 | 2 => held.push(Direction::Right),
            _ => {}
        }
        TickInput::holding(&held)
    }
}
