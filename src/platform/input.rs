//! Keyboard bindings
//!
//! Physical keys are named by their browser `KeyboardEvent.key` string. The
//! table turns them into held directions or discrete actions; the simulation
//! never sees a key name.

use std::collections::{HashMap, HashSet};

use crate::sim::{Action, Direction, TickInput};

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Moves while held
    Held(Direction),
    /// Fires once per key press
    Action(Action),
}

/// Key name to binding table
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<String, Binding>,
}

impl Default for KeyBindings {
    /// Arrow keys and WASD move, Enter/I/B/R drive the menus
    fn default() -> Self {
        let mut bindings = Self::empty();
        let table = [
            (&["ArrowUp", "w", "W"][..], Binding::Held(Direction::Up)),
            (&["ArrowDown", "s", "S"][..], Binding::Held(Direction::Down)),
            (&["ArrowLeft", "a", "A"][..], Binding::Held(Direction::Left)),
            (&["ArrowRight", "d", "D"][..], Binding::Held(Direction::Right)),
            (&["Enter"][..], Binding::Action(Action::Confirm)),
            (&["i", "I"][..], Binding::Action(Action::Help)),
            (&["b", "B"][..], Binding::Action(Action::Back)),
            (&["r", "R"][..], Binding::Action(Action::Restart)),
        ];
        for (keys, binding) in table {
            for key in keys {
                bindings.bind(key, binding);
            }
        }
        bindings
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind (or rebind) a key
    pub fn bind(&mut self, key: &str, binding: Binding) {
        self.map.insert(key.to_string(), binding);
    }

    pub fn unbind(&mut self, key: &str) {
        self.map.remove(key);
    }

    pub fn get(&self, key: &str) -> Option<Binding> {
        self.map.get(key).copied()
    }
}

/// Tracks which bound keys are down
#[derive(Debug, Clone, Default)]
pub struct InputState {
    bindings: KeyBindings,
    held_keys: HashSet<String>,
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held_keys: HashSet::new(),
        }
    }

    /// Record a key press; returns the action it fires, if any
    pub fn key_down(&mut self, key: &str) -> Option<Action> {
        match self.bindings.get(key)? {
            Binding::Held(_) => {
                self.held_keys.insert(key.to_string());
                None
            }
            Binding::Action(action) => Some(action),
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.held_keys.remove(key);
    }

    /// Drop every held key (window lost focus)
    pub fn release_all(&mut self) {
        self.held_keys.clear();
    }

    /// Snapshot of held directions; a direction is held while any of its keys is
    pub fn held(&self) -> TickInput {
        let mut input = TickInput::default();
        for key in &self.held_keys {
            if let Some(Binding::Held(direction)) = self.bindings.get(key) {
                input.set(direction, true);
            }
        }
        input
    }
}
