//! Platform abstraction layer
//!
//! Handles the host side of input: key names in, logical directions and
//! actions out.

pub mod input;

pub use input::{Binding, InputState, KeyBindings};
