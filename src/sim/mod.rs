//! Simulation module
//!
//! All gameplay logic lives here:
//! - One step per rendered frame
//! - Fixed enemy roster, no randomness
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;
pub mod world;

pub use camera::Camera;
pub use collision::{circle_intersects_rect, circles_overlap, rect_contains_point};
pub use rect::Rect;
pub use state::{EndCause, Enemy, GameState, Player, Scene};
pub use tick::{Action, Direction, TickInput, evaluate, handle_action, tick};
pub use world::World;
