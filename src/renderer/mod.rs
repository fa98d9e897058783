//! Frame building
//!
//! Turns a [`GameState`] into screen-space vertices and text. The host owns
//! the actual drawing surface and only uploads what is built here.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::sim::{GameState, Scene};
use crate::ui::{self, TextLine};

/// Everything the host needs to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear_color: [f32; 4],
    /// World layer already shifted by the camera (triangle list)
    pub world: Vec<Vertex>,
    /// Overlay text, drawn on top without the camera
    pub text: Vec<TextLine>,
}

impl Frame {
    /// Raw bytes of the world layer for a vertex buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.world)
    }
}

/// Build the frame for the current state
pub fn build_frame(state: &GameState) -> Frame {
    let world = match state.scene {
        Scene::Game => world_vertices(state),
        _ => Vec::new(),
    };
    Frame {
        clear_color: colors::BACKGROUND,
        world,
        text: ui::overlay(state),
    }
}

/// Goal, walls, enemies, then the player, in screen space
fn world_vertices(state: &GameState) -> Vec<Vertex> {
    let cam = &state.camera;
    let mut vertices = Vec::new();

    vertices.extend(shapes::rect(
        &state.world.goal().translated(cam.offset),
        colors::GOAL,
    ));

    for wall in state.world.walls() {
        vertices.extend(shapes::rect(&wall.translated(cam.offset), colors::WALL));
    }

    for enemy in &state.enemies {
        vertices.extend(shapes::circle(
            cam.to_screen(enemy.pos),
            enemy.radius,
            colors::ENEMY,
            shapes::CIRCLE_SEGMENTS,
        ));
    }

    vertices.extend(shapes::circle(
        cam.to_screen(state.player.pos),
        state.player.radius,
        colors::PLAYER,
        shapes::CIRCLE_SEGMENTS,
    ));

    log::trace!("Built {} world vertices", vertices.len());
    vertices
}
