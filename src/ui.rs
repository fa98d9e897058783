//! Screen text for each scene
//!
//! Positions are in screen pixels; the host picks the font.

use glam::Vec2;

use crate::sim::{GameState, Scene};

pub const TITLE: &str = "MAZE ESCAPE";

const INSTRUCTIONS: &str = "- Use WASD or Arrow Keys to move\n\
                            - Avoid walls (they're chemical hazards)\n\
                            - Avoid monsters in the maze\n\
                            - Reach the green goal zone to win\n\n\
                            Press B to go back";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `pos` is the top-left of the text block
    TopLeft,
    /// `pos` is the center of the text block
    Center,
}

/// One block of text to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub align: Align,
}

impl TextLine {
    fn new(text: &str, pos: Vec2, size: f32, align: Align) -> Self {
        Self {
            text: text.to_string(),
            pos,
            size,
            align,
        }
    }
}

/// Text overlay for the active scene
pub fn overlay(state: &GameState) -> Vec<TextLine> {
    let mid = state.world.view_size / 2.0;
    match state.scene {
        Scene::Start => vec![
            TextLine::new(TITLE, mid + Vec2::new(0.0, -40.0), 40.0, Align::Center),
            TextLine::new("Press ENTER to Start", mid + Vec2::new(0.0, 10.0), 16.0, Align::Center),
            TextLine::new(
                "Press I for Instructions",
                mid + Vec2::new(0.0, 35.0),
                16.0,
                Align::Center,
            ),
        ],
        Scene::Instructions => vec![
            TextLine::new("Instructions", Vec2::new(40.0, 40.0), 18.0, Align::TopLeft),
            TextLine::new(INSTRUCTIONS, Vec2::new(40.0, 80.0), 14.0, Align::TopLeft),
        ],
        Scene::Game => vec![TextLine::new(
            "Reach the green zone. Avoid walls + monsters.",
            Vec2::new(10.0, 10.0),
            12.0,
            Align::TopLeft,
        )],
        Scene::End => vec![
            TextLine::new(state.end_message(), mid + Vec2::new(0.0, -10.0), 24.0, Align::Center),
            TextLine::new(
                "Press R to restart (or B for Start Screen)",
                mid + Vec2::new(0.0, 25.0),
                14.0,
                Align::Center,
            ),
        ],
    }
}
