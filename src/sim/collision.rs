//! Collision predicates for circles against walls, the goal and each other
//!
//! Everything in the maze is either a circle (player, enemies) or an
//! axis-aligned rectangle (walls, goal), so three tests cover the game.

use glam::Vec2;

use super::rect::Rect;

/// Check overlap between a circle and a rectangle (clamp method)
///
/// The circle center is clamped into the rectangle to find the nearest
/// point; the shapes touch when that point is within `radius`. Touching
/// exactly at the radius counts as a hit.
#[inline]
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.distance_squared(rect.nearest_point(center)) <= radius * radius
}

/// Check whether a point lies strictly inside a rectangle
///
/// Used for the goal: the player counts as inside once its center crosses
/// the edge, so the effective zone is shrunk by the player's radius.
#[inline]
pub fn rect_contains_point(rect: &Rect, point: Vec2) -> bool {
    rect.contains_point(point)
}

/// Check overlap between two circles (touching does not count)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) < reach * reach
}
