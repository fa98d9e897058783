//! Axis-aligned rectangle geometry for walls and the goal zone
//!
//! A rectangle is stored as its top-left corner plus size, in world units
//! (y grows downward, matching screen space).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width (extends right from `x`)
    pub w: f32,
    /// Height (extends down from `y`)
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min() + self.size() / 2.0
    }

    /// Closest point on (or inside) the rectangle to `p`
    #[inline]
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.max(self.x).min(self.x + self.w),
            p.y.max(self.y).min(self.y + self.h),
        )
    }

    /// Strict interior test: points on an edge are outside
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.x + self.w && p.y > self.y && p.y < self.y + self.h
    }

    /// Same rectangle shifted by `-offset` (world to screen space)
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x - offset.x, self.y - offset.y, self.w, self.h)
    }
}
