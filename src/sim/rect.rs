//! Axis-aligned rectangles in screen space (y grows downward)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self { pos, width, height }
    }

    /// A square of side `size`, as the ball is treated for collisions
    pub fn square(pos: Vec2, size: f32) -> Self {
        Self::new(pos, size, size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Overlap on both axes; touching edges count as overlapping
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.bottom() >= other.top()
            && self.top() <= other.bottom()
            && self.right() >= other.left()
            && self.left() <= other.right()
    }
}
