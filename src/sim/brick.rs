//! Destructible bricks

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::{Side, detect_collision_side};
use super::rect::Rect;
use crate::config::BrickConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Purged from the active set at the end of the frame
    pub marked_for_removal: bool,
}

impl Brick {
    pub fn new(pos: Vec2, config: &BrickConfig) -> Self {
        Self {
            pos,
            width: config.width,
            height: config.height,
            marked_for_removal: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }

    /// Test against the ball. Any hit marks the brick for removal; the ball
    /// is only deflected if nothing else has deflected it this frame.
    pub fn update(&mut self, ball: &mut Ball) -> Option<Side> {
        let side = detect_collision_side(ball.pos, ball.size, &self.rect())?;
        ball.deflect(side);
        self.marked_for_removal = true;
        Some(side)
    }
}
