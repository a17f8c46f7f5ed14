//! The player's paddle: horizontal-only, clamped to the playfield

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Signed per-frame delta: one of -max_speed, 0, +max_speed
    pub speed: f32,
    pub max_speed: f32,
    field_width: f32,
}

impl Paddle {
    /// Centered horizontally, resting just above the floor
    pub fn new(config: &GameConfig) -> Self {
        let field = config.playfield;
        let cfg = config.paddle;
        Self {
            pos: Vec2::new(
                field.width / 2.0 - cfg.width / 2.0,
                field.height - cfg.height - cfg.floor_gap,
            ),
            width: cfg.width,
            height: cfg.height,
            speed: 0.0,
            max_speed: cfg.max_speed,
            field_width: field.width,
        }
    }

    pub fn move_left(&mut self) {
        self.speed = -self.max_speed;
    }

    pub fn move_right(&mut self) {
        self.speed = self.max_speed;
    }

    pub fn stop(&mut self) {
        self.speed = 0.0;
    }

    /// Left key released: only cancels leftward motion
    pub fn release_left(&mut self) {
        if self.speed < 0.0 {
            self.stop();
        }
    }

    /// Right key released: only cancels rightward motion
    pub fn release_right(&mut self) {
        if self.speed > 0.0 {
            self.stop();
        }
    }

    /// Advance one frame. Speed is a per-frame delta, so `dt` is not applied.
    pub fn update(&mut self, _dt: f32) {
        self.pos.x += self.speed;
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
        if self.pos.x + self.width > self.field_width {
            self.pos.x = self.field_width - self.width;
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_position() {
        let paddle = Paddle::new(&GameConfig::default());
        assert_eq!(paddle.pos, Vec2::new(341.0, 792.0));
        assert_eq!(paddle.speed, 0.0);
    }

    #[test]
    fn test_move_and_stop() {
        let mut paddle = Paddle::new(&GameConfig::default());
        let start = paddle.pos.x;

        paddle.move_right();
        paddle.update(16.0);
        assert_eq!(paddle.pos.x, start + 7.0);

        paddle.move_left();
        paddle.update(16.0);
        paddle.update(16.0);
        assert_eq!(paddle.pos.x, start - 7.0);

        paddle.stop();
        paddle.update(16.0);
        assert_eq!(paddle.pos.x, start - 7.0);
    }

    #[test]
    fn test_release_only_cancels_matching_direction() {
        let mut paddle = Paddle::new(&GameConfig::default());
        paddle.move_right();
        paddle.release_left();
        assert_eq!(paddle.speed, 7.0);
        paddle.release_right();
        assert_eq!(paddle.speed, 0.0);

        paddle.move_left();
        paddle.release_right();
        assert_eq!(paddle.speed, -7.0);
        paddle.release_left();
        assert_eq!(paddle.speed, 0.0);
    }

    #[test]
    fn test_clamps_at_walls() {
        let mut paddle = Paddle::new(&GameConfig::default());
        paddle.pos.x = 3.0;
        paddle.move_left();
        paddle.update(16.0);
        assert_eq!(paddle.pos.x, 0.0);

        paddle.pos.x = 832.0 - 150.0 - 2.0;
        paddle.move_right();
        paddle.update(16.0);
        assert_eq!(paddle.pos.x, 832.0 - 150.0);
    }

    proptest! {
        #[test]
        fn prop_stays_in_bounds(
            start in -50.0f32..900.0,
            dir in -1i32..=1,
            frames in 1usize..200,
        ) {
            let mut paddle = Paddle::new(&GameConfig::default());
            paddle.pos.x = start;
            match dir {
                -1 => paddle.move_left(),
                1 => paddle.move_right(),
                _ => paddle.stop(),
            }
            for _ in 0..frames {
                paddle.update(16.0);
                prop_assert!(paddle.pos.x >= 0.0);
                prop_assert!(paddle.pos.x <= 832.0 - paddle.width);
            }
        }
    }
}
