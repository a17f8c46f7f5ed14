//! The ball: constant-speed body that reflects off walls, bricks and the paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Side, detect_collision_side};
use super::paddle::Paddle;
use super::rect::Rect;
use super::state::GameEvent;
use crate::config::{GameConfig, Playfield};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Diameter
    pub size: f32,
    /// Per-frame delta; components only ever change sign
    pub vel: Vec2,
    /// Set once the velocity has been flipped by a brick this frame
    pub dir_changed: bool,
    field: Playfield,
    initial_vel: Vec2,
    spawn_offset: Vec2,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            size: config.ball.size,
            vel: Vec2::ZERO,
            dir_changed: false,
            field: config.playfield,
            initial_vel: config.ball.initial_velocity,
            spawn_offset: config.ball.spawn_offset,
        };
        ball.reset();
        ball
    }

    /// Where the ball respawns: just right of center, above the paddle row
    pub fn spawn_position(&self) -> Vec2 {
        Vec2::new(
            self.field.center_x() - self.size / 2.0 + self.spawn_offset.x,
            self.field.height - self.spawn_offset.y,
        )
    }

    /// Back to the spawn point with the initial velocity
    pub fn reset(&mut self) {
        self.pos = self.spawn_position();
        self.vel = self.initial_vel;
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    /// Flip the velocity component matching `side`, at most once per frame.
    ///
    /// Returns true if the velocity changed.
    pub fn deflect(&mut self, side: Side) -> bool {
        if self.dir_changed {
            return false;
        }
        if side.is_horizontal_face() {
            self.vel.y = -self.vel.y;
        } else {
            self.vel.x = -self.vel.x;
        }
        self.dir_changed = true;
        true
    }

    /// Advance one frame.
    ///
    /// Crossing the floor costs a life; the ball respawns only while lives
    /// remain; at zero it is left past the floor for the game to notice.
    pub fn update(
        &mut self,
        _dt: f32,
        paddle: &Paddle,
        lives: &mut u8,
        events: &mut Vec<GameEvent>,
    ) {
        self.pos += self.vel;
        self.dir_changed = false;

        // Side walls
        if self.pos.x + self.size > self.field.width || self.pos.x < 0.0 {
            self.vel.x = -self.vel.x;
            events.push(GameEvent::WallBounce);
        }
        // Ceiling
        if self.pos.y < 0.0 {
            self.vel.y = -self.vel.y;
            events.push(GameEvent::WallBounce);
        }

        // Floor
        if self.pos.y + self.size > self.field.height {
            *lives = lives.saturating_sub(1);
            log::debug!("Ball lost at x={:.1}, {} lives left", self.pos.x, lives);
            events.push(GameEvent::BallLost { lives_left: *lives });
            if *lives != 0 {
                self.reset();
            }
        }

        if detect_collision_side(self.pos, self.size, &paddle.rect()).is_some() {
            self.vel.y = -self.vel.y;
            // Rest on top of the paddle so the next frame can't re-trigger
            self.pos.y = paddle.pos.y - self.size;
            events.push(GameEvent::PaddleHit);
        }
    }
}
