//! Game configuration
//!
//! Fixed for the lifetime of a `GameState`. Every field has a reference
//! default in `crate::consts`; JSON documents may override any subset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Playfield size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    pub max_speed: f32,
    /// Distance from the paddle's bottom edge to the floor
    pub floor_gap: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            max_speed: PADDLE_MAX_SPEED,
            floor_gap: PADDLE_FLOOR_GAP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    /// Diameter; the ball collides as a square of this side
    pub size: f32,
    /// Velocity assigned on every reset (pixels per frame)
    pub initial_velocity: Vec2,
    /// x: shift right of center, y: distance above the floor
    pub spawn_offset: Vec2,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            size: BALL_SIZE,
            initial_velocity: Vec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
            spawn_offset: Vec2::new(BALL_SPAWN_OFFSET.0, BALL_SPAWN_OFFSET.1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for BrickConfig {
    fn default() -> Self {
        Self {
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield: Playfield,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
    pub brick: BrickConfig,
    pub initial_lives: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),
            paddle: PaddleConfig::default(),
            ball: BallConfig::default(),
            brick: BrickConfig::default(),
            initial_lives: INITIAL_LIVES,
        }
    }
}

impl GameConfig {
    /// Reference configuration with the given playfield size
    pub fn with_playfield(width: f32, height: f32) -> Self {
        Self {
            playfield: Playfield { width, height },
            ..Self::default()
        }
    }

    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "Loaded config: playfield {}x{}, {} lives",
            config.playfield.width,
            config.playfield.height,
            config.initial_lives
        );
        Ok(config)
    }

    /// Check that dimensions are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("playfield.width", self.playfield.width),
            ("playfield.height", self.playfield.height),
            ("paddle.width", self.paddle.width),
            ("paddle.height", self.paddle.height),
            ("ball.size", self.ball.size),
            ("brick.width", self.brick.width),
            ("brick.height", self.brick.height),
        ];
        for (name, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !self.paddle.max_speed.is_finite() || self.paddle.max_speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "paddle.max_speed must be non-negative, got {}",
                self.paddle.max_speed
            )));
        }
        if self.paddle.width > self.playfield.width {
            return Err(ConfigError::Invalid(format!(
                "paddle.width {} exceeds playfield width {}",
                self.paddle.width, self.playfield.width
            )));
        }
        if self.ball.size >= self.playfield.width.min(self.playfield.height) {
            return Err(ConfigError::Invalid(format!(
                "ball.size {} does not fit the playfield",
                self.ball.size
            )));
        }
        if self.initial_lives == 0 {
            return Err(ConfigError::Invalid("initial_lives must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_values() {
        let config = GameConfig::default();
        assert_eq!(config.playfield.width, 832.0);
        assert_eq!(config.paddle.width, 150.0);
        assert_eq!(config.ball.initial_velocity, Vec2::new(4.0, -2.0));
        assert_eq!(config.initial_lives, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            GameConfig::from_json(r#"{ "playfield": { "width": 640 }, "initial_lives": 5 }"#)
                .unwrap();
        assert_eq!(config.playfield.width, 640.0);
        assert_eq!(config.playfield.height, PLAYFIELD_HEIGHT);
        assert_eq!(config.initial_lives, 5);
        assert_eq!(config.brick, BrickConfig::default());
    }

    #[test]
    fn test_rejects_bad_documents() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "initial_lives": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "paddle": { "width": 900 } }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "brick": { "height": -1 } }"#),
            Err(ConfigError::Invalid(_))
        ));
    }
}
