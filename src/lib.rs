//! Brick Pong - a paddle-and-bricks arcade game
//!
//! Core modules:
//! - `sim`: Deterministic frame-driven simulation (entities, collisions, phases)
//! - `renderer`: Renderer abstraction and the per-frame draw pass
//! - `config`: Playfield and entity tuning, injected at construction
//! - `error`: Errors at the data boundary (config and level parsing)

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, LevelError};

/// Reference tuning values
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 832.0;
    pub const PLAYFIELD_HEIGHT: f32 = 832.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    /// Per-frame pixel delta while a direction key is held
    pub const PADDLE_MAX_SPEED: f32 = 7.0;
    /// Gap between the paddle's bottom edge and the playfield floor
    pub const PADDLE_FLOOR_GAP: f32 = 10.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 16.0;
    /// Per-frame pixel delta after a reset
    pub const BALL_START_VEL: (f32, f32) = (4.0, -2.0);
    /// Spawn point relative to (center - size/2, floor)
    pub const BALL_SPAWN_OFFSET: (f32, f32) = (10.0, 64.0);

    /// Brick cell dimensions; the grid margin is one cell
    pub const BRICK_WIDTH: f32 = 64.0;
    pub const BRICK_HEIGHT: f32 = 64.0;

    pub const INITIAL_LIVES: u8 = 3;
}
