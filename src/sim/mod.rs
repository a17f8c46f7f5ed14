//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `update` per host frame, movement in per-frame pixel deltas
//! - No randomness
//! - Stable iteration order (bricks in level row-major order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod brick;
pub mod collision;
pub mod input;
pub mod level;
pub mod paddle;
pub mod rect;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use brick::Brick;
pub use collision::{Side, detect_collision_side};
pub use input::{Autopilot, Command, InputQueue};
pub use level::{Level, build_level, default_levels, levels_from_json};
pub use paddle::Paddle;
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::tick;
