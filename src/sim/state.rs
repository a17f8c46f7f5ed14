//! Game state and phase machine
//!
//! `GameState` exclusively owns every entity. Each phase has its own update
//! handler; entities only ever see the pieces of state they need, passed in
//! explicitly for the duration of a call.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::brick::Brick;
use super::level::{Level, build_level, default_levels};
use super::paddle::Paddle;
use crate::config::GameConfig;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start command
    Menu,
    /// Active gameplay
    Running,
    /// Frozen until resumed
    Paused,
    /// Level cleared; the next one is being built this frame
    NewLevel,
    /// Out of lives
    GameOver,
}

impl GamePhase {
    /// Whether entities advance during this phase
    pub fn is_simulating(self) -> bool {
        matches!(self, GamePhase::Running | GamePhase::NewLevel)
    }
}

/// Things that happened during a frame, for sound and HUD hooks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started { level: usize },
    WallBounce,
    PaddleHit,
    BrickDestroyed { position: Vec2 },
    BallLost { lives_left: u8 },
    LevelCleared { next_level: usize },
    Paused,
    Resumed,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Only ever decreases
    pub lives: u8,
    /// Index into `levels` of the level being played
    pub level_index: usize,
    pub levels: Vec<Level>,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Active bricks
    pub bricks: Vec<Brick>,
    /// Simulated frames (excludes frozen phases)
    pub frame: u64,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// New game sitting at the menu
    pub fn new(config: GameConfig, levels: Vec<Level>) -> Self {
        let levels = if levels.is_empty() {
            log::warn!("No levels supplied, using the built-in set");
            default_levels()
        } else {
            levels
        };

        Self {
            phase: GamePhase::Menu,
            lives: config.initial_lives,
            level_index: 0,
            levels,
            ball: Ball::new(&config),
            paddle: Paddle::new(&config),
            bricks: Vec::new(),
            frame: 0,
            events: Vec::new(),
            config,
        }
    }

    /// Reference config and built-in levels
    pub fn with_defaults() -> Self {
        Self::new(GameConfig::default(), default_levels())
    }

    /// Build the current level and serve. No-op outside Menu/NewLevel.
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Menu | GamePhase::NewLevel => {}
            other => {
                log::debug!("Start ignored in {:?}", other);
                return;
            }
        }

        self.bricks = build_level(&self.levels[self.level_index], &self.config.brick);
        self.ball.reset();
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started {
            level: self.level_index,
        });
        log::info!(
            "Level {} started with {} bricks",
            self.level_index + 1,
            self.bricks.len()
        );
    }

    /// Toggle between Running and Paused; other phases are unaffected
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                self.events.push(GameEvent::Paused);
                log::info!("Paused");
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                self.events.push(GameEvent::Resumed);
                log::info!("Resumed");
            }
            other => log::debug!("Pause toggle ignored in {:?}", other),
        }
    }

    /// Advance one frame
    pub fn update(&mut self, dt: f32) {
        // Losing the last life overrides everything else
        if self.lives == 0 {
            self.enter_game_over();
        }

        match self.phase {
            GamePhase::Menu | GamePhase::Paused | GamePhase::GameOver => {}
            GamePhase::Running | GamePhase::NewLevel => self.update_playing(dt),
        }
    }

    fn update_playing(&mut self, dt: f32) {
        if self.bricks.is_empty() {
            self.advance_level();
        }

        self.ball
            .update(dt, &self.paddle, &mut self.lives, &mut self.events);
        self.paddle.update(dt);
        for brick in &mut self.bricks {
            if brick.update(&mut self.ball).is_some() {
                self.events.push(GameEvent::BrickDestroyed {
                    position: brick.pos,
                });
            }
        }

        let before = self.bricks.len();
        self.bricks.retain(|b| !b.marked_for_removal);
        if self.bricks.len() != before {
            log::debug!("{} bricks left", self.bricks.len());
        }

        self.frame += 1;
        log::trace!(
            "frame {} ball {:?} vel {:?}",
            self.frame,
            self.ball.pos,
            self.ball.vel
        );

        if self.lives == 0 {
            self.enter_game_over();
        }
    }

    /// Move to the next level (wrapping) and start it
    fn advance_level(&mut self) {
        self.level_index = (self.level_index + 1) % self.levels.len();
        self.phase = GamePhase::NewLevel;
        self.events.push(GameEvent::LevelCleared {
            next_level: self.level_index,
        });
        log::info!("Level cleared, advancing to level {}", self.level_index + 1);
        self.start();
    }

    fn enter_game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver);
        log::info!("Game over on level {}", self.level_index + 1);
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at undrained events
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
