//! Input commands
//!
//! Hosts translate raw key events into `Command`s and queue them; queued
//! commands are applied together between frames, never mid-update.

use std::collections::VecDeque;

use super::state::{GamePhase, GameState};

/// A discrete command from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PaddleLeftDown,
    PaddleLeftUp,
    PaddleRightDown,
    PaddleRightUp,
    TogglePause,
    Start,
}

impl Command {
    /// Reference key binding: arrows steer, Escape pauses, Space starts.
    ///
    /// `key` is a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str, pressed: bool) -> Option<Self> {
        match (key, pressed) {
            ("ArrowLeft", true) => Some(Command::PaddleLeftDown),
            ("ArrowLeft", false) => Some(Command::PaddleLeftUp),
            ("ArrowRight", true) => Some(Command::PaddleRightDown),
            ("ArrowRight", false) => Some(Command::PaddleRightUp),
            ("Escape", true) => Some(Command::TogglePause),
            (" ", true) => Some(Command::Start),
            _ => None,
        }
    }
}

impl GameState {
    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::PaddleLeftDown => self.paddle.move_left(),
            Command::PaddleLeftUp => self.paddle.release_left(),
            Command::PaddleRightDown => self.paddle.move_right(),
            Command::PaddleRightUp => self.paddle.release_right(),
            Command::TogglePause => self.toggle_pause(),
            Command::Start => self.start(),
        }
    }
}

/// Commands buffered between frames
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<Command>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove all pending commands in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.pending.drain(..)
    }
}

/// Demo player: starts the game and keeps the paddle under the ball
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Horizontal slack before the paddle starts chasing
    pub dead_zone: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { dead_zone: 20.0 }
    }
}

impl Autopilot {
    /// The next command to issue, if the paddle isn't already doing the right thing
    pub fn next_command(&self, state: &GameState) -> Option<Command> {
        if state.phase == GamePhase::Menu {
            return Some(Command::Start);
        }
        if state.phase != GamePhase::Running {
            return None;
        }

        let target = state.ball.pos.x + state.ball.size / 2.0;
        let offset = target - state.paddle.center_x();
        let speed = state.paddle.speed;

        if offset < -self.dead_zone {
            (speed >= 0.0).then_some(Command::PaddleLeftDown)
        } else if offset > self.dead_zone {
            (speed <= 0.0).then_some(Command::PaddleRightDown)
        } else if speed < 0.0 {
            Some(Command::PaddleLeftUp)
        } else if speed > 0.0 {
            Some(Command::PaddleRightUp)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_binding() {
        assert_eq!(Command::from_key("ArrowLeft", true), Some(Command::PaddleLeftDown));
        assert_eq!(Command::from_key("ArrowRight", false), Some(Command::PaddleRightUp));
        assert_eq!(Command::from_key("Escape", true), Some(Command::TogglePause));
        assert_eq!(Command::from_key(" ", true), Some(Command::Start));
        assert_eq!(Command::from_key("Escape", false), None);
        assert_eq!(Command::from_key(" ", false), None);
        assert_eq!(Command::from_key("a", true), None);
    }

    #[test]
    fn test_commands_drive_paddle_and_phase() {
        let mut state = GameState::with_defaults();
        state.apply_command(Command::Start);
        assert_eq!(state.phase, GamePhase::Running);

        state.apply_command(Command::PaddleLeftDown);
        assert_eq!(state.paddle.speed, -7.0);
        // Releasing the other direction does not stop the paddle
        state.apply_command(Command::PaddleRightUp);
        assert_eq!(state.paddle.speed, -7.0);
        state.apply_command(Command::PaddleLeftUp);
        assert_eq!(state.paddle.speed, 0.0);

        state.apply_command(Command::TogglePause);
        assert_eq!(state.phase, GamePhase::Paused);
    }

    #[test]
    fn test_queue_preserves_order() {
        let mut queue = InputQueue::new();
        queue.push(Command::Start);
        queue.push(Command::PaddleRightDown);
        assert_eq!(queue.len(), 2);
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec![Command::Start, Command::PaddleRightDown]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_autopilot_chases_ball() {
        let pilot = Autopilot::default();
        let mut state = GameState::with_defaults();
        assert_eq!(pilot.next_command(&state), Some(Command::Start));

        state.start();
        state.ball.pos.x = 20.0;
        assert_eq!(pilot.next_command(&state), Some(Command::PaddleLeftDown));
        state.apply_command(Command::PaddleLeftDown);
        assert_eq!(pilot.next_command(&state), None);

        state.ball.pos.x = state.paddle.center_x() - 8.0;
        assert_eq!(pilot.next_command(&state), Some(Command::PaddleLeftUp));

        state.toggle_pause();
        assert_eq!(pilot.next_command(&state), None);
    }
}
