//! Frame step
//!
//! One call per animation frame: apply every command queued since the last
//! frame, then advance the simulation.

use super::input::InputQueue;
use super::state::GameState;

/// Advance the game by one frame.
///
/// `dt` is the wall-clock time since the previous frame as measured by the
/// host. Movement is per-frame, so it is passed through but not integrated.
pub fn tick(state: &mut GameState, input: &mut InputQueue, dt: f32) {
    for command in input.drain() {
        log::trace!("Applying {:?}", command);
        state.apply_command(command);
    }
    state.update(dt);
}
