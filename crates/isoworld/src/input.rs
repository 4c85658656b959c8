//! Player input as seen by game logic.
//!
//! Key mapping lives in whatever implements [`InputSource`]; the engine
//! only sees which directions are held and whether to quit.

use std::collections::VecDeque;

use isoworld_shared::Vec2;

/// Held movement keys (W/A/S/D) and the quit request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    /// Move up the screen (W).
    pub up: bool,
    /// Move left (A).
    pub left: bool,
    /// Move down the screen (S).
    pub down: bool,
    /// Move right (D).
    pub right: bool,
    /// Stop the engine.
    pub quit: bool,
}

impl InputState {
    /// A state with only the quit flag set.
    pub const QUIT: Self = Self {
        up: false,
        left: false,
        down: false,
        right: false,
        quit: true,
    };

    /// Screen-space movement direction, unit length or zero. Opposite keys
    /// cancel out; diagonals are not faster than straight moves.
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| f32::from(u8::from(pos)) - f32::from(u8::from(neg));
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down)).normalized_or_zero()
    }
}

/// Produces one [`InputState`] per frame.
pub trait InputSource {
    /// Samples the current input.
    fn poll(&mut self) -> InputState;
}

/// Replays a fixed list of states, then reports `QUIT` forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputState>,
}

impl ScriptedInput {
    /// Plays `frames` in order.
    #[must_use]
    pub fn new(frames: impl IntoIterator<Item = InputState>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Holds `state` for `count` frames.
    #[must_use]
    pub fn hold(state: InputState, count: usize) -> Self {
        Self::new(std::iter::repeat(state).take(count))
    }

    /// Frames left before the script ends.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputState {
        self.frames.pop_front().unwrap_or(InputState::QUIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_normalized() {
        let diag = InputState {
            up: true,
            right: true,
            ..InputState::default()
        };
        let d = diag.direction();
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!(d.x > 0.0 && d.y < 0.0);

        let down = InputState {
            down: true,
            ..InputState::default()
        };
        assert_eq!(down.direction(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_opposites_cancel() {
        let state = InputState {
            left: true,
            right: true,
            ..InputState::default()
        };
        assert_eq!(state.direction(), Vec2::ZERO);
        assert_eq!(InputState::default().direction(), Vec2::ZERO);
    }

    #[test]
    fn test_script_then_quit() {
        let walk = InputState {
            right: true,
            ..InputState::default()
        };
        let mut input = ScriptedInput::hold(walk, 2);
        assert_eq!(input.remaining(), 2);
        assert_eq!(input.poll(), walk);
        assert_eq!(input.poll(), walk);
        assert!(input.poll().quit);
        assert!(input.poll().quit);
    }
}
