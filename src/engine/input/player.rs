// Per-frame keyboard state as commands

use super::action::Command;
use std::collections::HashSet;

/// Command state of the single local player
///
/// Held commands stay set while their key is down; presses are recorded in
/// arrival order until the next `update`.
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Commands whose key is currently down
    pressed: HashSet<Command>,

    /// Commands pressed since the last update, oldest first
    just_pressed: Vec<Command>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self, command: Command) -> bool {
        self.pressed.contains(&command)
    }

    /// Presses since the last update, in the order they happened
    pub fn presses(&self) -> &[Command] {
        &self.just_pressed
    }

    /// Horizontal direction from the held movement keys: -1, 0 or 1
    pub fn horizontal(&self) -> i8 {
        let left = self.is_pressed(Command::MoveLeft) as i8;
        let right = self.is_pressed(Command::MoveRight) as i8;
        right - left
    }

    /// Register a key going down
    pub fn press(&mut self, command: Command) {
        if self.pressed.insert(command) {
            self.just_pressed.push(command);
        }
    }

    /// Register a key going up
    pub fn release(&mut self, command: Command) {
        self.pressed.remove(&command);
    }

    /// Start a new tick; call after the session has consumed the presses
    pub fn update(&mut self) {
        self.just_pressed.clear();
    }

    /// Forget everything, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = PlayerInput::new();
        input.press(Command::Jump);
        assert!(input.is_pressed(Command::Jump));
        assert_eq!(input.presses(), &[Command::Jump]);

        input.release(Command::Jump);
        assert!(!input.is_pressed(Command::Jump));
    }

    #[test]
    fn test_repeat_press_is_not_a_new_edge() {
        let mut input = PlayerInput::new();
        input.press(Command::Slot(1));
        input.update();
        input.press(Command::Slot(1));
        assert!(input.presses().is_empty());
        assert!(input.is_pressed(Command::Slot(1)));
    }

    #[test]
    fn test_presses_keep_order() {
        let mut input = PlayerInput::new();
        input.press(Command::Slot(2));
        input.press(Command::Confirm);
        input.press(Command::Slot(1));
        assert_eq!(
            input.presses(),
            &[Command::Slot(2), Command::Confirm, Command::Slot(1)]
        );
    }

    #[test]
    fn test_update_clears_edges_keeps_held() {
        let mut input = PlayerInput::new();
        input.press(Command::MoveLeft);
        input.update();
        assert!(input.presses().is_empty());
        assert!(input.is_pressed(Command::MoveLeft));
        assert_eq!(input.horizontal(), -1);
    }

    #[test]
    fn test_release_then_press_is_a_new_edge() {
        let mut input = PlayerInput::new();
        input.press(Command::Jump);
        input.update();
        input.release(Command::Jump);
        input.press(Command::Jump);
        assert_eq!(input.presses(), &[Command::Jump]);
    }

    #[test]
    fn test_horizontal() {
        let mut input = PlayerInput::new();
        assert_eq!(input.horizontal(), 0);
        input.press(Command::MoveLeft);
        assert_eq!(input.horizontal(), -1);
        input.press(Command::MoveRight);
        assert_eq!(input.horizontal(), 0);
        input.release(Command::MoveLeft);
        assert_eq!(input.horizontal(), 1);
    }

    #[test]
    fn test_reset() {
        let mut input = PlayerInput::new();
        input.press(Command::MoveRight);
        input.reset();
        assert!(!input.is_pressed(Command::MoveRight));
        assert!(input.presses().is_empty());
    }
}
