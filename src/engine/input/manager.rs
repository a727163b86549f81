// Input manager - turns winit keyboard events into player commands

use super::action::command_for;
use super::player::PlayerInput;
use log::trace;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Owns the player's command state and feeds it from the window
#[derive(Debug, Default)]
pub struct InputManager {
    player: PlayerInput,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply one key transition; unbound keys and auto-repeat are ignored
    pub fn process_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        let Some(command) = command_for(key) else {
            trace!("Unbound key {key:?}");
            return;
        };

        match state {
            ElementState::Pressed if !repeat => self.player.press(command),
            ElementState::Pressed => {}
            ElementState::Released => self.player.release(command),
        }
    }

    /// Start a new tick
    pub fn update(&mut self) {
        self.player.update();
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerInput {
        &mut self.player
    }

    /// Drop all key state; keys released while unfocused never arrive
    pub fn focus_lost(&mut self) {
        self.player.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::Command;

    #[test]
    fn test_key_press_becomes_command() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyB, ElementState::Pressed, false);
        assert_eq!(manager.player().presses(), &[Command::StartBattle]);
    }

    #[test]
    fn test_repeat_is_ignored() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::Digit1, ElementState::Pressed, true);
        assert!(manager.player().presses().is_empty());
    }

    #[test]
    fn test_release_stops_held_movement() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::ArrowRight, ElementState::Pressed, false);
        manager.update();
        assert!(manager.player().is_pressed(Command::MoveRight));

        manager.process_key(KeyCode::ArrowRight, ElementState::Released, false);
        assert!(!manager.player().is_pressed(Command::MoveRight));
        assert_eq!(manager.player().horizontal(), 0);
    }

    #[test]
    fn test_unbound_key_does_nothing() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyQ, ElementState::Pressed, false);
        assert!(manager.player().presses().is_empty());
    }

    #[test]
    fn test_update_clears_presses() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::Space, ElementState::Pressed, false);
        assert_eq!(manager.player().presses(), &[Command::Confirm]);
        manager.update();
        assert!(manager.player().presses().is_empty());
    }

    #[test]
    fn test_focus_lost_releases_everything() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyA, ElementState::Pressed, false);
        manager.focus_lost();
        assert_eq!(manager.player().horizontal(), 0);
    }
}
