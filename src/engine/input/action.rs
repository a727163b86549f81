// Game commands and their fixed key bindings

use winit::keyboard::KeyCode;

/// Every discrete command the game understands
///
/// Movement is level-triggered (held keys); everything else is edge-triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Screens
    Confirm,
    Cancel,
    Menu,

    // Overworld
    CyclePartner,
    StartBattle,

    Restart,

    /// Number row: battle actions, content-set choice, paper modes
    Slot(u8),
}

/// Fixed keyboard layout
pub fn default_bindings() -> Vec<(KeyCode, Command)> {
    let mut bindings = vec![
        // Movement (arrows or A/D, jump on Up/W)
        (KeyCode::ArrowLeft, Command::MoveLeft),
        (KeyCode::KeyA, Command::MoveLeft),
        (KeyCode::ArrowRight, Command::MoveRight),
        (KeyCode::KeyD, Command::MoveRight),
        (KeyCode::ArrowUp, Command::Jump),
        (KeyCode::KeyW, Command::Jump),
        (KeyCode::Space, Command::Confirm),
        (KeyCode::Enter, Command::Confirm),
        (KeyCode::Escape, Command::Cancel),
        (KeyCode::KeyM, Command::Menu),
        (KeyCode::KeyP, Command::CyclePartner),
        (KeyCode::KeyB, Command::StartBattle),
        (KeyCode::KeyR, Command::Restart),
    ];

    let digits = [
        KeyCode::Digit0,
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
    ];
    bindings.extend(
        digits
            .into_iter()
            .zip(0u8..)
            .map(|(key, slot)| (key, Command::Slot(slot))),
    );

    bindings
}

/// Command bound to a physical key, if any
pub fn command_for(key: KeyCode) -> Option<Command> {
    default_bindings()
        .into_iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, command)| command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_command_equality() {
        assert_eq!(Command::Jump, Command::Jump);
        assert_ne!(Command::Slot(1), Command::Slot(2));
    }

    #[test]
    fn test_both_layouts_move() {
        assert_eq!(command_for(KeyCode::ArrowLeft), Some(Command::MoveLeft));
        assert_eq!(command_for(KeyCode::KeyA), Some(Command::MoveLeft));
        assert_eq!(command_for(KeyCode::KeyD), Some(Command::MoveRight));
        assert_eq!(command_for(KeyCode::KeyW), Some(Command::Jump));
        assert_eq!(command_for(KeyCode::ArrowUp), Some(Command::Jump));
    }

    #[test]
    fn test_digits_map_to_slots() {
        assert_eq!(command_for(KeyCode::Digit0), Some(Command::Slot(0)));
        assert_eq!(command_for(KeyCode::Digit5), Some(Command::Slot(5)));
        assert_eq!(command_for(KeyCode::Digit9), Some(Command::Slot(9)));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(command_for(KeyCode::KeyZ), None);
        assert_eq!(command_for(KeyCode::F1), None);
    }

    #[test]
    fn test_no_key_bound_twice() {
        let bindings = default_bindings();
        let keys: HashSet<KeyCode> = bindings.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys.len(), bindings.len());
    }
}
