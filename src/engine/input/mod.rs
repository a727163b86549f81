// Keyboard input
//
// Keys map to a fixed set of game commands. Movement is read from held keys,
// every other command from key presses, delivered in the order they happened.
//
// ## Architecture
//
// - `action`: The command set and its key bindings
// - `buffer`: Short-lived command memory (jump buffering)
// - `player`: Per-tick command state
// - `manager`: Feeds winit keyboard events into the command state
//
// ## Usage
//
// ```rust
// let mut input = InputManager::new();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once per fixed tick
// session.tick(input.player());
// input.update();
// ```

pub mod action;
pub mod buffer;
pub mod manager;
pub mod player;

pub use action::Command;
pub use buffer::InputBuffer;
pub use manager::InputManager;
pub use player::PlayerInput;
