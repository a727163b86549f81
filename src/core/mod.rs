// Core utilities shared by the engine and the game

pub mod color;
pub mod dice;
pub mod math;

pub use color::Color;
pub use dice::{Dice, RandomDice};
pub use math::Rect;
