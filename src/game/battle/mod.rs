// Turn-based battle system

pub mod action;
pub mod audience;
pub mod engine;

pub use action::{BattleAction, Outcome, Turn};
pub use audience::Audience;
pub use engine::{Battle, BattleRules, Party, ENEMY_TURN_DELAY, HERO_NAME, MAX_COMBATANTS};
