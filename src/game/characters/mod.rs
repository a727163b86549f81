// Character system
//
// This module contains the combatants of the game:
// - The player character with its progression
// - Battle partners
// - Enemies
// - Shared stats and combat math

pub mod enemy;
pub mod partner;
pub mod player;
pub mod stats;

// Re-export commonly used types
pub use enemy::Enemy;
pub use partner::Partner;
pub use player::{Ability, Milestones, PlayerCharacter, START_POSITION};
pub use stats::{mitigate, CharacterStats};
