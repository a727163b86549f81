// Battle partners

use crate::core::Color;

/// Highest rank a partner can be upgraded to
pub const MAX_RANK: u8 = 2;

/// Max hp gained per rank
pub const RANK_HP_BONUS: i32 = 10;

/// A companion that contributes a fixed-damage attack in battle
#[derive(Debug, Clone, PartialEq)]
pub struct Partner {
    pub name: String,
    pub color: Color,
    pub hp: i32,
    pub max_hp: i32,
    /// Name of the battle move
    pub ability: String,
    pub level: i32,
    pub rank: u8,
}

impl Partner {
    pub fn new(name: &str, color: Color, hp: i32, ability: &str) -> Self {
        Self {
            name: name.to_string(),
            color,
            hp,
            max_hp: hp,
            ability: ability.to_string(),
            level: 1,
            rank: 0,
        }
    }

    /// Damage dealt by the partner's move before defense
    ///
    /// Rank only counts when the rank system is enabled.
    pub fn ability_damage(&self, ranked: bool) -> i32 {
        let rank_bonus = if ranked { 2 * self.rank as i32 } else { 0 };
        3 + self.level + rank_bonus
    }

    /// Raise rank by one (up to `MAX_RANK`), adding max hp and healing fully
    ///
    /// Returns false when already at max rank.
    pub fn upgrade(&mut self) -> bool {
        if self.rank >= MAX_RANK {
            return false;
        }
        self.rank += 1;
        self.max_hp += RANK_HP_BONUS;
        self.hp = self.max_hp;
        true
    }
}
