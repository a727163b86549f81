// Enemies

use crate::core::math::fraction;
use crate::core::Color;

use super::stats::mitigate;

/// An enemy as listed in a chapter roster or fighting in a battle
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub name: String,
    /// May go negative; the enemy is defeated at or below zero
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub color: Color,
    pub exp_reward: i32,
}

impl Enemy {
    pub fn new(
        name: &str,
        hp: i32,
        attack: i32,
        defense: i32,
        color: Color,
        exp_reward: i32,
    ) -> Self {
        Self {
            name: name.to_string(),
            hp,
            max_hp: hp,
            attack,
            defense,
            color,
            exp_reward,
        }
    }

    /// Apply raw damage reduced by defense; returns the damage dealt
    pub fn take_damage(&mut self, raw: i32) -> i32 {
        let damage = mitigate(raw, self.defense);
        self.hp -= damage;
        damage
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Remaining hp as a `0.0..=1.0` fraction for health bars
    pub fn hp_fraction(&self) -> f32 {
        fraction(self.hp, self.max_hp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_take_damage_applies_defense() {
        let mut koopa = Enemy::new("Koopa Troopa", 8, 3, 1, Color::GREEN, 20);
        assert_eq!(koopa.take_damage(5), 4);
        assert_eq!(koopa.hp, 4);
    }

    #[test]
    fn test_chip_damage_always_lands() {
        let mut cleft = Enemy::new("Iron Cleft", 15, 5, 4, Color::GRAY, 35);
        assert_eq!(cleft.take_damage(2), 1);
        assert_eq!(cleft.hp, 14);
    }

    #[test]
    fn test_overkill_goes_negative() {
        let mut goomba = Enemy::new("Goomba", 5, 2, 0, Color::BROWN, 10);
        assert_eq!(goomba.take_damage(9), 9);
        assert_eq!(goomba.hp, -4);
        assert!(goomba.is_defeated());
        assert_relative_eq!(goomba.hp_fraction(), 0.0);
    }

    #[test]
    fn test_hp_fraction() {
        let mut goomba = Enemy::new("Goomba", 4, 2, 0, Color::BROWN, 10);
        goomba.take_damage(1);
        assert_relative_eq!(goomba.hp_fraction(), 0.75);
    }
}
