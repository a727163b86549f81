// The player character: overworld body plus RPG progression

use std::collections::HashSet;

use crate::engine::physics::{Body, PaperMode};

use super::stats::{CharacterStats, LEVEL_GROWTH};

/// Where the player appears at the start of every chapter and after a fall
pub const START_POSITION: (f32, f32) = (100.0, 400.0);

/// Field and battle abilities unlocked through chapter progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    Hammer,
    SuperJump,
    SpinJump,
    SpringJump,
}

impl Ability {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hammer => "Hammer",
            Self::SuperJump => "Super Jump",
            Self::SpinJump => "Spin Jump",
            Self::SpringJump => "Spring Jump",
        }
    }
}

/// Chapter rewards collected so far
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Milestones {
    pub star_points: u32,
    pub crystal_stars: Vec<String>,
}

impl Milestones {
    /// Total number of milestones of either kind
    pub fn count(&self) -> usize {
        self.star_points as usize + self.crystal_stars.len()
    }
}

/// The player character
#[derive(Debug, Clone)]
pub struct PlayerCharacter {
    pub body: Body,

    pub level: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub fp: i32,
    pub max_fp: i32,
    pub bp: i32,
    pub max_bp: i32,
    pub attack: i32,
    pub defense: i32,
    pub exp: i32,
    pub exp_to_next: i32,
    pub coins: u32,

    pub milestones: Milestones,
    abilities: HashSet<Ability>,
}

impl Default for PlayerCharacter {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerCharacter {
    /// Fresh level 1 character at the chapter start point
    pub fn new() -> Self {
        Self::with_stats(CharacterStats::standard())
    }

    pub fn with_stats(stats: CharacterStats) -> Self {
        let (x, y) = START_POSITION;
        Self {
            body: Body::new(x, y),
            level: 1,
            hp: stats.max_hp,
            max_hp: stats.max_hp,
            fp: stats.max_fp,
            max_fp: stats.max_fp,
            bp: stats.max_bp,
            max_bp: stats.max_bp,
            attack: stats.attack,
            defense: stats.defense,
            exp: 0,
            exp_to_next: stats.exp_to_next,
            coins: 0,
            milestones: Milestones::default(),
            abilities: HashSet::new(),
        }
    }

    /// Restore hp up to max; returns the amount actually healed
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
        self.hp - before
    }

    /// Lose hp, never dropping below zero; returns the amount actually lost
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp - amount.max(0)).max(0);
        before - self.hp
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    pub fn gain_exp(&mut self, amount: i32) {
        self.exp += amount;
    }

    pub fn ready_to_level(&self) -> bool {
        self.exp >= self.exp_to_next
    }

    /// Raise the level by one and fully restore hp and fp
    pub fn level_up(&mut self) {
        self.level += 1;
        self.max_hp += LEVEL_GROWTH.max_hp;
        self.hp = self.max_hp;
        self.max_fp += LEVEL_GROWTH.max_fp;
        self.fp = self.max_fp;
        self.attack += LEVEL_GROWTH.attack;
        self.exp = 0;
        self.exp_to_next = self.level as i32 * LEVEL_GROWTH.exp_per_level;
    }

    pub fn grant(&mut self, ability: Ability) {
        self.abilities.insert(ability);
    }

    pub fn has(&self, ability: Ability) -> bool {
        self.abilities.contains(&ability)
    }

    /// Put the body back at the chapter start point with no momentum
    pub fn return_to_start(&mut self) {
        let (x, y) = START_POSITION;
        self.body.respawn(x, y);
    }

    pub fn paper_mode(&self) -> PaperMode {
        self.body.mode
    }

    pub fn set_paper_mode(&mut self, mode: PaperMode) {
        self.body.set_mode(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_initial_values() {
        let player = PlayerCharacter::new();
        assert_eq!(player.level, 1);
        assert_eq!((player.hp, player.max_hp), (10, 10));
        assert_eq!((player.fp, player.max_fp), (5, 5));
        assert_eq!((player.bp, player.max_bp), (3, 3));
        assert_eq!(player.attack, 3);
        assert_eq!(player.exp_to_next, 100);
        assert_eq!(player.body.position, Vec2::new(100.0, 400.0));
        assert!(player.body.grounded);
        assert!(!player.has(Ability::Hammer));
    }

    #[test]
    fn test_hp_stays_in_bounds() {
        let mut player = PlayerCharacter::new();
        let sequence = [3, -20, 7, 15, -2, 1, 30, -4, -4, 12];
        for amount in sequence {
            if amount < 0 {
                player.heal(-amount);
            } else {
                player.take_damage(amount);
            }
            assert!(player.hp >= 0 && player.hp <= player.max_hp);
        }
    }

    #[test]
    fn test_heal_reports_actual_amount() {
        let mut player = PlayerCharacter::new();
        player.hp = 8;
        assert_eq!(player.heal(5), 2);
        assert_eq!(player.hp, 10);
    }

    #[test]
    fn test_damage_defeats_at_zero() {
        let mut player = PlayerCharacter::new();
        assert_eq!(player.take_damage(25), 10);
        assert_eq!(player.hp, 0);
        assert!(player.is_defeated());
    }

    #[test]
    fn test_level_up_restores_resources() {
        let mut player = PlayerCharacter::new();
        player.hp = 2;
        player.fp = 0;
        player.exp = 130;

        player.level_up();

        assert_eq!(player.level, 2);
        assert_eq!(player.max_hp, 15);
        assert_eq!(player.hp, player.max_hp);
        assert_eq!(player.max_fp, 8);
        assert_eq!(player.fp, player.max_fp);
        assert_eq!(player.attack, 4);
        assert_eq!(player.exp, 0);
        assert_eq!(player.exp_to_next, 200);
    }

    #[test]
    fn test_abilities() {
        let mut player = PlayerCharacter::new();
        player.grant(Ability::Hammer);
        assert!(player.has(Ability::Hammer));
        assert!(!player.has(Ability::SpinJump));
        assert_eq!(Ability::SuperJump.name(), "Super Jump");
    }

    #[test]
    fn test_return_to_start() {
        let mut player = PlayerCharacter::new();
        player.body.position = Vec2::new(500.0, 900.0);
        player.body.velocity = Vec2::new(5.0, 12.0);
        player.return_to_start();
        assert_eq!(player.body.position, Vec2::new(100.0, 400.0));
        assert_eq!(player.body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_milestone_count() {
        let mut milestones = Milestones::default();
        milestones.star_points = 2;
        milestones.crystal_stars.push("Crystal Star 2".to_string());
        assert_eq!(milestones.count(), 3);
    }
}
