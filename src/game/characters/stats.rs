// Character stats and the shared combat math
//
// Every session starts from the same stat block; growth comes from
// level-ups and chapter rewards, never from per-character tuning.

/// Starting stats of the player character
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    // Resources
    pub max_hp: i32,
    pub max_fp: i32,
    /// Badge points, only shown when badges are enabled
    pub max_bp: i32,

    // Combat
    pub attack: i32,
    pub defense: i32,

    // Progression
    /// Experience needed for the first level-up
    pub exp_to_next: i32,
}

/// The stat block every new session starts with
pub const BASE_STATS: CharacterStats = CharacterStats {
    max_hp: 10,
    max_fp: 5,
    max_bp: 3,

    attack: 3,
    defense: 0,

    exp_to_next: 100,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl CharacterStats {
    /// Get the standard starting stats
    pub fn standard() -> Self {
        BASE_STATS
    }
}

/// Stat growth applied on every level-up
#[derive(Debug, Clone, PartialEq)]
pub struct LevelGrowth {
    pub max_hp: i32,
    pub max_fp: i32,
    pub attack: i32,
    /// Experience requirement per level (`level * exp_per_level`)
    pub exp_per_level: i32,
}

pub const LEVEL_GROWTH: LevelGrowth = LevelGrowth {
    max_hp: 5,
    max_fp: 3,
    attack: 1,
    exp_per_level: 100,
};

/// Damage left after defense; always at least 1
pub fn mitigate(raw: i32, defense: i32) -> i32 {
    (raw - defense).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = CharacterStats::default();
        assert_eq!(stats.max_hp, 10);
        assert_eq!(stats.max_fp, 5);
        assert_eq!(stats.max_bp, 3);
        assert_eq!(stats.attack, 3);
        assert_eq!(stats.defense, 0);
        assert_eq!(stats.exp_to_next, 100);
    }

    #[test]
    fn test_standard_equals_default() {
        assert_eq!(CharacterStats::standard(), CharacterStats::default());
    }

    #[test]
    fn test_mitigate_floors_at_one() {
        for raw in -5..20 {
            for defense in 0..20 {
                let damage = mitigate(raw, defense);
                assert!(damage >= 1);
                assert_eq!(damage, (raw - defense).max(1));
            }
        }
    }

    #[test]
    fn test_mitigate_subtracts_defense() {
        assert_eq!(mitigate(5, 0), 5);
        assert_eq!(mitigate(7, 2), 5);
        assert_eq!(mitigate(3, 3), 1);
    }
}
