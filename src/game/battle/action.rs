// Battle actions and turn bookkeeping

/// Something the player can do on their turn
///
/// Running away is not an action: the session simply discards the battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BattleAction {
    Jump,
    Hammer,
    Partner,
    /// Mushroom: heals a fixed amount, unlimited uses
    Item,
    Stylish,
    Appeal,
}

impl BattleAction {
    /// Action bound to a battle menu slot (1-based), ignoring Run (slot 5)
    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(Self::Jump),
            2 => Some(Self::Hammer),
            3 => Some(Self::Partner),
            4 => Some(Self::Item),
            6 => Some(Self::Stylish),
            7 => Some(Self::Appeal),
            _ => None,
        }
    }
}

/// Whose turn it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Turn {
    #[default]
    Player,
    Enemy,
}

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots() {
        assert_eq!(BattleAction::from_slot(1), Some(BattleAction::Jump));
        assert_eq!(BattleAction::from_slot(4), Some(BattleAction::Item));
        assert_eq!(BattleAction::from_slot(5), None);
        assert_eq!(BattleAction::from_slot(7), Some(BattleAction::Appeal));
        assert_eq!(BattleAction::from_slot(0), None);
    }
}
