// Static game content: chapter tables, partner rosters and unlocks

pub mod chapter;
mod classic;
mod crystal_star;
pub mod partners;
mod star_spirit;

pub use chapter::{load_chapters, Chapter, ContentError, CHAPTER_COUNT};
pub use partners::roster;

use crate::game::characters::Ability;
use crate::game::variant::ContentSet;

/// Ability granted when entering a chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityUnlock {
    /// Chapter being entered
    pub chapter: u32,
    pub ability: Ability,
    /// Dialogue text announcing the unlock
    pub message: &'static str,
}

const CLASSIC_UNLOCKS: [AbilityUnlock; 2] = [
    AbilityUnlock {
        chapter: 2,
        ability: Ability::Hammer,
        message: "You got the Hammer! Press 2 in battle to use it!",
    },
    AbilityUnlock {
        chapter: 4,
        ability: Ability::SuperJump,
        message: "You got the Super Jump!",
    },
];

const STAR_SPIRIT_UNLOCKS: [AbilityUnlock; 1] = [AbilityUnlock {
    chapter: 2,
    ability: Ability::Hammer,
    message: "You got the Hammer!",
}];

const CRYSTAL_STAR_UNLOCKS: [AbilityUnlock; 2] = [
    AbilityUnlock {
        chapter: 2,
        ability: Ability::Hammer,
        message: "You got the Hammer!",
    },
    AbilityUnlock {
        chapter: 4,
        ability: Ability::SpinJump,
        message: "You got the Spin Jump!",
    },
];

/// Unlock granted on entering `chapter`, if any
pub fn unlock_for(content: ContentSet, chapter: u32) -> Option<&'static AbilityUnlock> {
    let unlocks: &'static [AbilityUnlock] = match content {
        ContentSet::Classic => &CLASSIC_UNLOCKS,
        ContentSet::StarSpirit => &STAR_SPIRIT_UNLOCKS,
        ContentSet::CrystalStar => &CRYSTAL_STAR_UNLOCKS,
    };
    unlocks.iter().find(|unlock| unlock.chapter == chapter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hammer_at_chapter_two_everywhere() {
        for content in [
            ContentSet::Classic,
            ContentSet::StarSpirit,
            ContentSet::CrystalStar,
        ] {
            let unlock = unlock_for(content, 2).expect("hammer unlock");
            assert_eq!(unlock.ability, Ability::Hammer);
        }
    }

    #[test]
    fn test_chapter_four_unlocks() {
        assert_eq!(
            unlock_for(ContentSet::Classic, 4).map(|u| u.ability),
            Some(Ability::SuperJump)
        );
        assert_eq!(
            unlock_for(ContentSet::CrystalStar, 4).map(|u| u.ability),
            Some(Ability::SpinJump)
        );
        assert!(unlock_for(ContentSet::StarSpirit, 4).is_none());
    }

    #[test]
    fn test_no_unlock_elsewhere() {
        for chapter in [1, 3, 5, 6, 7, 8] {
            assert!(unlock_for(ContentSet::Classic, chapter).is_none());
        }
    }
}
