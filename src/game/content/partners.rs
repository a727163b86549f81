// Partner rosters per content set

use crate::core::Color;
use crate::game::characters::Partner;
use crate::game::variant::ContentSet;

/// (name, colour, hp, ability)
type PartnerRow = (&'static str, Color, i32, &'static str);

const STAR_SPIRIT_PARTNERS: [PartnerRow; 8] = [
    ("Goombario", Color::BROWN, 10, "Headbonk"),
    ("Kooper", Color::BLUE, 12, "Shell Toss"),
    ("Bombette", Color::PINK, 15, "Bomb"),
    ("Parakarry", Color::YELLOW, 11, "Air Lift"),
    ("Bow", Color::WHITE, 10, "Spook"),
    ("Watt", Color::YELLOW, 8, "Electro Dash"),
    ("Sushie", Color::PURPLE, 14, "Squirt"),
    ("Lakilester", Color::WHITE, 13, "Spiny Flip"),
];

const CRYSTAL_STAR_PARTNERS: [PartnerRow; 7] = [
    ("Goombella", Color::BROWN, 12, "Headbonk"),
    ("Koops", Color::GREEN, 15, "Shell Shield"),
    ("Flurrie", Color::PINK, 18, "Gale Force"),
    ("Yoshi", Color::GREEN, 10, "Ground Pound"),
    ("Vivian", Color::PURPLE, 15, "Shade Fist"),
    ("Bobbery", Color::BLACK, 20, "Bomb Squad"),
    ("Ms. Mowz", Color::WHITE, 12, "Kiss Thief"),
];

/// Ordered partner roster of a content set
pub fn roster(content: ContentSet) -> Vec<Partner> {
    let rows: &[PartnerRow] = match content {
        // The base campaign shares the first enhanced campaign's cast
        ContentSet::Classic | ContentSet::StarSpirit => &STAR_SPIRIT_PARTNERS,
        ContentSet::CrystalStar => &CRYSTAL_STAR_PARTNERS,
    };

    rows.iter()
        .map(|&(name, color, hp, ability)| Partner::new(name, color, hp, ability))
        .collect()
}
