// Chapters and the factory that builds them from the static tables

use thiserror::Error;

use crate::core::{Color, Rect};
use crate::engine::physics::Platform;
use crate::game::characters::Enemy;
use crate::game::variant::ContentSet;

use super::{classic, crystal_star, star_spirit};

/// Number of chapters in every content set
pub const CHAPTER_COUNT: u32 = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("{content} has no chapter {number} (chapters run 1 to 8)")]
    UnknownChapter { content: ContentSet, number: u32 },
}

/// Enemy row of a content table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub color: Color,
    pub exp_reward: i32,
}

impl EnemyTemplate {
    pub const fn new(
        name: &'static str,
        hp: i32,
        attack: i32,
        defense: i32,
        color: Color,
        exp_reward: i32,
    ) -> Self {
        Self {
            name,
            hp,
            attack,
            defense,
            color,
            exp_reward,
        }
    }

    pub fn spawn(&self) -> Enemy {
        Enemy::new(
            self.name,
            self.hp,
            self.attack,
            self.defense,
            self.color,
            self.exp_reward,
        )
    }
}

/// Static definition of one chapter
#[derive(Debug, Clone, Copy)]
pub struct ChapterTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub background: Color,
    pub platforms: &'static [Rect],
    pub enemies: &'static [EnemyTemplate],
    pub boss: Option<EnemyTemplate>,
    pub mechanics: &'static [&'static str],
}

/// A playable level and its progress flags
#[derive(Debug, Clone)]
pub struct Chapter {
    pub number: u32,
    pub name: String,
    pub description: String,
    pub background: Color,
    pub boss: Option<Enemy>,
    pub platforms: Vec<Platform>,
    /// Battle roster; battles fight clones and never deplete it
    pub enemies: Vec<Enemy>,
    pub completed: bool,
    pub milestone_collected: bool,
    /// Special-mechanic tags shown on the chapter card
    pub mechanics: Vec<String>,
}

impl Chapter {
    /// Build chapter `number` (1-based) of a content set
    pub fn generate(number: u32, content: ContentSet) -> Result<Self, ContentError> {
        let table = tables(content);
        let template = number
            .checked_sub(1)
            .and_then(|index| table.get(index as usize))
            .ok_or(ContentError::UnknownChapter { content, number })?;

        Ok(Self::from_template(number, template))
    }

    fn from_template(number: u32, template: &ChapterTemplate) -> Self {
        Self {
            number,
            name: template.name.to_string(),
            description: template.description.to_string(),
            background: template.background,
            boss: template.boss.as_ref().map(EnemyTemplate::spawn),
            platforms: template.platforms.to_vec(),
            enemies: template.enemies.iter().map(EnemyTemplate::spawn).collect(),
            completed: false,
            milestone_collected: false,
            mechanics: template.mechanics.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn has_boss(&self) -> bool {
        self.boss.is_some()
    }
}

/// Build every chapter of a content set in order
pub fn load_chapters(content: ContentSet) -> Result<Vec<Chapter>, ContentError> {
    (1..=CHAPTER_COUNT)
        .map(|number| Chapter::generate(number, content))
        .collect()
}

fn tables(content: ContentSet) -> &'static [ChapterTemplate] {
    match content {
        ContentSet::Classic => &classic::CHAPTERS,
        ContentSet::StarSpirit => &star_spirit::CHAPTERS,
        ContentSet::CrystalStar => &crystal_star::CHAPTERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ContentSet; 3] = [
        ContentSet::Classic,
        ContentSet::StarSpirit,
        ContentSet::CrystalStar,
    ];

    #[test]
    fn test_every_content_set_has_eight_chapters() {
        for content in ALL {
            let chapters = load_chapters(content).expect("tables are complete");
            assert_eq!(chapters.len(), CHAPTER_COUNT as usize);
            for (index, chapter) in chapters.iter().enumerate() {
                assert_eq!(chapter.number, index as u32 + 1);
                assert!(!chapter.platforms.is_empty(), "{content} {}", chapter.name);
                assert!(!chapter.enemies.is_empty(), "{content} {}", chapter.name);
                assert!(!chapter.completed);
            }
        }
    }

    #[test]
    fn test_unknown_chapter() {
        assert_eq!(
            Chapter::generate(0, ContentSet::Classic).unwrap_err(),
            ContentError::UnknownChapter {
                content: ContentSet::Classic,
                number: 0
            }
        );
        assert!(Chapter::generate(9, ContentSet::CrystalStar).is_err());
    }

    #[test]
    fn test_first_classic_chapter() {
        let chapter = Chapter::generate(1, ContentSet::Classic).unwrap();
        assert_eq!(chapter.name, "Goomba Road");
        assert_eq!(chapter.background, Color::rgb(135, 206, 235));
        assert_eq!(chapter.platforms[0], Rect::new(0.0, 500.0, 1024.0, 100.0));
        assert_eq!(chapter.enemies.len(), 3);
        assert_eq!(chapter.enemies[0].name, "Goomba");
        assert_eq!(chapter.enemies[0].hp, 5);
        assert!(!chapter.has_boss());
    }

    #[test]
    fn test_final_chapters_have_bosses() {
        let bowser = Chapter::generate(8, ContentSet::Classic).unwrap();
        assert_eq!(bowser.boss.as_ref().map(|b| b.name.as_str()), Some("Bowser"));

        let queen = Chapter::generate(8, ContentSet::CrystalStar).unwrap();
        let boss = queen.boss.expect("final chapter boss");
        assert_eq!(boss.name, "Shadow Queen");
        assert_eq!(boss.hp, 80);
        assert_eq!(boss.exp_reward, 500);
    }

    #[test]
    fn test_mechanic_tags_only_in_crystal_star() {
        for chapter in load_chapters(ContentSet::StarSpirit).unwrap() {
            assert!(chapter.mechanics.is_empty());
        }
        let rogueport = Chapter::generate(1, ContentSet::CrystalStar).unwrap();
        assert_eq!(rogueport.mechanics, vec!["Paper Mode Tutorial".to_string()]);
    }

    #[test]
    fn test_error_message() {
        let err = Chapter::generate(12, ContentSet::StarSpirit).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Star Spirit Saga has no chapter 12 (chapters run 1 to 8)"
        );
    }
}
