// Everything a session owns besides its current phase

use log::{debug, info};

use crate::core::Dice;
use crate::game::battle::{Audience, Battle, BattleRules, MAX_COMBATANTS};
use crate::game::characters::{Partner, PlayerCharacter};
use crate::game::content::{load_chapters, roster, Chapter, ContentError};
use crate::game::variant::{ContentSet, VariantConfig};

use super::events::{SessionEvent, Track};

/// Per-tick chance of a random encounter while exploring
pub const ENCOUNTER_CHANCE: f64 = 0.005;

/// Session state shared by every phase
pub struct World {
    pub config: VariantConfig,
    pub player: PlayerCharacter,
    /// Empty until a content set is loaded
    pub chapters: Vec<Chapter>,
    /// Index into `chapters` of the chapter being played
    pub chapter_index: usize,
    pub partners: Vec<Partner>,
    pub partner_index: usize,
    /// Present only with the audience capability
    pub audience: Option<Audience>,
    pub dice: Box<dyn Dice>,
    events: Vec<SessionEvent>,
    track: Option<Track>,
}

impl World {
    /// Fresh world; a client with a single content set loads it right away
    pub fn new(config: VariantConfig, dice: Box<dyn Dice>) -> Result<Self, ContentError> {
        let audience = config.capabilities.audience.then(Audience::new);
        let mut world = Self {
            config,
            player: PlayerCharacter::new(),
            chapters: Vec::new(),
            chapter_index: 0,
            partners: Vec::new(),
            partner_index: 0,
            audience,
            dice,
            events: Vec::new(),
            track: None,
        };

        if let Some(content) = world.config.content {
            world.load_content(content)?;
        }
        Ok(world)
    }

    /// Lock in a content set: chapters, partner roster and capabilities
    pub fn load_content(&mut self, content: ContentSet) -> Result<(), ContentError> {
        self.chapters = load_chapters(content)?;
        self.chapter_index = 0;
        self.partners = roster(content);
        self.partner_index = 0;
        self.config.select(content);
        info!(
            "Loaded {content}: {} chapters, {} partners",
            self.chapters.len(),
            self.partners.len()
        );
        Ok(())
    }

    pub fn content(&self) -> Option<ContentSet> {
        self.config.content
    }

    pub fn chapter(&self) -> Option<&Chapter> {
        self.chapters.get(self.chapter_index)
    }

    pub fn chapter_mut(&mut self) -> Option<&mut Chapter> {
        self.chapters.get_mut(self.chapter_index)
    }

    pub fn is_last_chapter(&self) -> bool {
        self.chapter_index + 1 >= self.chapters.len()
    }

    pub fn partner(&self) -> Option<&Partner> {
        self.partners.get(self.partner_index)
    }

    /// Make the next partner in the roster active
    pub fn cycle_partner(&mut self) {
        if self.partners.is_empty() {
            return;
        }
        self.partner_index = (self.partner_index + 1) % self.partners.len();
        if let Some(partner) = self.partner() {
            info!("Partner: {}", partner.name);
        }
    }

    /// Set up a battle against up to three enemies of the current chapter
    ///
    /// The battle fights clones; the chapter roster stays intact. Returns
    /// `None` when the chapter has no enemies.
    pub fn start_battle(&mut self) -> Option<Battle> {
        let chapter = self.chapters.get(self.chapter_index)?;
        if chapter.enemies.is_empty() {
            return None;
        }

        let amount = MAX_COMBATANTS.min(chapter.enemies.len());
        let picks = self.dice.sample(chapter.enemies.len(), amount);
        let enemies = picks
            .iter()
            .filter_map(|&index| chapter.enemies.get(index).cloned())
            .collect();
        let boss_chapter = chapter.has_boss();

        let battle = Battle::new(
            enemies,
            self.partner().cloned(),
            BattleRules::from_variant(&self.config),
        );
        self.cue(if boss_chapter { Track::Boss } else { Track::Battle });
        Some(battle)
    }

    /// Switch music when the soundtrack is on and the track changes
    pub fn cue(&mut self, track: Track) {
        if !self.config.capabilities.soundtrack || self.track == Some(track) {
            return;
        }
        debug!("Music: {track}");
        self.track = Some(track);
        self.events.push(SessionEvent::Music {
            track,
            content: self.config.content,
        });
    }

    /// Music of the chapter being played
    pub fn chapter_track(&self) -> Track {
        Track::Chapter(self.chapter_index as u32 + 1)
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::ScriptedDice;

    fn world(config: VariantConfig, dice: ScriptedDice) -> World {
        World::new(config, Box::new(dice)).expect("content tables load")
    }

    #[test]
    fn test_base_world_loads_classic() {
        let world = world(VariantConfig::base(), ScriptedDice::new());
        assert_eq!(world.content(), Some(ContentSet::Classic));
        assert_eq!(world.chapters.len(), 8);
        assert_eq!(world.partners.len(), 8);
        assert!(world.audience.is_none());
        assert_eq!(world.chapter().map(|c| c.number), Some(1));
    }

    #[test]
    fn test_enhanced_world_waits_for_selection() {
        let mut world = world(VariantConfig::enhanced(), ScriptedDice::new());
        assert!(world.chapters.is_empty());
        assert!(world.chapter().is_none());
        assert!(world.audience.is_some());
        assert!(world.start_battle().is_none());

        world.load_content(ContentSet::CrystalStar).unwrap();
        assert_eq!(world.partners.len(), 7);
        assert!(world.config.capabilities.paper_modes);
    }

    #[test]
    fn test_cycle_partner_wraps() {
        let mut world = world(VariantConfig::base(), ScriptedDice::new());
        let first = world.partner().map(|p| p.name.clone());
        for _ in 0..world.partners.len() {
            world.cycle_partner();
        }
        assert_eq!(world.partner().map(|p| p.name.clone()), first);
        world.cycle_partner();
        assert_eq!(world.partner_index, 1);
    }

    #[test]
    fn test_start_battle_samples_clones() {
        let dice = ScriptedDice::new().with_sample(&[2, 0]);
        let mut world = world(VariantConfig::base(), dice);
        let roster_before = world.chapter().unwrap().enemies.clone();

        let battle = world.start_battle().expect("chapter has enemies");
        let names: Vec<&str> = battle.enemies().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![roster_before[2].name.as_str(), roster_before[0].name.as_str()]
        );
        assert_eq!(battle.partner().map(|p| p.name.as_str()), Some("Goombario"));
        assert_eq!(world.chapter().unwrap().enemies, roster_before);
    }

    #[test]
    fn test_no_battle_without_enemies() {
        let mut world = world(VariantConfig::base(), ScriptedDice::new());
        world.chapter_mut().unwrap().enemies.clear();
        assert!(world.start_battle().is_none());
    }

    #[test]
    fn test_cue_requires_soundtrack_and_change() {
        let mut base = world(VariantConfig::base(), ScriptedDice::new());
        base.cue(Track::Title);
        assert!(base.drain_events().is_empty());

        let mut enhanced = world(VariantConfig::enhanced(), ScriptedDice::new());
        enhanced.cue(Track::Title);
        enhanced.cue(Track::Title);
        enhanced.cue(Track::Battle);
        assert_eq!(
            enhanced.drain_events(),
            vec![
                SessionEvent::Music {
                    track: Track::Title,
                    content: None
                },
                SessionEvent::Music {
                    track: Track::Battle,
                    content: None
                },
            ]
        );
        assert!(enhanced.drain_events().is_empty());
    }
}
