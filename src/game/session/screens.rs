// Non-playing phases: title, selection, messages, menu, chapter end, game end

use log::{error, info, trace};

use crate::engine::input::Command;
use crate::game::battle::HERO_NAME;
use crate::game::content::unlock_for;

use super::phase::{Phase, PhaseHandler, Transition};
use super::world::World;

/// Title screen
#[derive(Debug, Default)]
pub struct Intro;

impl PhaseHandler for Intro {
    fn on_command(&mut self, command: Command, world: &mut World) -> Transition {
        if command != Command::Confirm {
            return Transition::None;
        }
        if world.config.needs_selection() {
            Transition::To(Phase::GameSelect(GameSelect))
        } else {
            Transition::To(Phase::overworld())
        }
    }
}

/// Content-set choice of the enhanced client
#[derive(Debug, Default)]
pub struct GameSelect;

impl PhaseHandler for GameSelect {
    fn on_command(&mut self, command: Command, world: &mut World) -> Transition {
        let Command::Slot(slot) = command else {
            return Transition::None;
        };
        let Some(&content) = (slot as usize)
            .checked_sub(1)
            .and_then(|index| world.config.selectable().get(index))
        else {
            trace!("No game in slot {slot}");
            return Transition::None;
        };

        match world.load_content(content) {
            Ok(()) => Transition::To(Phase::overworld()),
            Err(err) => {
                error!("Could not load {content}: {err}");
                Transition::None
            }
        }
    }
}

/// A message box over a paused phase
#[derive(Debug)]
pub struct Dialogue {
    pub title: String,
    pub message: String,
    /// Phase to continue with once dismissed
    pub resume: Box<Phase>,
}

impl PhaseHandler for Dialogue {
    fn on_command(&mut self, command: Command, _world: &mut World) -> Transition {
        match command {
            Command::Confirm => Transition::Resume,
            _ => Transition::None,
        }
    }
}

/// Pause menu over the overworld
#[derive(Debug, Default)]
pub struct Menu;

impl PhaseHandler for Menu {
    fn on_command(&mut self, command: Command, _world: &mut World) -> Transition {
        match command {
            Command::Menu | Command::Cancel => Transition::To(Phase::overworld()),
            _ => Transition::None,
        }
    }
}

/// End-of-chapter card
#[derive(Debug, Default)]
pub struct ChapterComplete;

impl PhaseHandler for ChapterComplete {
    fn on_command(&mut self, command: Command, world: &mut World) -> Transition {
        if command != Command::Confirm {
            return Transition::None;
        }
        if world.is_last_chapter() {
            info!("All chapters complete");
            return Transition::To(Phase::Victory(Victory));
        }
        advance_chapter(world)
    }
}

/// Move on to the next chapter and hand out its rewards
fn advance_chapter(world: &mut World) -> Transition {
    if let Some(chapter) = world.chapter_mut() {
        chapter.milestone_collected = true;
    }
    world.chapter_index += 1;
    let number = world.chapter_index as u32 + 1;

    let content = world.content();
    let player = &mut world.player;
    if content.is_some_and(|content| content.awards_crystal_stars()) {
        player
            .milestones
            .crystal_stars
            .push(format!("Crystal Star {number}"));
    } else {
        player.milestones.star_points += 1;
    }
    player.return_to_start();
    player.level_up();
    info!("{HERO_NAME} reached level {}", player.level);

    if let Some(chapter) = world.chapter() {
        info!("Chapter {}: {}", chapter.number, chapter.name);
        info!("{}", chapter.description);
    }

    match content.and_then(|content| unlock_for(content, number)) {
        Some(unlock) => {
            world.player.grant(unlock.ability);
            Transition::Dialogue {
                title: "New Ability!".to_string(),
                message: unlock.message.to_string(),
                then: Phase::overworld(),
            }
        }
        None => Transition::To(Phase::overworld()),
    }
}

/// The player ran out of hp
#[derive(Debug, Default)]
pub struct GameOver;

impl PhaseHandler for GameOver {
    fn on_command(&mut self, command: Command, _world: &mut World) -> Transition {
        match command {
            Command::Restart => Transition::Restart,
            _ => Transition::None,
        }
    }
}

/// Every chapter cleared
#[derive(Debug, Default)]
pub struct Victory;

impl PhaseHandler for Victory {
    fn on_command(&mut self, command: Command, _world: &mut World) -> Transition {
        match command {
            Command::Restart => Transition::Restart,
            _ => Transition::None,
        }
    }
}
