// Exploring a chapter: walking, jumping, falling and random encounters

use log::{info, trace};

use crate::engine::input::{Command, InputBuffer, PlayerInput};
use crate::engine::physics::{advance, PaperMode, SCREEN_HEIGHT, SCREEN_WIDTH};

use super::phase::{Phase, PhaseHandler, Transition};
use super::screens::{ChapterComplete, GameOver, Menu};
use super::world::{World, ENCOUNTER_CHANCE};

/// Distance from the right edge that counts as reaching the chapter exit
pub const EXIT_MARGIN: f32 = 100.0;

/// Hp lost for falling off the bottom of the screen
pub const FALL_DAMAGE: i32 = 1;

/// Overworld phase
#[derive(Debug, Default)]
pub struct Overworld {
    /// Jump presses waiting for the body to touch ground
    jump_buffer: InputBuffer,
}

impl Overworld {
    pub fn new() -> Self {
        Self::default()
    }

    fn change_paper_mode(&self, slot: u8, world: &mut World) {
        if !world.config.capabilities.paper_modes {
            trace!("Paper modes are not available");
            return;
        }
        let mode = match slot {
            0 => PaperMode::Normal,
            1 => PaperMode::Plane,
            2 => PaperMode::Tube,
            3 => PaperMode::Thin,
            _ => return,
        };
        world.player.set_paper_mode(mode);
        info!("Paper mode: {}", mode.name());
    }
}

/// Enter a battle against the current chapter's roster, if it has one
pub fn encounter(world: &mut World) -> Transition {
    match world.start_battle() {
        Some(battle) => Transition::To(Phase::Battle(battle)),
        None => {
            trace!("No enemies to fight here");
            Transition::None
        }
    }
}

impl PhaseHandler for Overworld {
    fn on_command(&mut self, command: Command, world: &mut World) -> Transition {
        match command {
            Command::Jump | Command::Confirm => {
                self.jump_buffer.push(Command::Jump);
                Transition::None
            }
            Command::CyclePartner => {
                world.cycle_partner();
                Transition::None
            }
            Command::Menu => Transition::To(Phase::Menu(Menu)),
            Command::StartBattle => encounter(world),
            Command::Slot(slot) => {
                self.change_paper_mode(slot, world);
                Transition::None
            }
            other => {
                trace!("Ignored {other:?} in the overworld");
                Transition::None
            }
        }
    }

    fn tick(&mut self, input: &PlayerInput, world: &mut World) -> Transition {
        let Some(chapter) = world.chapters.get(world.chapter_index) else {
            return Transition::None;
        };
        let body = &mut world.player.body;

        match input.horizontal() {
            direction if direction < 0 => body.move_left(),
            direction if direction > 0 => body.move_right(),
            _ => body.stop(),
        }
        if body.grounded && self.jump_buffer.consume(Command::Jump) {
            body.jump();
        }
        self.jump_buffer.update();

        advance(body, &chapter.platforms);

        if body.position.x > SCREEN_WIDTH - EXIT_MARGIN {
            if let Some(chapter) = world.chapter_mut() {
                chapter.completed = true;
                info!("Chapter {} complete: {}", chapter.number, chapter.name);
            }
            return Transition::To(Phase::ChapterComplete(ChapterComplete));
        }

        if world.player.body.position.y > SCREEN_HEIGHT {
            world.player.take_damage(FALL_DAMAGE);
            world.player.return_to_start();
            info!("Fell! hp {}/{}", world.player.hp, world.player.max_hp);
            if world.player.is_defeated() {
                return Transition::To(Phase::GameOver(GameOver));
            }
        }

        if world.dice.chance(ENCOUNTER_CHANCE) {
            return encounter(world);
        }

        Transition::None
    }
}
