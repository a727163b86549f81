// The game session: current phase plus the world it plays on

use log::info;

use crate::core::Dice;
use crate::engine::input::{Command, PlayerInput};
use crate::game::content::ContentError;
use crate::game::variant::VariantConfig;

use super::events::{SessionEvent, Track};
use super::phase::{Phase, PhaseKind, Transition};
use super::screens::{Dialogue, Intro};
use super::view::FrameView;
use super::world::World;

/// One playthrough from the title screen on
///
/// Restarting never rewinds a session in place: the owner swaps in the value
/// returned by [`Session::reset`].
pub struct Session {
    phase: Phase,
    world: World,
    restart_requested: bool,
}

impl Session {
    pub fn new(config: VariantConfig, dice: Box<dyn Dice>) -> Result<Self, ContentError> {
        let mut world = World::new(config, dice)?;
        world.cue(Track::Title);
        info!("New session ({:?} client)", world.config.client);
        info!("Press Space to start");

        Ok(Self {
            phase: Phase::Intro(Intro),
            world,
            restart_requested: false,
        })
    }

    /// A fresh session for the same client, keeping the random source
    pub fn reset(self) -> Result<Self, ContentError> {
        info!("Restarting");
        let config = VariantConfig::new(self.world.config.client);
        Self::new(config, self.world.dice)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Whether the player asked to start over
    pub fn restart_requested(&self) -> bool {
        self.restart_requested
    }

    /// Run one fixed tick: the frame's presses in order, then the phase update
    pub fn tick(&mut self, input: &PlayerInput) {
        for &command in input.presses() {
            self.handle(command);
        }
        let transition = self.phase.handler().tick(input, &mut self.world);
        self.apply(transition);
    }

    /// Deliver a single pressed command to the active phase
    pub fn handle(&mut self, command: Command) {
        let transition = self.phase.handler().on_command(command, &mut self.world);
        self.apply(transition);
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.world.drain_events()
    }

    pub fn view(&self) -> FrameView {
        let world = &self.world;
        match &self.phase {
            Phase::Battle(battle) => FrameView::battle(battle, world),
            Phase::Dialogue(dialogue) => {
                let scene = match dialogue.resume.battle() {
                    Some(battle) => FrameView::battle(battle, world),
                    None => FrameView::overworld(PhaseKind::Overworld, world),
                };
                scene.with_dialogue(&dialogue.title, &dialogue.message)
            }
            Phase::Overworld(_) | Phase::Menu(_) | Phase::ChapterComplete(_) => {
                FrameView::overworld(self.kind(), world)
            }
            Phase::Intro(_) | Phase::GameSelect(_) | Phase::GameOver(_) | Phase::Victory(_) => {
                FrameView::screen(self.kind())
            }
        }
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::None => {}
            Transition::To(phase) => self.enter(phase),
            Transition::Dialogue {
                title,
                message,
                then,
            } => self.enter(Phase::Dialogue(Dialogue {
                title,
                message,
                resume: Box::new(then),
            })),
            Transition::Resume => {
                if let Phase::Dialogue(dialogue) = &mut self.phase {
                    let resume = std::mem::replace(dialogue.resume.as_mut(), Phase::overworld());
                    self.enter(resume);
                }
            }
            Transition::Restart => self.restart_requested = true,
        }
    }

    fn enter(&mut self, phase: Phase) {
        let from = self.phase.kind();
        let to = phase.kind();
        if from != to {
            info!("{from:?} -> {to:?}");
        }

        match &phase {
            Phase::Intro(_) => self.world.cue(Track::Title),
            Phase::GameSelect(_) => {
                self.world.cue(Track::Title);
                for (index, content) in self.world.config.selectable().iter().enumerate() {
                    info!("Press {} for {content}", index + 1);
                }
            }
            Phase::Overworld(_) => self.world.cue(self.world.chapter_track()),
            Phase::Dialogue(dialogue) => info!("{}: {}", dialogue.title, dialogue.message),
            Phase::ChapterComplete(_) => info!("Press Space to continue"),
            Phase::GameOver(_) => info!("Game over! Press R to restart"),
            Phase::Victory(_) => {
                self.world.cue(Track::Victory);
                info!("You saved the day! Press R to play again");
            }
            Phase::Battle(_) | Phase::Menu(_) => {}
        }

        self.phase = phase;
    }
}
