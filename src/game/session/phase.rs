// Session phases and the transitions between them

use crate::engine::input::{Command, PlayerInput};
use crate::game::battle::Battle;

use super::overworld::Overworld;
use super::screens::{ChapterComplete, Dialogue, GameOver, GameSelect, Intro, Menu, Victory};
use super::world::World;

/// What a phase wants the session to do next
#[derive(Debug)]
pub enum Transition {
    None,
    To(Phase),
    /// Show a message, then continue with `then`
    Dialogue {
        title: String,
        message: String,
        then: Phase,
    },
    /// Leave a dialogue for the phase it interrupted
    Resume,
    /// Throw the session away and start over
    Restart,
}

/// Behaviour of one phase
pub trait PhaseHandler {
    /// React to a pressed command
    fn on_command(&mut self, command: Command, world: &mut World) -> Transition;

    /// Advance one fixed tick
    fn tick(&mut self, _input: &PlayerInput, _world: &mut World) -> Transition {
        Transition::None
    }
}

/// Tag of a phase without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Intro,
    GameSelect,
    Overworld,
    Battle,
    Dialogue,
    Menu,
    ChapterComplete,
    GameOver,
    Victory,
}

/// The active phase of a session
#[derive(Debug)]
pub enum Phase {
    Intro(Intro),
    GameSelect(GameSelect),
    Overworld(Overworld),
    Battle(Battle),
    Dialogue(Dialogue),
    Menu(Menu),
    ChapterComplete(ChapterComplete),
    GameOver(GameOver),
    Victory(Victory),
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Intro(_) => PhaseKind::Intro,
            Self::GameSelect(_) => PhaseKind::GameSelect,
            Self::Overworld(_) => PhaseKind::Overworld,
            Self::Battle(_) => PhaseKind::Battle,
            Self::Dialogue(_) => PhaseKind::Dialogue,
            Self::Menu(_) => PhaseKind::Menu,
            Self::ChapterComplete(_) => PhaseKind::ChapterComplete,
            Self::GameOver(_) => PhaseKind::GameOver,
            Self::Victory(_) => PhaseKind::Victory,
        }
    }

    pub fn handler(&mut self) -> &mut dyn PhaseHandler {
        match self {
            Self::Intro(phase) => phase,
            Self::GameSelect(phase) => phase,
            Self::Overworld(phase) => phase,
            Self::Battle(phase) => phase,
            Self::Dialogue(phase) => phase,
            Self::Menu(phase) => phase,
            Self::ChapterComplete(phase) => phase,
            Self::GameOver(phase) => phase,
            Self::Victory(phase) => phase,
        }
    }

    pub fn overworld() -> Self {
        Self::Overworld(Overworld::new())
    }

    pub fn battle(&self) -> Option<&Battle> {
        match self {
            Self::Battle(battle) => Some(battle),
            _ => None,
        }
    }

    pub fn dialogue(&self) -> Option<&Dialogue> {
        match self {
            Self::Dialogue(dialogue) => Some(dialogue),
            _ => None,
        }
    }
}
