// Battle phase: menu slots to battle actions, enemy cadence, outcome

use log::{info, trace};

use crate::engine::input::{Command, PlayerInput};
use crate::game::battle::{Battle, BattleAction, Outcome, Party, HERO_NAME};
use crate::game::characters::Ability;

use super::phase::{Phase, PhaseHandler, Transition};
use super::screens::GameOver;
use super::world::World;

/// Battle menu slot that flees
pub const RUN_SLOT: u8 = 5;

/// Whether the player may pick `action` right now
fn available(action: BattleAction, world: &World) -> bool {
    match action {
        BattleAction::Hammer => world.player.has(Ability::Hammer),
        BattleAction::Stylish | BattleAction::Appeal => {
            world.config.capabilities.stylish_actions
        }
        _ => true,
    }
}

/// Back to exploring, with a level-up message when one is due
fn after_victory(world: &mut World) -> Transition {
    world.cue(world.chapter_track());
    if !world.player.ready_to_level() {
        return Transition::To(Phase::overworld());
    }

    world.player.level_up();
    let level = world.player.level;
    info!("{HERO_NAME} reached level {level}");
    Transition::Dialogue {
        title: "Level Up!".to_string(),
        message: format!("{HERO_NAME} reached level {level}!"),
        then: Phase::overworld(),
    }
}

impl PhaseHandler for Battle {
    fn on_command(&mut self, command: Command, world: &mut World) -> Transition {
        let Command::Slot(slot) = command else {
            return Transition::None;
        };

        if slot == RUN_SLOT {
            info!("Ran away");
            world.cue(world.chapter_track());
            return Transition::To(Phase::overworld());
        }

        let Some(action) = BattleAction::from_slot(slot) else {
            return Transition::None;
        };
        if !available(action, world) {
            trace!("{action:?} is locked");
            return Transition::None;
        }

        let mut party = Party::new(&mut world.player, world.audience.as_mut());
        if !self.player_act(action, 0, &mut party, world.dice.as_mut()) {
            trace!("Waiting for the enemy turn");
        }
        Transition::None
    }

    fn tick(&mut self, _input: &PlayerInput, world: &mut World) -> Transition {
        let mut party = Party::new(&mut world.player, world.audience.as_mut());
        Battle::tick(self, &mut party, world.dice.as_mut());

        match self.outcome() {
            Some(Outcome::Victory) => after_victory(world),
            Some(Outcome::Defeat) => Transition::To(Phase::GameOver(GameOver)),
            None => Transition::None,
        }
    }
}
