// Turn-based battle engine
//
// A battle fights owned clones of the sampled enemies. The player and the
// session audience are lent in through `Party` for each call, randomness comes
// from `Dice`. Once victory or defeat is reached every operation is a no-op.

use log::{debug, info};

use crate::core::Dice;
use crate::game::characters::{mitigate, Ability, Enemy, Partner, PlayerCharacter};
use crate::game::variant::VariantConfig;

use super::action::{BattleAction, Outcome, Turn};
use super::audience::Audience;

/// Name used for the player in battle messages
pub const HERO_NAME: &str = "Mario";

/// Ticks the enemy side waits before attacking
pub const ENEMY_TURN_DELAY: u32 = 60;

/// Maximum number of enemies drawn into one battle
pub const MAX_COMBATANTS: usize = 3;

pub const ACTION_COMMAND_CHANCE: f64 = 0.7;
pub const SUPERGUARD_CHANCE: f64 = 0.1;

/// Hp restored by a Mushroom
pub const ITEM_HEAL: i32 = 5;

/// Ticks a stylish flourish stays on screen
pub const STYLISH_DURATION: u32 = 30;

/// Random spread added to Jump and Hammer damage
const ATTACK_ROLL: (i32, i32) = (1, 3);

/// Coins dropped per defeated enemy
const COIN_DROP: (i32, i32) = (1, 5);

/// Reward for a successful action command
#[derive(Debug, Clone, Copy)]
struct CommandBonus {
    damage: i32,
    excitement: u32,
}

const JUMP_COMMAND: CommandBonus = CommandBonus {
    damage: 2,
    excitement: 10,
};
const HAMMER_COMMAND: CommandBonus = CommandBonus {
    damage: 3,
    excitement: 15,
};
const PARTNER_COMMAND: CommandBonus = CommandBonus {
    damage: 2,
    excitement: 0,
};

// Audience reactions (excitement, star power)
const DEFEAT_CHEER: (u32, u32) = (25, 0);
const VICTORY_CHEER: (u32, u32) = (0, 50);
const SUPERGUARD_CHEER: (u32, u32) = (20, 0);
const STYLISH_CHEER: (u32, u32) = (30, 20);
const APPEAL_CHEER: (u32, u32) = (20, 10);

/// Which optional mechanics a battle uses
#[derive(Debug, Clone, PartialEq)]
pub struct BattleRules {
    pub action_commands: bool,
    pub superguard: bool,
    pub stylish_actions: bool,
    pub partner_ranks: bool,
    pub hammer_bonus: i32,
}

impl BattleRules {
    pub fn from_variant(config: &VariantConfig) -> Self {
        let caps = config.capabilities;
        Self {
            action_commands: caps.action_commands,
            superguard: caps.superguard,
            stylish_actions: caps.stylish_actions,
            partner_ranks: caps.partner_ranks,
            hammer_bonus: config.hammer_bonus,
        }
    }
}

impl Default for BattleRules {
    fn default() -> Self {
        Self::from_variant(&VariantConfig::base())
    }
}

/// The side of the session a battle acts on
pub struct Party<'a> {
    pub player: &'a mut PlayerCharacter,
    /// Present only when the audience mechanic is on
    pub audience: Option<&'a mut Audience>,
}

impl<'a> Party<'a> {
    pub fn new(player: &'a mut PlayerCharacter, audience: Option<&'a mut Audience>) -> Self {
        Self { player, audience }
    }

    fn cheer(&mut self, (excitement, star_power): (u32, u32)) {
        let Some(audience) = self.audience.as_deref_mut() else {
            return;
        };
        if excitement > 0 {
            audience.increase_excitement(excitement);
        }
        if star_power > 0 {
            audience.generate_star_power(star_power);
        }
    }
}

/// A single battle from first turn to victory or defeat
#[derive(Debug, Clone)]
pub struct Battle {
    enemies: Vec<Enemy>,
    partner: Option<Partner>,
    rules: BattleRules,
    turn: Turn,
    turn_timer: u32,
    log: Vec<String>,
    victory: bool,
    defeat: bool,
    stylish_timer: u32,
    action_commands_succeeded: u32,
}

impl Battle {
    pub fn new(enemies: Vec<Enemy>, partner: Option<Partner>, rules: BattleRules) -> Self {
        let names: Vec<&str> = enemies.iter().map(|e| e.name.as_str()).collect();
        info!("Battle started against {}", names.join(", "));

        Self {
            victory: enemies.is_empty(),
            enemies,
            partner,
            rules,
            turn: Turn::Player,
            turn_timer: 0,
            log: Vec::new(),
            defeat: false,
            stylish_timer: 0,
            action_commands_succeeded: 0,
        }
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn partner(&self) -> Option<&Partner> {
        self.partner.as_ref()
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn turn_timer(&self) -> u32 {
        self.turn_timer
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// The last `count` log lines, oldest first
    pub fn recent_log(&self, count: usize) -> &[String] {
        let start = self.log.len().saturating_sub(count);
        &self.log[start..]
    }

    pub fn stylish_timer(&self) -> u32 {
        self.stylish_timer
    }

    pub fn action_commands_succeeded(&self) -> u32 {
        self.action_commands_succeeded
    }

    pub fn is_victory(&self) -> bool {
        self.victory
    }

    pub fn is_defeat(&self) -> bool {
        self.defeat
    }

    pub fn is_over(&self) -> bool {
        self.victory || self.defeat
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.defeat {
            Some(Outcome::Defeat)
        } else if self.victory {
            Some(Outcome::Victory)
        } else {
            None
        }
    }

    /// Act on the player's turn and hand the turn to the enemies
    ///
    /// Returns false when it is not the player's turn or the battle is over.
    pub fn player_act(
        &mut self,
        action: BattleAction,
        target: usize,
        party: &mut Party<'_>,
        dice: &mut dyn Dice,
    ) -> bool {
        if self.is_over() || self.turn != Turn::Player {
            return false;
        }
        self.execute_action(action, target, party, dice);
        self.turn = Turn::Enemy;
        self.turn_timer = 0;
        true
    }

    /// Advance one tick; the enemies strike once their delay has passed
    pub fn tick(&mut self, party: &mut Party<'_>, dice: &mut dyn Dice) {
        self.stylish_timer = self.stylish_timer.saturating_sub(1);
        if self.is_over() {
            return;
        }

        self.turn_timer += 1;
        if self.turn == Turn::Enemy && self.turn_timer >= ENEMY_TURN_DELAY {
            self.enemy_turn(party, dice);
            self.turn = Turn::Player;
            self.turn_timer = 0;
        }
    }

    /// Resolve one player action, then remove defeated enemies
    pub fn execute_action(
        &mut self,
        action: BattleAction,
        target: usize,
        party: &mut Party<'_>,
        dice: &mut dyn Dice,
    ) {
        if self.is_over() {
            return;
        }

        match action {
            BattleAction::Jump | BattleAction::Hammer | BattleAction::Partner => {
                self.strike(action, target, party, dice);
            }
            BattleAction::Item => {
                party.player.heal(ITEM_HEAL);
                self.record(format!(
                    "{HERO_NAME} uses Mushroom and recovers {ITEM_HEAL} HP!"
                ));
            }
            BattleAction::Stylish => {
                if self.rules.stylish_actions {
                    self.stylish_timer = STYLISH_DURATION;
                    party.cheer(STYLISH_CHEER);
                    self.record("Stylish!".to_string());
                }
            }
            BattleAction::Appeal => {
                if self.rules.stylish_actions {
                    party.cheer(APPEAL_CHEER);
                    self.record(format!("{HERO_NAME} appeals to the audience!"));
                }
            }
        }

        self.sweep_defeated(party, dice);
    }

    fn strike(
        &mut self,
        action: BattleAction,
        target: usize,
        party: &mut Party<'_>,
        dice: &mut dyn Dice,
    ) {
        let locked = match action {
            BattleAction::Hammer => !party.player.has(Ability::Hammer),
            BattleAction::Partner => self.partner.is_none(),
            _ => false,
        };
        if locked || target >= self.enemies.len() {
            return;
        }

        let success = self.rules.action_commands && dice.chance(ACTION_COMMAND_CHANCE);

        let attack = party.player.attack;
        let (raw, bonus) = match action {
            BattleAction::Jump => (attack + dice.roll(ATTACK_ROLL.0, ATTACK_ROLL.1), JUMP_COMMAND),
            BattleAction::Hammer => (
                attack + self.rules.hammer_bonus + dice.roll(ATTACK_ROLL.0, ATTACK_ROLL.1),
                HAMMER_COMMAND,
            ),
            BattleAction::Partner => {
                let damage = self
                    .partner
                    .as_ref()
                    .map_or(0, |p| p.ability_damage(self.rules.partner_ranks));
                (damage, PARTNER_COMMAND)
            }
            _ => return,
        };

        let raw = if success {
            debug!("Action command succeeded");
            self.action_commands_succeeded += 1;
            party.cheer((bonus.excitement, 0));
            raw + bonus.damage
        } else {
            raw
        };

        let enemy = &mut self.enemies[target];
        let dealt = enemy.take_damage(raw);
        let line = match action {
            BattleAction::Jump => format!("{HERO_NAME} jumps on {} for {dealt} damage!", enemy.name),
            BattleAction::Hammer => format!("{HERO_NAME} hammers {} for {dealt} damage!", enemy.name),
            _ => {
                let partner = self.partner.as_ref().map_or("Partner", |p| p.name.as_str());
                format!("{partner} attacks for {dealt} damage!")
            }
        };
        self.record(line);
    }

    fn sweep_defeated(&mut self, party: &mut Party<'_>, dice: &mut dyn Dice) {
        let (defeated, standing): (Vec<Enemy>, Vec<Enemy>) = std::mem::take(&mut self.enemies)
            .into_iter()
            .partition(Enemy::is_defeated);
        self.enemies = standing;

        for enemy in defeated {
            self.record(format!("{} is defeated!", enemy.name));
            party.player.gain_exp(enemy.exp_reward);
            party.player.coins += dice.roll(COIN_DROP.0, COIN_DROP.1).max(0) as u32;
            party.cheer(DEFEAT_CHEER);
        }

        if self.enemies.is_empty() && !self.victory {
            self.victory = true;
            party.cheer(VICTORY_CHEER);
            info!("Battle won");
        }
    }

    /// Every enemy attacks in order until the player falls
    pub fn enemy_turn(&mut self, party: &mut Party<'_>, dice: &mut dyn Dice) {
        if self.is_over() {
            return;
        }

        let attackers: Vec<(String, i32)> = self
            .enemies
            .iter()
            .map(|e| (e.name.clone(), e.attack))
            .collect();

        for (name, attack) in attackers {
            if self.rules.superguard && dice.chance(SUPERGUARD_CHANCE) {
                self.record(format!("{HERO_NAME} superguards!"));
                party.cheer(SUPERGUARD_CHEER);
            } else {
                let damage = mitigate(attack, party.player.defense);
                party.player.take_damage(damage);
                self.record(format!("{name} attacks {HERO_NAME} for {damage} damage!"));
            }

            if party.player.is_defeated() {
                self.defeat = true;
                info!("Battle lost");
                break;
            }
        }
    }

    fn record(&mut self, line: String) {
        debug!("{line}");
        self.log.push(line);
    }
}
