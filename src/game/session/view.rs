// Read-only snapshot of a session for the renderer

use crate::core::{Color, Rect};
use crate::engine::physics::{Facing, PaperMode, Pose, BODY_HEIGHT, BODY_WIDTH};
use crate::game::battle::{Audience, Battle, Turn};
use crate::game::characters::Partner;

use super::phase::PhaseKind;
use super::world::World;

/// Battle-log lines shown under the battle scene
pub const VISIBLE_LOG_LINES: usize = 3;

// Battle scene layout
const BATTLE_BACKGROUND: Color = Color::rgb(100, 100, 150);
const BATTLE_PLAYER: (f32, f32) = (200.0, 450.0);
const BATTLE_PARTNER: (f32, f32) = (100.0, 460.0);
const BATTLE_PARTNER_SIZE: f32 = 40.0;
/// Enemies stand in a column, one below the other
const BATTLE_ENEMY_ORIGIN: (f32, f32) = (600.0, 450.0);
const BATTLE_ENEMY_SPACING: f32 = 50.0;
const ENEMY_SIZE: f32 = 50.0;

/// Partners trail the player by this much in the overworld
const PARTNER_TRAIL: f32 = 55.0;
const PARTNER_SIZE: f32 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub rect: Rect,
    pub pose: Pose,
    pub mode: PaperMode,
    pub facing: Facing,
    pub walk_timer: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartnerView {
    pub name: String,
    pub rect: Rect,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyView {
    pub name: String,
    pub rect: Rect,
    pub color: Color,
    pub hp_fraction: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogueView {
    pub title: String,
    pub message: String,
}

/// Status readout
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub level: u32,
    pub hp: (i32, i32),
    pub fp: (i32, i32),
    /// Only with the badge-point capability
    pub bp: Option<(i32, i32)>,
    pub coins: u32,
    pub star_points: u32,
    pub crystal_stars: usize,
    pub chapter: Option<u32>,
    pub audience: Option<Audience>,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub phase: PhaseKind,
    pub background: Color,
    pub platforms: Vec<Rect>,
    /// Draw the battle stage under the combatants
    pub stage: bool,
    pub player: Option<PlayerView>,
    pub partner: Option<PartnerView>,
    pub enemies: Vec<EnemyView>,
    pub battle_log: Vec<String>,
    /// The player may act (battle only)
    pub players_turn: bool,
    pub stylish: bool,
    pub dialogue: Option<DialogueView>,
    pub hud: Option<Hud>,
}

impl FrameView {
    fn empty(phase: PhaseKind, background: Color) -> Self {
        Self {
            phase,
            background,
            platforms: Vec::new(),
            stage: false,
            player: None,
            partner: None,
            enemies: Vec::new(),
            battle_log: Vec::new(),
            players_turn: false,
            stylish: false,
            dialogue: None,
            hud: None,
        }
    }

    /// Title, selection and end screens: background only
    pub fn screen(phase: PhaseKind) -> Self {
        let background = match phase {
            PhaseKind::Victory => Color::GOLD,
            _ => Color::BLACK,
        };
        Self::empty(phase, background)
    }

    /// Chapter scene with the player walking it
    pub fn overworld(phase: PhaseKind, world: &World) -> Self {
        let background = world.chapter().map_or(Color::BLACK, |c| c.background);
        let mut view = Self::empty(phase, background);

        let body = &world.player.body;
        view.platforms = world
            .chapter()
            .map(|c| c.platforms.clone())
            .unwrap_or_default();
        view.player = Some(PlayerView {
            rect: body.rect(),
            pose: body.pose(),
            mode: body.mode,
            facing: body.facing,
            walk_timer: body.walk_timer,
        });
        view.partner = world.partner().map(|partner| {
            let behind = match body.facing {
                Facing::Right => -PARTNER_TRAIL,
                Facing::Left => PARTNER_TRAIL,
            };
            let x = body.position.x + behind + (BODY_WIDTH - PARTNER_SIZE) / 2.0;
            let y = body.position.y + BODY_HEIGHT - PARTNER_SIZE;
            partner_view(partner, Rect::new(x, y, PARTNER_SIZE, PARTNER_SIZE))
        });
        view.hud = Some(hud(world));
        view
    }

    /// Battle scene: player and partner on the left, enemies on the right
    pub fn battle(battle: &Battle, world: &World) -> Self {
        let mut view = Self::empty(PhaseKind::Battle, BATTLE_BACKGROUND);
        view.stage = true;

        let body = &world.player.body;
        let (x, y) = BATTLE_PLAYER;
        view.player = Some(PlayerView {
            rect: Rect::new(x, y, BODY_WIDTH, BODY_HEIGHT),
            pose: Pose::Idle,
            mode: body.mode,
            facing: Facing::Right,
            walk_timer: 0,
        });
        view.partner = battle.partner().map(|partner| {
            let (x, y) = BATTLE_PARTNER;
            partner_view(
                partner,
                Rect::new(x, y, BATTLE_PARTNER_SIZE, BATTLE_PARTNER_SIZE),
            )
        });
        view.enemies = battle
            .enemies()
            .iter()
            .enumerate()
            .map(|(index, enemy)| {
                let (x, y) = BATTLE_ENEMY_ORIGIN;
                EnemyView {
                    name: enemy.name.clone(),
                    rect: Rect::new(
                        x,
                        y + index as f32 * BATTLE_ENEMY_SPACING,
                        ENEMY_SIZE,
                        ENEMY_SIZE,
                    ),
                    color: enemy.color,
                    hp_fraction: enemy.hp_fraction(),
                }
            })
            .collect();
        view.battle_log = battle.recent_log(VISIBLE_LOG_LINES).to_vec();
        view.players_turn = battle.turn() == Turn::Player && !battle.is_over();
        view.stylish = battle.stylish_timer() > 0;
        view.hud = Some(hud(world));
        view
    }

    pub fn with_dialogue(mut self, title: &str, message: &str) -> Self {
        self.phase = PhaseKind::Dialogue;
        self.dialogue = Some(DialogueView {
            title: title.to_string(),
            message: message.to_string(),
        });
        self
    }
}

fn partner_view(partner: &Partner, rect: Rect) -> PartnerView {
    PartnerView {
        name: partner.name.clone(),
        rect,
        color: partner.color,
    }
}

fn hud(world: &World) -> Hud {
    let player = &world.player;
    Hud {
        level: player.level,
        hp: (player.hp, player.max_hp),
        fp: (player.fp, player.max_fp),
        bp: world
            .config
            .capabilities
            .badge_points
            .then_some((player.bp, player.max_bp)),
        coins: player.coins,
        star_points: player.milestones.star_points,
        crystal_stars: player.milestones.crystal_stars.len(),
        chapter: world.chapter().map(|c| c.number),
        audience: world.audience.clone(),
    }
}
