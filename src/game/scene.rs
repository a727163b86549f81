// Turns a frame snapshot into flat-colour shapes

use glam::Vec2;

use crate::core::{Color, Rect};
use crate::engine::physics::{Facing, PaperMode, Pose, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::engine::renderer::ShapeBatch;
use crate::game::session::view::{EnemyView, Hud, PlayerView};
use crate::game::session::{FrameView, PhaseKind};

const SKIN: Color = Color::rgb(255, 220, 177);
const FP_FILL: Color = Color::rgb(0, 150, 255);
const BP_FILL: Color = Color::rgb(0, 200, 0);
const SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
const MENU_OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.6];
const STYLISH_FLASH: [f32; 4] = [1.0, 1.0, 0.6, 0.25];

const STAGE: Rect = Rect::new(50.0, 400.0, 924.0, 200.0);
const AUDIENCE_METER: Rect = Rect::new(50.0, 650.0, 200.0, 30.0);
const STAR_POWER_METER: Rect = Rect::new(50.0, 690.0, 200.0, 20.0);
const DIALOGUE_BOX: Rect = Rect::new(100.0, 520.0, 824.0, 160.0);
const MENU_PANEL: Rect = Rect::new(312.0, 184.0, 400.0, 400.0);
const CLASSIC_BOX: Rect = Rect::new(100.0, 200.0, 350.0, 400.0);
const ENHANCED_BOX: Rect = Rect::new(550.0, 200.0, 350.0, 400.0);

const SCREEN: Rect = Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);

const HUD_WIDTH: f32 = 250.0;
const GAUGE_WIDTH: f32 = 180.0;
const GAUGE_HEIGHT: f32 = 20.0;

/// Build the shapes for one frame, back to front
pub fn draw_frame(view: &FrameView) -> ShapeBatch {
    let mut batch = ShapeBatch::new();

    match view.phase {
        PhaseKind::Intro => draw_title(&mut batch),
        PhaseKind::GameSelect => draw_game_select(&mut batch),
        _ => {}
    }

    if view.stage {
        if let Some(audience) = view.hud.as_ref().and_then(|hud| hud.audience.as_ref()) {
            batch.fill(AUDIENCE_METER, Color::BLACK);
            batch.fill(
                Rect::new(
                    AUDIENCE_METER.left(),
                    AUDIENCE_METER.top(),
                    AUDIENCE_METER.size.x * audience.size_fraction().clamp(0.0, 1.0),
                    AUDIENCE_METER.size.y,
                ),
                Color::GOLD,
            );
            batch.outline(AUDIENCE_METER, 2.0, Color::WHITE);
            batch.bar(
                STAR_POWER_METER,
                audience.star_power_fraction(),
                Color::BLACK,
                Color::YELLOW,
            );
            batch.outline(STAR_POWER_METER, 2.0, Color::YELLOW);
        }
        batch.fill(STAGE, Color::BROWN);
        batch.outline(STAGE, 3.0, Color::BLACK);
    }

    for &platform in &view.platforms {
        batch.fill(platform, Color::BROWN);
        batch.outline(platform, 2.0, Color::BLACK);
    }

    if let Some(player) = &view.player {
        draw_player(&mut batch, player);
        if view.players_turn {
            let top = player.rect.top() - 12.0;
            let center = player.rect.left() + player.rect.size.x / 2.0;
            batch.triangle(
                Vec2::new(center - 8.0, top - 10.0),
                Vec2::new(center + 8.0, top - 10.0),
                Vec2::new(center, top),
                Color::YELLOW,
            );
        }
    }
    if let Some(partner) = &view.partner {
        batch.fill(partner.rect, partner.color);
    }
    for enemy in &view.enemies {
        draw_enemy(&mut batch, enemy);
    }

    if let Some(hud) = &view.hud {
        draw_hud(&mut batch, hud);
    }

    if view.stylish {
        batch.rect(SCREEN, STYLISH_FLASH);
    }

    match view.phase {
        PhaseKind::Menu => {
            batch.rect(SCREEN, MENU_OVERLAY);
            batch.fill(MENU_PANEL, Color::BLACK);
            batch.outline(MENU_PANEL, 3.0, Color::WHITE);
        }
        PhaseKind::ChapterComplete => {
            batch.fill(SCREEN, Color::BLACK);
            draw_star(&mut batch, Vec2::new(SCREEN_WIDTH / 2.0, 200.0), 50.0, Color::YELLOW);
        }
        PhaseKind::Victory => {
            let center = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT) / 2.0;
            draw_star(&mut batch, center, 120.0, Color::WHITE);
        }
        _ => {}
    }

    if view.dialogue.is_some() {
        batch.fill(DIALOGUE_BOX, Color::BLACK);
        batch.outline(DIALOGUE_BOX, 3.0, Color::WHITE);
    }

    batch
}

/// Layered paper banner with a star
fn draw_title(batch: &mut ShapeBatch) {
    for layer in (0..3u8).rev() {
        let offset = f32::from(layer) * 2.0;
        batch.fill(
            Rect::new(312.0 + offset, 80.0 + offset, 400.0, 60.0),
            Color::rgb(100 - layer * 20, 0, 0),
        );
    }
    batch.fill(Rect::new(312.0, 80.0, 400.0, 60.0), Color::RED);
    batch.fill(Rect::new(362.0, 170.0, 300.0, 20.0), Color::GOLD);
    draw_star(batch, Vec2::new(SCREEN_WIDTH / 2.0, 400.0), 50.0, Color::YELLOW);
}

fn draw_game_select(batch: &mut ShapeBatch) {
    batch.fill(CLASSIC_BOX, Color::RED);
    batch.outline(CLASSIC_BOX, 3.0, Color::WHITE);
    batch.fill(ENHANCED_BOX, Color::DARK_PURPLE);
    batch.outline(ENHANCED_BOX, 3.0, Color::GOLD);
}

/// Five-pointed star as a fan of triangles
fn draw_star(batch: &mut ShapeBatch, center: Vec2, size: f32, color: Color) {
    let point = |i: usize| {
        let angle = std::f32::consts::TAU * i as f32 / 10.0 - std::f32::consts::FRAC_PI_2;
        let radius = if i % 2 == 0 { size } else { size * 0.5 };
        center + Vec2::new(angle.cos(), angle.sin()) * radius
    };
    for i in 0..10 {
        batch.triangle(center, point(i), point((i + 1) % 10), color);
    }
}

fn draw_player(batch: &mut ShapeBatch, player: &PlayerView) {
    let Rect { origin, size } = player.rect;
    let (x, y) = (origin.x, origin.y);

    match player.mode {
        PaperMode::Plane => {
            batch.triangle(
                Vec2::new(x, y + 30.0),
                Vec2::new(x + 40.0, y + 20.0),
                Vec2::new(x + 20.0, y + 40.0),
                Color::RED,
            );
            return;
        }
        PaperMode::Tube => {
            batch.fill(Rect::new(x, y + 20.0, 40.0, 40.0), Color::RED);
            return;
        }
        _ => {}
    }

    // Paper turning sideways while walking
    let squeeze = match player.mode {
        PaperMode::Thin => size.x - 5.0,
        _ if player.pose == Pose::Walking => {
            (player.walk_timer as f32 * 0.1).sin().abs() * 10.0
        }
        _ => 0.0,
    };
    let body_width = size.x - squeeze;
    let body_x = x + squeeze / 2.0;

    batch.rect(
        Rect::new(x - 5.0, y + size.y - 5.0, size.x + 10.0, 10.0),
        SHADOW,
    );
    batch.fill(Rect::new(body_x, y + 20.0, body_width, 30.0), Color::RED);
    batch.fill(Rect::new(body_x, y + 35.0, body_width, 25.0), Color::BLUE);
    batch.fill(Rect::new(x + 5.0, y, 30.0, 30.0), SKIN);
    batch.fill(
        Rect::new(x + 10.0 + squeeze / 2.0, y, 20.0 - squeeze / 2.0, 10.0),
        Color::RED,
    );
    batch.fill(Rect::new(x + 12.0, y + 18.0, 16.0, 3.0), Color::BLACK);

    let eye_x = match player.facing {
        Facing::Right => x + 25.0,
        Facing::Left => x + 15.0,
    };
    batch.fill(Rect::new(eye_x - 2.0, y + 10.0, 4.0, 4.0), Color::BLACK);
}

fn draw_enemy(batch: &mut ShapeBatch, enemy: &EnemyView) {
    let rect = enemy.rect;
    batch.fill(rect, enemy.color);
    batch.outline(rect, 2.0, Color::BLACK);
    batch.bar(
        Rect::new(rect.left(), rect.top() - 20.0, rect.size.x, 5.0),
        enemy.hp_fraction,
        Color::RED,
        Color::GREEN,
    );
}

/// Bottom-left status panel; taller when badge points are shown
fn draw_hud(batch: &mut ShapeBatch, hud: &Hud) {
    let height = if hud.bp.is_some() { 100.0 } else { 80.0 };
    let top = SCREEN_HEIGHT - height;
    let panel = Rect::new(10.0, top, HUD_WIDTH, height);
    batch.fill(panel, Color::BLACK);
    batch.outline(panel, 2.0, Color::WHITE);

    let gauge = |offset: f32| Rect::new(20.0, top + offset, GAUGE_WIDTH, GAUGE_HEIGHT);
    batch.bar(gauge(10.0), ratio(hud.hp), Color::RED, Color::GREEN);
    batch.bar(gauge(35.0), ratio(hud.fp), Color::BLUE, FP_FILL);
    if let Some(bp) = hud.bp {
        batch.bar(gauge(65.0), ratio(bp), Color::GREEN, BP_FILL);
    }

    // One pip per star collected, in a row right of the panel
    let stars = hud.crystal_stars.max(hud.star_points as usize);
    for i in 0..stars {
        batch.fill(
            Rect::new(270.0 + i as f32 * 14.0, top + 10.0, 10.0, 10.0),
            Color::YELLOW,
        );
    }
}

fn ratio((value, max): (i32, i32)) -> f32 {
    crate::core::math::fraction(value, max)
}
