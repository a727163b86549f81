// Per-tick overworld physics step

use super::body::{Body, PaperMode, GRAVITY, PLANE_RISE_LIMIT, ROLL_SPEED};
use super::collision::{resolve_grounding, Platform};
use crate::core::math::clamp;

/// Logical screen size in world units
pub const SCREEN_WIDTH: f32 = 1024.0;
pub const SCREEN_HEIGHT: f32 = 768.0;

/// Advance a body by one tick against a platform list
///
/// Integrates gravity and velocity, re-evaluates ground contact and keeps the
/// body inside the horizontal screen bounds. Falling off the bottom of the
/// screen is left to the caller.
pub fn advance(body: &mut Body, platforms: &[Platform]) {
    if !body.grounded {
        body.velocity.y += GRAVITY;
    }

    match body.mode {
        PaperMode::Plane => body.velocity.y = body.velocity.y.max(PLANE_RISE_LIMIT),
        PaperMode::Tube => body.speed = ROLL_SPEED,
        PaperMode::Normal | PaperMode::Boat | PaperMode::Thin => {}
    }

    body.position += body.velocity;

    resolve_grounding(body, platforms);

    body.position.x = clamp(body.position.x, 0.0, SCREEN_WIDTH - body.size.x);

    if body.velocity.x.abs() > 0.0 {
        body.walk_timer = body.walk_timer.wrapping_add(1);
        body.walking = true;
    } else {
        body.walking = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rect;
    use crate::engine::physics::body::{JUMP_STRENGTH, WALK_SPEED};
    use approx::assert_relative_eq;

    fn ground() -> Vec<Platform> {
        vec![Rect::new(0.0, 500.0, SCREEN_WIDTH, 100.0)]
    }

    #[test]
    fn test_gravity_applies_only_when_airborne() {
        let mut body = Body::new(100.0, 100.0);
        body.grounded = false;
        advance(&mut body, &[]);
        assert_relative_eq!(body.velocity.y, GRAVITY);
        assert_relative_eq!(body.position.y, 100.0 + GRAVITY);

        let mut resting = Body::new(100.0, 100.0);
        advance(&mut resting, &[]);
        assert_relative_eq!(resting.velocity.y, 0.0);
        assert!(!resting.grounded, "no platform underfoot");
    }

    #[test]
    fn test_free_fall_without_platforms() {
        let mut body = Body::new(100.0, 0.0);
        body.grounded = false;
        for _ in 0..60 {
            advance(&mut body, &[]);
        }
        assert!(body.position.y > SCREEN_HEIGHT);
    }

    #[test]
    fn test_body_lands_on_ground() {
        let mut body = Body::new(100.0, 400.0);
        body.grounded = false;
        for _ in 0..30 {
            advance(&mut body, &ground());
        }
        assert_relative_eq!(body.position.y, 440.0);
    }

    #[test]
    fn test_jump_rises_then_lands() {
        let platforms = ground();
        let mut body = Body::new(100.0, 440.0);
        assert!(body.jump());

        advance(&mut body, &platforms);
        assert!(body.position.y < 440.0);
        assert_relative_eq!(body.velocity.y, JUMP_STRENGTH + GRAVITY);

        for _ in 0..60 {
            advance(&mut body, &platforms);
        }
        assert_relative_eq!(body.position.y, 440.0);
    }

    #[test]
    fn test_horizontal_clamp() {
        let mut body = Body::new(2.0, 100.0);
        body.velocity.x = -10.0;
        advance(&mut body, &[]);
        assert_relative_eq!(body.position.x, 0.0);

        let mut body = Body::new(SCREEN_WIDTH - 42.0, 100.0);
        body.velocity.x = 10.0;
        advance(&mut body, &[]);
        assert_relative_eq!(body.position.x, SCREEN_WIDTH - 40.0);
    }

    #[test]
    fn test_walk_timer_only_advances_while_moving() {
        let mut body = Body::new(100.0, 440.0);
        advance(&mut body, &ground());
        assert_eq!(body.walk_timer, 0);
        assert!(!body.walking);

        body.move_right();
        advance(&mut body, &ground());
        advance(&mut body, &ground());
        assert_eq!(body.walk_timer, 2);
        assert!(body.walking);
    }

    #[test]
    fn test_plane_mode_caps_rise() {
        let mut body = Body::new(100.0, 300.0);
        body.set_mode(PaperMode::Plane);
        body.jump();
        advance(&mut body, &[]);
        assert_relative_eq!(body.velocity.y, PLANE_RISE_LIMIT);
    }

    #[test]
    fn test_tube_mode_records_roll_speed_but_walks_normally() {
        let mut body = Body::new(100.0, 440.0);
        body.set_mode(PaperMode::Tube);
        advance(&mut body, &ground());
        assert_relative_eq!(body.speed, ROLL_SPEED);

        body.move_right();
        assert_relative_eq!(body.velocity.x, WALK_SPEED);
        advance(&mut body, &ground());
        assert_relative_eq!(body.position.x, 105.0);

        body.move_left();
        assert_relative_eq!(body.velocity.x, -WALK_SPEED);

        body.set_mode(PaperMode::Normal);
        assert_relative_eq!(body.speed, WALK_SPEED);
    }
}
