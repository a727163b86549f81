// Kinematic body used by the overworld physics step

use glam::Vec2;

use crate::core::Rect;

/// Downward acceleration applied to airborne bodies (units/tick²)
pub const GRAVITY: f32 = 0.8;

/// Vertical velocity applied by a jump (negative is up)
pub const JUMP_STRENGTH: f32 = -15.0;

/// Horizontal speed while walking
pub const WALK_SPEED: f32 = 5.0;

/// Roll speed recorded while in tube form; walking stays at `WALK_SPEED`
pub const ROLL_SPEED: f32 = 7.0;

/// Plane form never moves upward faster than this
pub const PLANE_RISE_LIMIT: f32 = -3.0;

/// Default body dimensions
pub const BODY_WIDTH: f32 = 40.0;
pub const BODY_HEIGHT: f32 = 60.0;

/// Paper transformation of a body, altering its physics and silhouette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaperMode {
    #[default]
    Normal,
    /// Paper airplane: upward speed is capped for a slow glide
    Plane,
    /// Rolled-up tube
    Tube,
    Boat,
    /// Sideways, paper-thin silhouette
    Thin,
}

impl PaperMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Plane => "plane",
            Self::Tube => "tube",
            Self::Boat => "boat",
            Self::Thin => "thin",
        }
    }
}

/// Direction a body is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Visual pose derived from the body's motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pose {
    /// Standing still
    Idle,
    /// Moving horizontally without rising or falling
    Walking,
    /// Moving upward
    Jumping,
    /// Airborne and moving downward
    Falling,
}

/// Position, velocity and contact state of a moving rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Top-left corner in screen space
    pub position: Vec2,
    /// Units per tick
    pub velocity: Vec2,
    pub size: Vec2,
    pub grounded: bool,
    pub facing: Facing,
    /// Walk-cycle counter, advanced only while moving horizontally
    pub walk_timer: u32,
    pub walking: bool,
    pub mode: PaperMode,
    /// Roll speed of the current form; movement does not read it
    pub speed: f32,
}

impl Body {
    /// Create a grounded, motionless body at the given position
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            size: Vec2::new(BODY_WIDTH, BODY_HEIGHT),
            grounded: true,
            facing: Facing::Right,
            walk_timer: 0,
            walking: false,
            mode: PaperMode::Normal,
            speed: WALK_SPEED,
        }
    }

    /// Bounding rectangle of the body
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Start walking left
    pub fn move_left(&mut self) {
        self.velocity.x = -WALK_SPEED;
        self.facing = Facing::Left;
    }

    /// Start walking right
    pub fn move_right(&mut self) {
        self.velocity.x = WALK_SPEED;
        self.facing = Facing::Right;
    }

    /// Stop horizontal movement
    pub fn stop(&mut self) {
        self.velocity.x = 0.0;
    }

    /// Jump if standing on something; returns whether the jump happened
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.velocity.y = JUMP_STRENGTH;
        self.grounded = false;
        true
    }

    /// Teleport to a point and drop all momentum
    pub fn respawn(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        self.velocity = Vec2::ZERO;
    }

    /// Switch paper form
    pub fn set_mode(&mut self, mode: PaperMode) {
        self.mode = mode;
        if mode != PaperMode::Tube {
            self.speed = WALK_SPEED;
        }
    }

    /// Current pose for rendering
    pub fn pose(&self) -> Pose {
        if self.velocity.y < 0.0 {
            Pose::Jumping
        } else if self.velocity.y > 0.0 && !self.grounded {
            Pose::Falling
        } else if self.velocity.x.abs() > 0.0 {
            Pose::Walking
        } else {
            Pose::Idle
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_body_is_grounded_and_still() {
        let body = Body::new(100.0, 400.0);
        assert!(body.grounded);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.size, Vec2::new(40.0, 60.0));
        assert_eq!(body.pose(), Pose::Idle);
    }

    #[test]
    fn test_move_sets_velocity_and_facing() {
        let mut body = Body::new(0.0, 0.0);
        body.move_left();
        assert_eq!(body.velocity.x, -WALK_SPEED);
        assert_eq!(body.facing, Facing::Left);

        body.move_right();
        assert_eq!(body.velocity.x, WALK_SPEED);
        assert_eq!(body.facing, Facing::Right);

        body.stop();
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut body = Body::new(0.0, 0.0);
        assert!(body.jump());
        assert_eq!(body.velocity.y, JUMP_STRENGTH);
        assert!(!body.grounded);
        assert_eq!(body.pose(), Pose::Jumping);

        assert!(!body.jump(), "no double jumps");
    }

    #[test]
    fn test_respawn_clears_momentum() {
        let mut body = Body::new(0.0, 0.0);
        body.velocity = Vec2::new(5.0, 20.0);
        body.respawn(100.0, 400.0);
        assert_eq!(body.position, Vec2::new(100.0, 400.0));
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_leaving_tube_restores_walk_speed() {
        let mut body = Body::new(0.0, 0.0);
        body.set_mode(PaperMode::Tube);
        body.speed = ROLL_SPEED;
        body.set_mode(PaperMode::Normal);
        assert_eq!(body.speed, WALK_SPEED);
    }

    #[test]
    fn test_pose_falling_only_when_airborne() {
        let mut body = Body::new(0.0, 0.0);
        body.velocity.y = 3.0;
        body.grounded = false;
        assert_eq!(body.pose(), Pose::Falling);

        body.velocity.y = 0.0;
        body.velocity.x = 5.0;
        assert_eq!(body.pose(), Pose::Walking);
    }
}
