use serde::{Deserialize, Serialize};

use ledgehop_core::geometry::Aabb;
use ledgehop_core::render::{Drawable, EntityKind};

use crate::entity::Platform;

/// Downward acceleration (units/tick^2).
pub const GRAVITY: f32 = 0.5;
/// Terminal fall speed (units/tick).
pub const MAX_FALL_SPEED: f32 = 10.0;
/// Upward speed set by a jump (units/tick).
pub const JUMP_IMPULSE: f32 = 12.0;
/// Horizontal displacement per move call.
pub const MOVE_STEP: f32 = 5.0;
/// Player width for AABB collision.
pub const PLAYER_WIDTH: f32 = 30.0;
/// Player height for AABB collision.
pub const PLAYER_HEIGHT: f32 = 50.0;

/// Configurable player physics parameters, loadable from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub jump_impulse: f32,
    pub move_step: f32,
    pub player_width: f32,
    pub player_height: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            jump_impulse: JUMP_IMPULSE,
            move_step: MOVE_STEP,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
        }
    }
}

/// What collision resolution did during one [`Player::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No platform contact was resolved.
    Airborne,
    /// Fell onto a platform top.
    Landed,
    /// Rose into a platform underside; the jump was cut short.
    HeadBump,
}

/// The player-controlled rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub bounds: Aabb,
    pub velocity_y: f32,
    pub jumping: bool,
    pub on_ground: bool,
    physics: PhysicsConfig,
    arena_width: f32,
}

impl Player {
    /// Spawn at rest with the top-left corner at `(x, y)`.
    pub fn new(x: f32, y: f32, physics: PhysicsConfig, arena_width: f32) -> Self {
        Self {
            bounds: Aabb::new(x, y, physics.player_width, physics.player_height),
            velocity_y: 0.0,
            jumping: false,
            on_ground: false,
            physics,
            arena_width,
        }
    }

    /// Advance one tick: gravity, vertical integration, then collision
    /// resolution against every platform in order.
    ///
    /// `on_ground` is rebuilt from scratch each call. A resolution zeroes the
    /// vertical velocity, so later overlapping platforms in the same scan are
    /// left alone. Overlap while the velocity is exactly zero is not resolved
    /// (there is no horizontal collision response).
    pub fn update(&mut self, platforms: &[Platform]) -> StepOutcome {
        self.velocity_y += self.physics.gravity;
        if self.velocity_y > self.physics.max_fall_speed {
            self.velocity_y = self.physics.max_fall_speed;
        }

        self.bounds.y += self.velocity_y;

        self.on_ground = false;
        let mut outcome = StepOutcome::Airborne;
        for platform in platforms {
            let surface = platform.aabb();
            if !self.bounds.overlaps(surface) {
                continue;
            }

            if self.velocity_y > 0.0 {
                // Falling
                self.bounds.snap_bottom_to(surface.top());
                self.velocity_y = 0.0;
                self.on_ground = true;
                self.jumping = false;
                outcome = StepOutcome::Landed;
            } else if self.velocity_y < 0.0 {
                // Rising
                self.bounds.snap_top_to(surface.bottom());
                self.velocity_y = 0.0;
                outcome = StepOutcome::HeadBump;
            }
        }
        outcome
    }

    /// Start a jump if standing on a platform. Returns whether it jumped.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground || self.jumping {
            return false;
        }
        self.jumping = true;
        self.velocity_y = -self.physics.jump_impulse;
        self.on_ground = false;
        true
    }

    pub fn move_left(&mut self) {
        self.bounds.x -= self.physics.move_step;
        if self.bounds.left() < 0.0 {
            self.bounds.set_left(0.0);
        }
    }

    pub fn move_right(&mut self) {
        self.bounds.x += self.physics.move_step;
        if self.bounds.right() > self.arena_width {
            self.bounds.set_right(self.arena_width);
        }
    }
}

impl Drawable for Player {
    fn bounds(&self) -> Aabb {
        self.bounds
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }
}
