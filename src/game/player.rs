//! The runner: gravity, double jump, health and the post-hit blink window.

use super::animation::AnimationCycle;
use super::geometry::Hitbox;
use crate::core::constants::*;

/// Which sprite sequence the player is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Jumping,
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Left edge, fixed for the whole run.
    pub x: f32,
    /// Top edge. `PLAYER_GROUND_Y` = standing on the ground, smaller = higher.
    pub y: f32,
    /// Vertical velocity per frame (negative = upward).
    pub velocity_y: f32,
    pub jumps_remaining: u8,
    pub animation_state: AnimationState,
    pub animation: AnimationCycle,
    pub health: u8,
    /// Frames left during which collisions are ignored and the sprite blinks.
    pub invulnerability_timer: u32,
    /// Result of the most recent `render_visible` call.
    pub visible: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: PLAYER_X,
            y: PLAYER_GROUND_Y,
            velocity_y: 0.0,
            jumps_remaining: MAX_JUMPS,
            animation_state: AnimationState::Running,
            animation: AnimationCycle::new(PLAYER_ANIM_FRAMES, PLAYER_ANIM_STEP),
            health: MAX_HEALTH,
            invulnerability_timer: 0,
            visible: true,
        }
    }

    /// One frame of physics and animation.
    pub fn advance(&mut self) {
        self.velocity_y += GRAVITY;
        self.y += self.velocity_y;

        if self.y >= PLAYER_GROUND_Y {
            self.y = PLAYER_GROUND_Y;
            self.velocity_y = 0.0;
            self.jumps_remaining = MAX_JUMPS;
            self.animation_state = AnimationState::Running;
        } else {
            self.animation_state = AnimationState::Jumping;
        }

        self.animation.advance();
    }

    /// Spend one jump charge. Returns true if the jump happened.
    ///
    /// A second jump is allowed mid-air while charges remain.
    pub fn jump(&mut self) -> bool {
        if self.jumps_remaining == 0 {
            return false;
        }
        self.velocity_y = -JUMP_STRENGTH;
        self.jumps_remaining -= 1;
        true
    }

    /// Lose one heart and start the invulnerability window.
    /// Refused (returns false) while already invulnerable.
    pub fn take_hit(&mut self) -> bool {
        if self.is_invulnerable() {
            return false;
        }
        self.health = self.health.saturating_sub(1);
        self.invulnerability_timer = INVULNERABILITY_FRAMES;
        true
    }

    /// Count down the invulnerability window and decide whether the sprite is
    /// drawn this frame. Must be called once per frame.
    pub fn render_visible(&mut self) -> bool {
        self.visible = if self.invulnerability_timer > 0 {
            self.invulnerability_timer -= 1;
            self.invulnerability_timer % BLINK_PERIOD < BLINK_PERIOD / 2
        } else {
            true
        };
        self.visible
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerability_timer > 0
    }

    pub fn is_on_ground(&self) -> bool {
        self.y >= PLAYER_GROUND_Y
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Index into the run or jump sequence, whichever `animation_state` selects.
    pub fn frame_index(&self) -> usize {
        self.animation.frame()
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}
