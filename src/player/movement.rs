//! Side-scrolling movement: walking, jumping and falling.
//!
//! Everything here runs once per fixed frame. The jump is a linear impulse
//! decay: the player rises `jump_impulse` pixels and the impulse drops by
//! one each frame, then falls at a constant rate back to the ground.

use super::components::Player;
use super::input::FrameInput;
use crate::core::GameConfig;

impl Player {
    /// Walk left or right. The left screen edge blocks, the right one does not.
    pub fn walk(&mut self, input: &FrameInput, config: &GameConfig) {
        if input.left {
            self.body.x = (self.body.x - config.player_speed).max(0.0);
        }
        if input.right {
            self.body.x += config.player_speed;
        }
    }

    /// Start a jump if the key is held and the player stands on the ground.
    ///
    /// Returns true when a jump started.
    pub fn try_jump(&mut self, input: &FrameInput, config: &GameConfig) -> bool {
        if input.jump && self.is_grounded(config) && !self.is_airborne() {
            self.jump_impulse = config.jump_power;
            return true;
        }
        false
    }

    /// Rise while the impulse lasts, otherwise fall without sinking into the ground.
    pub fn apply_vertical(&mut self, config: &GameConfig) {
        let ground = config.ground_level();
        if self.jump_impulse > 0 {
            self.body.y -= self.jump_impulse as f32;
            self.jump_impulse -= 1;
        } else if self.body.y < ground {
            self.body.y = (self.body.y + config.fall_speed).min(ground);
        }
    }

    pub fn tick_invincibility(&mut self) {
        self.invincibility = self.invincibility.saturating_sub(1);
    }
}
