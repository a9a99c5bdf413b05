//! Enemy patrol between two fixed x boundaries.

use super::components::{Enemy, Heading};
use crate::core::GameConfig;

impl Enemy {
    /// Advance one frame and turn around at the patrol boundaries.
    ///
    /// The velocity only flips when the enemy is heading into the boundary it
    /// touched, so a single touch never produces more than one reversal.
    /// Returns true if the enemy turned this frame.
    pub fn patrol(&mut self, config: &GameConfig) -> bool {
        self.body.x += self.velocity;

        let at_left = self.body.left() <= config.enemy_left_bound;
        let at_right = self.body.right() >= config.enemy_right_bound;
        let turn = match self.heading() {
            Heading::Left => at_left,
            Heading::Right => at_right,
        };
        if turn {
            self.velocity = -self.velocity;
        }
        turn
    }
}
