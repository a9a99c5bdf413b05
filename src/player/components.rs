//! Player state.

use crate::core::GameConfig;
use crate::world::GameObject;

/// The player avatar plus its frame-counted motion state.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: GameObject,
    /// Pixels to rise this frame. Counts down to zero, then gravity takes over.
    pub jump_impulse: u32,
    /// Frames left during which hazards are ignored.
    pub invincibility: u32,
}

impl Player {
    /// A fresh player standing at the spawn point.
    pub fn spawn(config: &GameConfig) -> Self {
        let (w, h) = config.player_size;
        let mut player = Self {
            body: GameObject::new(0.0, 0.0, w, h),
            jump_impulse: 0,
            invincibility: 0,
        };
        player.respawn(config);
        player
    }

    /// Move back to the spawn point with a fresh invincibility window.
    ///
    /// The jump impulse is left alone, so a hit mid-jump keeps rising from
    /// the spawn point.
    pub fn respawn(&mut self, config: &GameConfig) {
        let spawn = config.spawn_point();
        self.body.x = spawn.x;
        self.body.y = spawn.y;
        self.invincibility = config.invincibility_frames;
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility > 0
    }

    pub fn is_airborne(&self) -> bool {
        self.jump_impulse > 0
    }

    /// On the ground. Falling is clamped to the ground line, so this never
    /// sees the player below it.
    pub fn is_grounded(&self, config: &GameConfig) -> bool {
        self.body.y >= config.ground_level()
    }
}
