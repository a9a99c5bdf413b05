//! Enemy state.

use crate::core::GameConfig;
use crate::world::GameObject;

/// Direction an enemy is walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heading {
    Left,
    #[default]
    Right,
}

/// A patrolling enemy: a hazard box with a horizontal velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub body: GameObject,
    /// Pixels per frame. Positive moves right.
    pub velocity: f32,
}

impl Enemy {
    /// An enemy that starts out walking right.
    pub fn new(body: GameObject, config: &GameConfig) -> Self {
        Self {
            body,
            velocity: config.enemy_speed,
        }
    }

    pub fn heading(&self) -> Heading {
        if self.velocity < 0.0 {
            Heading::Left
        } else {
            Heading::Right
        }
    }
}
