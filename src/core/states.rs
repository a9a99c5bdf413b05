//! Game state definitions that control the overall flow of the game.
//!
//! The simulation only steps while `Playing`. `GameOver` is terminal for the
//! session: the last frame stays on screen with the game-over banner on top.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Active gameplay
    #[default]
    Playing,
    /// Out of lives, reached the flag, or left the final level
    GameOver,
}
