//! Events emitted by the simulation for the host systems.
//!
//! The world reports what happened during a frame as `WorldEvent`s. The
//! audio, logging and state systems listen for them so none of them need to
//! diff the world state themselves.

use bevy::prelude::*;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// Lives reached zero after taking damage.
    OutOfLives,
    /// The player touched the flag.
    ReachedFlag,
    /// The player walked off the right edge of the final level.
    ClearedFinalLevel,
}

impl GameOverReason {
    /// True for the endings where the player made it through.
    pub fn is_win(&self) -> bool {
        !matches!(self, GameOverReason::OutOfLives)
    }
}

/// Something notable that happened during one simulation frame.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum WorldEvent {
    /// A coin was picked up. Plays the coin sound.
    CoinCollected { index: usize },
    /// The last collected coin was put back by the undo action.
    CoinRestored { index: usize },
    /// The player touched a hazard. Plays the damage sound.
    PlayerHurt { lives_left: u32 },
    /// The player advanced to a new level.
    LevelEntered { level: u32 },
    /// The session ended. Sent at most once.
    GameOver { reason: GameOverReason },
}
