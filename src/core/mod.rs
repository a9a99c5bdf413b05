//! Core game module - states, events, config, and the frame clock.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod events;
mod plugin;
mod states;

pub use config::{GameConfig, CONFIG_PATH};
pub use events::*;
pub use plugin::{load_game_config, CorePlugin, FrameSet, FRAMES_PER_SECOND};
pub use states::*;
