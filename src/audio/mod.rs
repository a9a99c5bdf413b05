//! Audio module - sound effects for world events.

mod plugin;

pub use plugin::{cue_for, GameAudioPlugin, SoundCue, SoundLibrary};
