//! Player module - player state, movement, and keyboard input.

mod components;
mod input;
mod movement;
mod plugin;

pub use components::Player;
pub use input::{read_frame_input, Controls, FrameInput};
pub use plugin::PlayerPlugin;
