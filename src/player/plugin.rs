//! Player plugin - keyboard bindings and input sampling.

use bevy::prelude::*;

use super::input::{read_frame_input, Controls, FrameInput};
use crate::core::{FrameSet, GameState};

/// Player plugin - turns the keyboard into per-frame input for the world.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Controls>()
            .init_resource::<FrameInput>()
            .add_systems(
                FixedUpdate,
                read_frame_input
                    .in_set(FrameSet::Input)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
