//! Keyboard sampling for the simulation.

use bevy::prelude::*;

/// Keys held during one simulation frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub undo: bool,
}

/// Key bindings.
#[derive(Resource, Debug, Clone)]
pub struct Controls {
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub undo: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            jump: KeyCode::Space,
            undo: KeyCode::KeyU,
        }
    }
}

impl Controls {
    /// Snapshot the held state of every bound key.
    pub fn sample(&self, keyboard: &ButtonInput<KeyCode>) -> FrameInput {
        FrameInput {
            left: keyboard.pressed(self.left),
            right: keyboard.pressed(self.right),
            jump: keyboard.pressed(self.jump),
            undo: keyboard.pressed(self.undo),
        }
    }
}

/// Read the keyboard into `FrameInput` at the start of each fixed frame.
pub fn read_frame_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    controls: Res<Controls>,
    mut input: ResMut<FrameInput>,
) {
    *input = controls.sample(&keyboard);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_reads_held_keys() {
        let controls = Controls::default();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ArrowRight);
        keyboard.press(KeyCode::KeyU);

        let input = controls.sample(&keyboard);
        assert_eq!(
            input,
            FrameInput {
                left: false,
                right: true,
                jump: false,
                undo: true,
            }
        );

        // Held keys stay held across frames
        keyboard.clear();
        assert!(controls.sample(&keyboard).right);
    }
}
