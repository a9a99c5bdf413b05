//! Coin Runner - a small 2D side-scrolling platformer in Bevy.
//!
//! Walk right through two levels loaded from text files, dodge spikes and
//! patrolling enemies, collect coins (and take the last one back with undo),
//! and touch the flag to finish.
//!
//! # Architecture
//!
//! The simulation is a plain `GameWorld` value stepped once per fixed frame;
//! Bevy plugins host it:
//!
//! - **Core**: Game states, world events, config, the 60 Hz frame clock
//! - **Player**: Player state, movement, keyboard sampling
//! - **Enemies**: Patrolling hazards
//! - **World**: Level files, collision, coin history, the `GameWorld` itself
//! - **Rendering**: Frame snapshot and its 2D mesh renderer
//! - **Audio**: Sound effects for pickups and damage
//! - **UI**: Score label and game-over banner

pub mod audio;
pub mod core;
pub mod enemies;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct CoinRunnerPlugin;

impl Plugin for CoinRunnerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Keyboard input
            .add_plugins(player::PlayerPlugin)

            // Simulation
            .add_plugins(world::WorldPlugin)

            // Presentation
            .add_plugins(rendering::RenderingPlugin)
            .add_plugins(audio::GameAudioPlugin)
            .add_plugins(ui::UiPlugin);
    }
}
