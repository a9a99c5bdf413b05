//! Coin Runner - Entry Point
//!
//! Controls:
//! - Left/Right arrows: Walk
//! - Space: Jump
//! - U: Undo the last coin pickup

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_kira_audio::AudioPlugin;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Coin Runner".to_string(),
                resolution: WindowResolution::new(800.0, 600.0),
                resizable: false,
                ..default()
            }),
            ..default()
        }))

        // Audio
        .add_plugins(AudioPlugin)

        // Our game plugin
        .add_plugins(coin_runner::CoinRunnerPlugin)

        .run();
}
