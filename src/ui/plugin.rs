//! UI plugin - HUD and the game-over banner.

use bevy::prelude::*;

use super::hud;
use crate::core::GameState;
use crate::world::GameWorld;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app.add_systems(OnEnter(GameState::GameOver), setup_game_over);
    }
}

/// Marker for game over UI entities.
#[derive(Component)]
pub struct GameOverUi;

/// Show the banner over the final frame.
fn setup_game_over(mut commands: Commands, world: Res<GameWorld>) {
    let Some(banner) = world.banner() else {
        warn!("Entered GameOver but the world is still playing");
        return;
    };
    commands.spawn((hud::text_bundle(&banner), GameOverUi));
}
