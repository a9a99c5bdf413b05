//! World plugin - builds the session and steps it on the fixed clock.

use bevy::prelude::*;

use super::data::LevelDirectory;
use super::session::GameWorld;
use crate::core::{load_game_config, FrameSet, GameConfig, GameState, WorldEvent};
use crate::player::FrameInput;

/// World plugin - owns the `GameWorld` resource and its per-frame update.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_world.after(load_game_config))
            .add_systems(
                FixedUpdate,
                step_world
                    .in_set(FrameSet::Simulate)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Start a session on level 1 with levels read from the configured directory.
pub fn setup_world(mut commands: Commands, config: Res<GameConfig>) {
    let source = LevelDirectory::new(config.levels_dir.clone());
    info!("Reading levels from {:?}", source.root());
    commands.insert_resource(GameWorld::new(config.clone(), source));
}

/// Advance the world one frame and broadcast what happened.
pub fn step_world(
    input: Res<FrameInput>,
    mut world: ResMut<GameWorld>,
    mut events: EventWriter<WorldEvent>,
) {
    for event in world.update(&input) {
        events.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameOverReason;
    use crate::world::data::testing::InMemoryLevels;

    fn step_app(level1: &str) -> App {
        let mut app = App::new();
        app.add_event::<WorldEvent>()
            .insert_resource(FrameInput::default())
            .insert_resource(GameWorld::new(
                GameConfig::default(),
                InMemoryLevels::default().with_level(1, level1),
            ))
            .add_systems(Update, step_world);
        app
    }

    fn sent_events(app: &App) -> Vec<WorldEvent> {
        app.world()
            .resource::<Events<WorldEvent>>()
            .iter_current_update_events()
            .copied()
            .collect()
    }

    #[test]
    fn test_step_uses_frame_input() {
        let mut app = step_app("");
        app.world_mut().resource_mut::<FrameInput>().right = true;
        app.update();
        app.update();
        assert_eq!(app.world().resource::<GameWorld>().player.body.x, 110.0);
    }

    #[test]
    fn test_step_broadcasts_world_events() {
        let mut app = step_app("flag 110 460\n");
        app.update();
        assert_eq!(
            sent_events(&app),
            vec![WorldEvent::GameOver {
                reason: GameOverReason::ReachedFlag
            }]
        );
        assert!(app.world().resource::<GameWorld>().is_game_over());
    }
}
