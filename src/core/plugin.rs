//! Core plugin that sets up game states, events, the frame clock, and config.

use bevy::prelude::*;

use super::config::GameConfig;
use super::events::*;
use super::states::*;

/// Fixed simulation rate. Speeds and timers are counted in these frames.
pub const FRAMES_PER_SECOND: f64 = 60.0;

/// Ordering of the fixed-frame systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Sample the keyboard.
    Input,
    /// Step the world.
    Simulate,
    /// React to what the world reported.
    Feedback,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Playing, GameOver)
/// - World events
/// - The 60 Hz fixed clock and its system sets
/// - Loading `GameConfig` at startup
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_state::<GameState>()
            .add_event::<WorldEvent>()
            .insert_resource(Time::<Fixed>::from_hz(FRAMES_PER_SECOND))
            .configure_sets(
                FixedUpdate,
                (FrameSet::Input, FrameSet::Simulate, FrameSet::Feedback).chain(),
            )
            .add_systems(Startup, load_game_config)
            .add_systems(
                FixedUpdate,
                (enter_game_over, log_world_events).in_set(FrameSet::Feedback),
            );
    }
}

/// Load gameplay tunables from disk, keeping one already inserted by the app.
pub fn load_game_config(mut commands: Commands, existing: Option<Res<GameConfig>>) {
    if existing.is_none() {
        commands.insert_resource(GameConfig::load());
    }
}

/// Switch to `GameOver` when the world says the session ended.
fn enter_game_over(
    mut events: EventReader<WorldEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in events.read() {
        if let WorldEvent::GameOver { reason } = event {
            if reason.is_win() {
                info!("Game over: the player won ({:?})", reason);
            } else {
                info!("Game over: {:?}", reason);
            }
            next_state.set(GameState::GameOver);
        }
    }
}

fn log_world_events(mut events: EventReader<WorldEvent>) {
    for event in events.read() {
        match event {
            WorldEvent::LevelEntered { level } => info!("Level {} started", level),
            WorldEvent::PlayerHurt { lives_left } => info!("Ouch! {} lives left", lives_left),
            WorldEvent::CoinCollected { .. } | WorldEvent::CoinRestored { .. } => {
                debug!("{:?}", event)
            }
            WorldEvent::GameOver { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn test_game_over_event_switches_state() {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<GameState>()
            .add_event::<WorldEvent>()
            .add_systems(Update, enter_game_over);

        app.update();
        assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::Playing);

        app.world_mut().send_event(WorldEvent::GameOver {
            reason: GameOverReason::OutOfLives,
        });
        app.update();
        app.update();
        assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::GameOver);
    }

    #[test]
    fn test_win_reasons() {
        assert!(GameOverReason::ReachedFlag.is_win());
        assert!(GameOverReason::ClearedFinalLevel.is_win());
        assert!(!GameOverReason::OutOfLives.is_win());
    }
}
