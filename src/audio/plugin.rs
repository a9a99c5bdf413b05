//! Audio plugin - plays a sound for coin pickups and damage.
//!
//! Requires `bevy_kira_audio::AudioPlugin` on the app.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioControl, AudioSource};

use crate::core::WorldEvent;

pub const COIN_SOUND_PATH: &str = "sounds/coin.wav";
pub const DAMAGE_SOUND_PATH: &str = "sounds/shock.wav";

/// Audio plugin - loads the sound effects and plays them on world events.
pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sounds)
            .add_systems(Update, play_world_sounds);
    }
}

/// Which sound effect to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Coin,
    Damage,
}

/// Sound effect handles, loaded once at startup.
#[derive(Resource)]
pub struct SoundLibrary {
    pub coin: Handle<AudioSource>,
    pub damage: Handle<AudioSource>,
}

impl SoundLibrary {
    pub fn get(&self, cue: SoundCue) -> &Handle<AudioSource> {
        match cue {
            SoundCue::Coin => &self.coin,
            SoundCue::Damage => &self.damage,
        }
    }
}

/// The sound an event makes, if any.
pub fn cue_for(event: &WorldEvent) -> Option<SoundCue> {
    match event {
        WorldEvent::CoinCollected { .. } => Some(SoundCue::Coin),
        WorldEvent::PlayerHurt { .. } => Some(SoundCue::Damage),
        _ => None,
    }
}

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundLibrary {
        coin: asset_server.load(COIN_SOUND_PATH),
        damage: asset_server.load(DAMAGE_SOUND_PATH),
    });
    info!("Loading sounds {} and {}", COIN_SOUND_PATH, DAMAGE_SOUND_PATH);
}

fn play_world_sounds(
    mut events: EventReader<WorldEvent>,
    sounds: Option<Res<SoundLibrary>>,
    audio: Res<Audio>,
) {
    let Some(sounds) = sounds else {
        events.clear();
        return;
    };
    for cue in events.read().filter_map(cue_for) {
        audio.play(sounds.get(cue).clone());
    }
}
