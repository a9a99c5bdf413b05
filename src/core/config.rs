//! Gameplay configuration loaded from an external RON file.
//!
//! Every tunable of the simulation lives here so the feel of the game can be
//! tweaked without recompilation. All distances are in pixels and all
//! durations are in fixed frames.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Default location of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/config.ron";

/// Gameplay configuration loaded from assets/data/config.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Screen
    pub window_width: f32,
    pub window_height: f32,
    /// Top edge of the ground strip.
    pub ground_y: f32,

    // Player
    pub player_size: (f32, f32),
    pub spawn_x: f32,
    pub player_speed: f32,
    pub jump_power: u32,
    pub fall_speed: f32,
    pub invincibility_frames: u32,
    pub max_lives: u32,

    // Scoring
    pub coin_value: i32,

    // Enemies
    pub enemy_speed: f32,
    pub enemy_left_bound: f32,
    pub enemy_right_bound: f32,

    // Level capacities
    pub max_spikes: usize,
    pub max_coins: usize,
    pub max_enemies: usize,

    // Object sizes (all square)
    pub coin_size: f32,
    pub spike_size: f32,
    pub enemy_size: f32,
    pub flag_size: f32,

    // Levels
    pub levels_dir: PathBuf,
    pub final_level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 800.0,
            window_height: 600.0,
            ground_y: 500.0,

            player_size: (40.0, 40.0),
            spawn_x: 100.0,
            player_speed: 5.0,
            jump_power: 20,
            fall_speed: 8.0,
            invincibility_frames: 60,
            max_lives: 5,

            coin_value: 10,

            enemy_speed: 2.0,
            enemy_left_bound: 200.0,
            enemy_right_bound: 600.0,

            max_spikes: 2,
            max_coins: 10,
            max_enemies: 2,

            coin_size: 20.0,
            spike_size: 40.0,
            enemy_size: 40.0,
            flag_size: 40.0,

            levels_dir: PathBuf::from("assets/levels"),
            final_level: 2,
        }
    }
}

impl GameConfig {
    /// Y coordinate of the player's top edge when standing on the ground.
    pub fn ground_level(&self) -> f32 {
        self.ground_y - self.player_size.1
    }

    /// Where the player appears at level start and after taking damage.
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.spawn_x, self.ground_level())
    }

    /// Parse a config from RON text. Missing fields take their defaults.
    pub fn from_ron(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }

    /// Load the config from RON file, falling back to defaults.
    pub fn load() -> Self {
        let path = CONFIG_PATH;
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_ron(&contents) {
                Ok(config) => {
                    info!("Loaded game config from {}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_layout() {
        let config = GameConfig::default();
        assert_eq!(config.ground_level(), 460.0);
        assert_eq!(config.spawn_point(), Vec2::new(100.0, 460.0));
        assert_eq!(config.max_coins, 10);
        assert_eq!(config.final_level, 2);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = GameConfig::from_ron("(player_speed: 7.0, max_lives: 3)").unwrap();
        assert_eq!(config.player_speed, 7.0);
        assert_eq!(config.max_lives, 3);
        assert_eq!(config.jump_power, 20);
        assert_eq!(config.levels_dir, PathBuf::from("assets/levels"));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(GameConfig::from_ron("(player_speed: \"fast\")").is_err());
    }
}
