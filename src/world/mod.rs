//! World module - level data, entities, collision, and the per-frame simulation.

pub mod data;
mod error;
mod geometry;
mod history;
mod plugin;
mod session;

pub use data::{load_level, LevelDirectory, LevelLayout, LevelRecord, LevelSource, ObjectKind};
pub use error::LevelLoadError;
pub use geometry::{overlaps, Bounded, GameObject};
pub use history::CoinHistory;
pub use plugin::{setup_world, step_world, WorldPlugin};
pub use session::{GameWorld, FIRST_LEVEL};
