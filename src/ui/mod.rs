//! UI module - score label and game-over banner.

mod hud;
mod plugin;

pub use hud::{text_bundle, ScoreText};
pub use plugin::{GameOverUi, UiPlugin};
