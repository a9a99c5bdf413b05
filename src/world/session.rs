//! The game world - every entity and all session state, stepped once per frame.
//!
//! `GameWorld::update` runs the fixed per-frame algorithm:
//!
//! 1. walk left/right
//! 2. start a jump
//! 3. undo the last coin pickup
//! 4. rise or fall
//! 5. tick invincibility
//! 6. hazard hits (spikes, then enemies)
//! 7. enemy patrol
//! 8. coin pickups
//! 9. flag
//! 10. leaving the screen to the right (next level or game over)
//! 11. refresh the score label
//!
//! Once the session is over, `update` does nothing. `render` never mutates.

use bevy::prelude::*;
use std::fmt::Write;

use super::data::{load_level, LevelLayout, LevelSource};
use super::error::LevelLoadError;
use super::geometry::{overlaps, Bounded, GameObject};
use super::history::CoinHistory;
use crate::core::{GameConfig, GameOverReason, GameState, WorldEvent};
use crate::enemies::Enemy;
use crate::player::{FrameInput, Player};
use crate::rendering::frame::*;

/// Level the session starts on.
pub const FIRST_LEVEL: u32 = 1;

/// Owned aggregate of the whole simulation.
#[derive(Resource)]
pub struct GameWorld {
    config: GameConfig,
    source: Box<dyn LevelSource>,
    pub player: Player,
    pub spikes: Bounded<GameObject>,
    pub coins: Bounded<GameObject>,
    pub enemies: Bounded<Enemy>,
    /// Empty when the level has no flag.
    pub flag: GameObject,
    pub history: CoinHistory,
    lives: u32,
    score: i32,
    level: u32,
    state: GameState,
    /// Rewritten in place whenever the frame ends.
    score_text: String,
}

impl GameWorld {
    /// Start a session and load the first level.
    ///
    /// A first level that fails to load leaves the world empty but playable.
    pub fn new(config: GameConfig, source: impl LevelSource + 'static) -> Self {
        let mut world = Self {
            player: Player::spawn(&config),
            spikes: Bounded::with_capacity(config.max_spikes),
            coins: Bounded::with_capacity(config.max_coins),
            enemies: Bounded::with_capacity(config.max_enemies),
            flag: GameObject::default(),
            history: CoinHistory::with_capacity(config.max_coins),
            lives: config.max_lives,
            score: 0,
            level: FIRST_LEVEL,
            state: GameState::Playing,
            score_text: String::new(),
            source: Box::new(source),
            config,
        };
        if let Err(e) = world.load_level(FIRST_LEVEL) {
            error!("Failed to load level {}: {}", FIRST_LEVEL, e);
        }
        world.refresh_score_text();
        world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// "Score: N" as of the end of the last frame.
    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    /// Replace the level contents with the data for `level`.
    ///
    /// On failure nothing changes and the error is returned to the caller.
    pub fn load_level(&mut self, level: u32) -> Result<(), LevelLoadError> {
        let layout = load_level(self.source.as_ref(), level, &self.config)?;
        self.apply_layout(layout);
        Ok(())
    }

    /// Swap in a parsed layout. The coin history only covers the current level.
    pub fn apply_layout(&mut self, layout: LevelLayout) {
        self.spikes = layout.spikes;
        self.coins = layout.coins;
        self.enemies = Bounded::with_capacity(self.config.max_enemies);
        for body in &layout.enemies {
            self.enemies.push(Enemy::new(*body, &self.config));
        }
        self.flag = layout.flag;
        self.history.clear();
    }

    /// Advance the simulation by one frame.
    pub fn update(&mut self, input: &FrameInput) -> Vec<WorldEvent> {
        let mut events = Vec::new();
        if self.is_game_over() {
            return events;
        }

        self.player.walk(input, &self.config);
        self.player.try_jump(input, &self.config);
        if input.undo {
            self.undo_last_coin(&mut events);
        }
        self.player.apply_vertical(&self.config);
        self.player.tick_invincibility();

        self.resolve_hazards(&mut events);

        for enemy in self.enemies.iter_mut() {
            enemy.patrol(&self.config);
        }

        self.collect_coins(&mut events);

        if overlaps(&self.player.body, &self.flag) {
            self.end_session(GameOverReason::ReachedFlag, &mut events);
        }

        if !self.is_game_over() && self.player.body.x > self.config.window_width {
            if self.level < self.config.final_level {
                self.enter_level(self.level + 1, &mut events);
            } else {
                self.end_session(GameOverReason::ClearedFinalLevel, &mut events);
            }
        }

        self.refresh_score_text();
        events
    }

    /// Spikes first, then enemies, each checked against the player as it
    /// stands after any earlier hit this frame.
    fn resolve_hazards(&mut self, events: &mut Vec<WorldEvent>) {
        let spike_count = self.spikes.len();
        for i in 0..spike_count + self.enemies.len() {
            let hazard = if i < spike_count {
                self.spikes.get(i).copied()
            } else {
                self.enemies.get(i - spike_count).map(|enemy| enemy.body)
            };
            let Some(hazard) = hazard else {
                continue;
            };
            if !self.player.is_invincible() && overlaps(&self.player.body, &hazard) {
                self.hurt_player(events);
            }
        }
    }

    fn hurt_player(&mut self, events: &mut Vec<WorldEvent>) {
        self.lives = self.lives.saturating_sub(1);
        self.player.respawn(&self.config);
        debug!("Player hurt, {} lives left", self.lives);
        events.push(WorldEvent::PlayerHurt {
            lives_left: self.lives,
        });
        if self.lives == 0 {
            self.end_session(GameOverReason::OutOfLives, events);
        }
    }

    fn collect_coins(&mut self, events: &mut Vec<WorldEvent>) {
        for index in 0..self.coins.len() {
            let Some(coin) = self.coins.get(index).copied() else {
                continue;
            };
            if !coin.collected && overlaps(&self.player.body, &coin) {
                self.collect_coin(index, events);
            }
        }
    }

    /// Mark coin `index` collected, score it and remember it for undo.
    pub fn collect_coin(&mut self, index: usize, events: &mut Vec<WorldEvent>) {
        let Some(coin) = self.coins.get_mut(index) else {
            return;
        };
        if coin.collected {
            return;
        }
        coin.collected = true;
        self.score += self.config.coin_value;
        if !self.history.push(index) {
            warn!("Coin history full, coin {} cannot be undone", index);
        }
        debug!("Collected coin {}, score {}", index, self.score);
        events.push(WorldEvent::CoinCollected { index });
    }

    /// Put back the most recently collected coin. No-op when nothing to undo.
    pub fn undo_last_coin(&mut self, events: &mut Vec<WorldEvent>) {
        let Some(index) = self.history.pop() else {
            return;
        };
        if let Some(coin) = self.coins.get_mut(index) {
            coin.collected = false;
        }
        self.score -= self.config.coin_value;
        debug!("Restored coin {}, score {}", index, self.score);
        events.push(WorldEvent::CoinRestored { index });
    }

    fn enter_level(&mut self, level: u32, events: &mut Vec<WorldEvent>) {
        self.level = level;
        if let Err(e) = self.load_level(level) {
            error!("Failed to load level {}: {}", level, e);
        }
        self.player.respawn(&self.config);
        info!("Entered level {}", level);
        events.push(WorldEvent::LevelEntered { level });
    }

    /// Enter GameOver. Only the first call has any effect.
    fn end_session(&mut self, reason: GameOverReason, events: &mut Vec<WorldEvent>) {
        if self.is_game_over() {
            return;
        }
        self.state = GameState::GameOver;
        events.push(WorldEvent::GameOver { reason });
    }

    fn refresh_score_text(&mut self) {
        self.score_text.clear();
        // Writing into a String cannot fail.
        let _ = write!(self.score_text, "Score: {}", self.score);
    }

    /// The score label for this frame.
    pub fn score_label(&self) -> TextCommand<'_> {
        TextCommand {
            content: &self.score_text,
            position: Vec2::new(10.0, 10.0),
            font_size: SCORE_FONT_SIZE,
            color: SCORE_COLOR,
        }
    }

    /// The game-over banner, once the session has ended.
    pub fn banner(&self) -> Option<TextCommand<'static>> {
        if !self.is_game_over() {
            return None;
        }
        Some(TextCommand {
            content: BANNER_TEXT,
            position: Vec2::new(
                self.config.window_width / 2.0 - 100.0,
                self.config.window_height / 2.0 - 20.0,
            ),
            font_size: BANNER_FONT_SIZE,
            color: BANNER_COLOR,
        })
    }

    /// Snapshot of everything to draw this frame, back to front.
    pub fn render(&self) -> Frame<'_> {
        let config = &self.config;
        let mut shapes = Vec::with_capacity(
            4 + self.coins.len() + self.spikes.len() + self.enemies.len() + config.max_lives as usize,
        );

        shapes.push(DrawCommand::new(
            Primitive::quad(0.0, 0.0, config.window_width, config.window_height),
            BACKGROUND_COLOR,
        ));
        shapes.push(DrawCommand::new(
            Primitive::quad(
                0.0,
                config.ground_y,
                config.window_width,
                config.window_height - config.ground_y,
            ),
            GROUND_COLOR,
        ));

        let body = &self.player.body;
        shapes.push(DrawCommand::new(
            Primitive::quad(body.x, body.y, body.w, body.h),
            PLAYER_COLOR,
        ));

        // Coins are drawn centred on their top-left corner.
        for coin in self.coins.iter().filter(|coin| !coin.collected) {
            shapes.push(DrawCommand::new(
                Primitive::circle(coin.x, coin.y, COIN_RADIUS),
                COIN_COLOR,
            ));
        }

        for spike in self.spikes.iter().filter(|spike| !spike.is_empty()) {
            shapes.push(DrawCommand::new(
                Primitive::triangle(spike.x, spike.y, spike.w, spike.h),
                SPIKE_COLOR,
            ));
        }

        for enemy in self.enemies.iter().filter(|enemy| !enemy.body.is_empty()) {
            let center = enemy.body.center();
            shapes.push(DrawCommand::new(
                Primitive::circle(center.x, center.y, ENEMY_RADIUS),
                ENEMY_COLOR,
            ));
        }

        if !self.is_game_over() && !self.flag.is_empty() {
            let flag = &self.flag;
            shapes.push(DrawCommand::new(
                Primitive::quad(flag.x, flag.y, flag.w, flag.h),
                FLAG_COLOR,
            ));
        }

        for slot in 0..config.max_lives {
            let color = if slot < self.lives {
                LIFE_REMAINING_COLOR
            } else {
                LIFE_LOST_COLOR
            };
            shapes.push(DrawCommand::new(
                Primitive::circle(
                    config.window_width - 20.0 - slot as f32 * LIFE_SPACING,
                    20.0,
                    LIFE_RADIUS,
                ),
                color,
            ));
        }

        Frame {
            shapes,
            score: self.score_label(),
            banner: self.banner(),
        }
    }
}
