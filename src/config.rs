//! Game configuration
//!
//! Every tunable the simulation reads. Defaults mirror `crate::consts`; a JSON
//! document may override any subset of keys.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Injected game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub window_width: f32,
    pub window_height: f32,
    /// Largest step (seconds) a single frame may simulate
    pub max_frame_step: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal speed in pixels per second
    pub paddle_speed: f32,
    /// Distance from the window bottom to the paddle's top edge
    pub paddle_y_offset: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_initial_speed: f32,
    pub ball_speed_step: f32,
    pub ball_max_speed: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_top_offset: f32,

    // === Session ===
    pub initial_lives: u32,
    pub max_levels: u32,
    /// Seconds spent in the level-complete phase
    pub level_complete_delay: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            max_frame_step: MAX_FRAME_STEP,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_y_offset: PADDLE_Y_OFFSET,

            ball_radius: BALL_RADIUS,
            ball_initial_speed: BALL_INITIAL_SPEED,
            ball_speed_step: BALL_SPEED_STEP,
            ball_max_speed: BALL_MAX_SPEED,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_top_offset: BRICK_TOP_OFFSET,

            initial_lives: INITIAL_LIVES,
            max_levels: MAX_LEVELS,
            level_complete_delay: LEVEL_COMPLETE_DELAY,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from a JSON file, falling back to defaults when the
    /// file is missing or malformed
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid configuration in {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values the simulation cannot work with
    pub fn sanitized(mut self) -> Self {
        self.initial_lives = self.initial_lives.max(1);
        self.max_levels = self.max_levels.max(1);
        if self.max_frame_step <= 0.0 {
            self.max_frame_step = MAX_FRAME_STEP;
        }
        self.paddle_width = self.paddle_width.clamp(1.0, self.window_width.max(1.0));
        self.paddle_height = self.paddle_height.clamp(1.0, self.window_height.max(1.0));
        // Paddle top must stay inside the window
        self.paddle_y_offset = self
            .paddle_y_offset
            .clamp(self.paddle_height, self.window_height.max(self.paddle_height));
        self.brick_rows = self.brick_rows.clamp(1, MAX_BRICK_ROWS);
        self.brick_cols = self.brick_cols.clamp(1, MAX_BRICK_COLS);
        self.ball_max_speed = self.ball_max_speed.max(self.ball_initial_speed);
        self.ball_radius = self.ball_radius.max(EPSILON);
        self.level_complete_delay = self.level_complete_delay.max(0.0);
        self
    }

    /// Left edge that centres the paddle horizontally
    pub fn paddle_centred_x(&self) -> f32 {
        (self.window_width - self.paddle_width) * 0.5
    }

    /// Fixed top edge of the paddle
    pub fn paddle_y(&self) -> f32 {
        self.window_height - self.paddle_y_offset
    }

    /// Ball speed for a 1-based level index, capped at the maximum
    pub fn ball_speed_for_level(&self, level: u32) -> f32 {
        let steps = level.saturating_sub(1) as f32;
        (self.ball_initial_speed + steps * self.ball_speed_step).min(self.ball_max_speed)
    }
}
