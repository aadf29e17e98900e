//! The player's paddle

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Net horizontal steering requested by the held keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalIntent {
    Left,
    #[default]
    Neutral,
    Right,
}

impl HorizontalIntent {
    /// Both held cancel out, neither held is neutral
    pub fn from_keys(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => HorizontalIntent::Left,
            (false, true) => HorizontalIntent::Right,
            _ => HorizontalIntent::Neutral,
        }
    }

    #[inline]
    pub fn axis(self) -> f32 {
        match self {
            HorizontalIntent::Left => -1.0,
            HorizontalIntent::Neutral => 0.0,
            HorizontalIntent::Right => 1.0,
        }
    }
}

/// Horizontally constrained paddle; `x` is the left edge, `y` the fixed top edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    y: f32,
    width: f32,
    height: f32,
    /// Pixels per second
    speed: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            speed,
        }
    }

    /// Move one step according to `intent`, clamped to `[0, boundary_width - width]`
    pub fn update(&mut self, dt: f32, intent: HorizontalIntent, boundary_width: f32) {
        let max_x = (boundary_width - self.width).max(0.0);
        self.x = (self.x + intent.axis() * self.speed * dt).clamp(0.0, max_x);
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn centre_x(&self) -> f32 {
        self.x + self.width * 0.5
    }

    #[inline]
    pub fn top_y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }
}
