//! Destructible bricks

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `factor`, truncating toward zero
    pub fn scaled(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Normalised RGBA for vertex buffers
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        ]
    }
}

/// A single brick. Destroyed bricks stay in storage, flagged, until the grid is rebuilt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    rect: Rect,
    base_color: Rgb,
    color: Rgb,
    hp: u32,
    max_hp: u32,
    points: u32,
    destroyed: bool,
}

impl Brick {
    /// `hp` is clamped to at least one hit
    pub fn new(rect: Rect, base_color: Rgb, hp: u32, points: u32) -> Self {
        let hp = hp.max(1);
        Self {
            rect,
            base_color,
            color: base_color,
            hp,
            max_hp: hp,
            points,
            destroyed: false,
        }
    }

    /// Register one hit. Returns `true` if this hit destroyed the brick.
    pub fn hit(&mut self) -> bool {
        if self.destroyed {
            return false;
        }

        self.hp -= 1;
        if self.hp == 0 {
            self.destroyed = true;
            return true;
        }

        self.color = self.base_color.scaled(self.brightness());
        false
    }

    /// 40% at the last hit point up to 100% at full health
    fn brightness(&self) -> f32 {
        0.4 + 0.6 * (self.hp as f32 / self.max_hp as f32)
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Current display colour (darkens as damage accumulates)
    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn base_color(&self) -> Rgb {
        self.base_color
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Score awarded on destruction
    pub fn points(&self) -> u32 {
        self.points
    }
}
