//! The ball entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::UniformSource;
use crate::consts::{EPSILON, LAUNCH_SPREAD_DEG};

/// The bouncing ball. `pos` is the centre of the circle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per second, y grows downward
    pub vel: Vec2,
    radius: f32,
    moving: bool,
}

impl Ball {
    /// A stationary ball centred at `pos`
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            moving: false,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Explicit Euler step; no-op while resting
    pub fn update(&mut self, dt: f32) {
        if !self.moving {
            return;
        }
        self.pos += self.vel * dt;
    }

    /// Send the ball upward at a random angle within the launch cone.
    ///
    /// Ignored while already in flight so repeated launch presses are harmless.
    pub fn launch(&mut self, speed: f32, source: &mut impl UniformSource) {
        if self.moving {
            return;
        }

        let offset_deg = -LAUNCH_SPREAD_DEG + 2.0 * LAUNCH_SPREAD_DEG * source.next_unit();
        // Straight up is -90° with y pointing down
        let angle = (-90.0 + offset_deg).to_radians();

        self.vel = Vec2::new(angle.cos(), angle.sin()) * speed;
        self.moving = true;
    }

    /// Teleport to `pos` and stop
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.moving = false;
    }

    /// Rescale velocity to exactly `speed`; skipped when nearly stationary
    pub fn normalise_speed(&mut self, speed: f32) {
        let current = self.speed();
        if current < EPSILON {
            return;
        }
        self.vel = self.vel / current * speed;
    }
}
