//! Frame timing

use std::time::Instant;

/// Source of per-frame elapsed time
pub trait TimeSource {
    /// Seconds since the previous call
    fn elapsed(&mut self) -> f32;
}

/// Clamp a raw frame duration to `[0, max]`
///
/// Non-finite durations count as zero so a broken clock cannot push the
/// simulation.
pub fn clamp_step(raw: f32, max: f32) -> f32 {
    if raw.is_finite() { raw.clamp(0.0, max) } else { 0.0 }
}

/// Wall-clock frame timer
#[derive(Debug)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for FrameClock {
    fn elapsed(&mut self) -> f32 {
        let now = Instant::now();
        // First frame has no history
        let dt = self
            .last
            .map_or(0.0, |prev| now.duration_since(prev).as_secs_f32());
        self.last = Some(now);
        dt
    }
}

/// Constant step, used for headless runs and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    step: f32,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self { step }
    }

    /// 60 frames per second
    pub fn sixty_hz() -> Self {
        Self::new(1.0 / 60.0)
    }
}

impl TimeSource for FixedClock {
    fn elapsed(&mut self) -> f32 {
        self.step
    }
}
