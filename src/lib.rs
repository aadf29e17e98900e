//! Breakout - a single-player brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (entities, collisions, phase machine, per-frame tick)
//! - `renderer`: CPU-side scene building for an external presentation layer
//! - `platform`: Timing and input collaborators
//! - `config`: Injected game configuration
//! - `app`: Cooperative frame loop

pub mod app;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use app::App;
pub use config::GameConfig;

/// Build-time defaults for every tunable value
pub mod consts {
    use crate::sim::Rgb;

    /// Window
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;
    pub const WINDOW_TITLE: &str = "Breakout";

    /// Largest simulation step accepted from the frame clock (seconds)
    pub const MAX_FRAME_STEP: f32 = 0.05;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    pub const PADDLE_SPEED: f32 = 500.0;
    /// Distance from the bottom of the window to the paddle's top edge
    pub const PADDLE_Y_OFFSET: f32 = 45.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_INITIAL_SPEED: f32 = 320.0;
    /// Speed added each time a level is cleared
    pub const BALL_SPEED_STEP: f32 = 35.0;
    pub const BALL_MAX_SPEED: f32 = 600.0;
    /// Maximum deflection from vertical for an edge hit on the paddle (degrees)
    pub const PADDLE_MAX_BOUNCE_DEG: f32 = 75.0;
    /// Half-width of the random launch cone around straight up (degrees)
    pub const LAUNCH_SPREAD_DEG: f32 = 45.0;
    /// Gap left between the ball and the paddle when resting on it
    pub const BALL_REST_GAP: f32 = 1.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 6;
    pub const BRICK_COLS: u32 = 10;
    pub const BRICK_WIDTH: f32 = 68.0;
    pub const BRICK_HEIGHT: f32 = 22.0;
    pub const BRICK_PADDING: f32 = 4.0;
    pub const BRICK_TOP_OFFSET: f32 = 60.0;
    /// Upper bounds accepted from configuration files
    pub const MAX_BRICK_ROWS: u32 = 64;
    pub const MAX_BRICK_COLS: u32 = 64;

    /// Per-row colours, top row first
    pub const ROW_COLORS: [Rgb; 6] = [
        Rgb::new(220, 45, 45),
        Rgb::new(230, 120, 20),
        Rgb::new(210, 200, 20),
        Rgb::new(45, 185, 45),
        Rgb::new(45, 110, 225),
        Rgb::new(135, 45, 205),
    ];
    /// Per-row base score (multiplied by the brick's hit points)
    pub const ROW_POINTS: [u32; 6] = [60, 50, 40, 30, 20, 10];
    /// Per-row base hit points (level bonus is added on top)
    pub const ROW_BASE_HIT_POINTS: [u32; 6] = [1, 1, 1, 1, 1, 1];

    /// Session defaults
    pub const INITIAL_LIVES: u32 = 3;
    pub const MAX_LEVELS: u32 = 5;
    /// Seconds the level-complete banner stays up before the next level
    pub const LEVEL_COMPLETE_DELAY: f32 = 2.0;

    /// Below this magnitude a vector is treated as zero
    pub const EPSILON: f32 = 1.0e-4;
    /// Extra push applied when separating the ball from a brick
    pub const SEPARATION_SLOP: f32 = 0.5;
}

/// Convert a launch angle measured from straight up (radians) to a unit
/// direction in screen space (y grows downward)
#[inline]
pub fn direction_from_vertical(angle: f32) -> glam::Vec2 {
    glam::Vec2::new(angle.sin(), -angle.cos())
}
