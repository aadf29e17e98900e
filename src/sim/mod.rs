//! Simulation core
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform concerns:
//! - Caller-supplied delta time only
//! - Injected random source only
//! - Stable iteration order (bricks in row-major construction order)

pub mod ball;
pub mod brick;
pub mod collision;
pub mod grid;
pub mod paddle;
pub mod phase;
pub mod rect;
pub mod rng;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use brick::{Brick, Rgb};
pub use collision::{
    BrickContact, CollisionResult, WallContact, ball_rect_collision, reflect_velocity,
    resolve_bricks, resolve_paddle, resolve_walls,
};
pub use grid::BrickGrid;
pub use paddle::{HorizontalIntent, Paddle};
pub use phase::{Action, GamePhase, PhaseMachine, Trigger};
pub use rect::Rect;
pub use rng::{FixedSource, GameRng, UniformSource};
pub use state::{GameEvent, GameState};
pub use tick::{InputEvent, TickInput, tick};
