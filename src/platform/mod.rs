//! Platform abstraction layer
//!
//! Seams between the simulation and the host:
//! - Frame time
//! - Input polling
//! - Demo autopilot

pub mod autopilot;
pub mod input;
pub mod time;

pub use autopilot::Autopilot;
pub use input::{InputSource, KeyState, ScriptedInput};
pub use time::{FixedClock, FrameClock, TimeSource, clamp_step};
