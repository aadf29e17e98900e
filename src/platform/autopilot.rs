//! Demo autopilot - the computer plays the game
//!
//! Starts sessions, launches the ball and tracks it with the paddle. Used
//! by the headless binary and as a soak test driver.

use super::input::InputSource;
use crate::sim::{GamePhase, GameState, InputEvent, TickInput, UniformSource};

/// Paddle stops steering inside this distance of its target
const DEAD_ZONE: f32 = 4.0;
/// How far ahead (seconds) the ball position is predicted
const LEAD_TIME: f32 = 0.05;

#[derive(Debug, Default)]
pub struct Autopilot {
    frames: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paddle-centre x the autopilot is aiming for
    fn target_x<R: UniformSource>(&self, state: &GameState<R>) -> f32 {
        let ball = &state.ball;
        let lead = ball.pos.x + ball.vel.x * LEAD_TIME;

        // Wobble the contact point so rallies don't repeat exactly
        let t = self.frames as f32 * 0.01;
        let wobble = (t.sin() * 0.3 + (t * 0.7).sin() * 0.15) * state.paddle.width() * 0.5;
        lead + wobble
    }
}

impl InputSource for Autopilot {
    fn poll<R: UniformSource>(&mut self, state: &GameState<R>) -> TickInput {
        self.frames += 1;
        let mut input = TickInput::default();

        match state.phase() {
            GamePhase::MainMenu
            | GamePhase::BallOnPaddle
            | GamePhase::GameOver
            | GamePhase::Victory => input.events.push(InputEvent::Launch),
            GamePhase::Playing => {
                let dx = self.target_x(state) - state.paddle.centre_x();
                input.left = dx < -DEAD_ZONE;
                input.right = dx > DEAD_ZONE;
            }
            GamePhase::Paused => input.events.push(InputEvent::PauseToggle),
            GamePhase::Controls => input.events.push(InputEvent::Cancel),
            GamePhase::LevelComplete => {}
        }

        input
    }
}
