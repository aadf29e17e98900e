//! Per-frame simulation step
//!
//! Ordering within a frame: discrete input events drive phase transitions,
//! then the active phase advances (paddle, ball, walls, paddle bounce, bricks,
//! level-clear check), leaving the state ready for rendering.

use serde::{Deserialize, Serialize};

use super::collision::{resolve_bricks, resolve_paddle, resolve_walls};
use super::paddle::HorizontalIntent;
use super::phase::{GamePhase, Trigger};
use super::rng::UniformSource;
use super::state::{GameEvent, GameState};

/// Discrete key presses, device independent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Launch / start / restart
    Launch,
    PauseToggle,
    HelpToggle,
    /// Escape: close the controls card or quit
    Cancel,
    /// Window close request
    Close,
}

impl From<InputEvent> for Trigger {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::Launch => Trigger::Launch,
            InputEvent::PauseToggle => Trigger::PauseToggle,
            InputEvent::HelpToggle => Trigger::HelpToggle,
            InputEvent::Cancel => Trigger::Cancel,
            InputEvent::Close => Trigger::Close,
        }
    }
}

/// Input snapshot for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
    /// Presses since the previous frame, oldest first
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn press(event: InputEvent) -> Self {
        Self {
            events: vec![event],
            ..Default::default()
        }
    }

    pub fn intent(&self) -> HorizontalIntent {
        HorizontalIntent::from_keys(self.left, self.right)
    }
}

/// Advance the session by one frame of `dt` seconds
pub fn tick<R: UniformSource>(state: &mut GameState<R>, input: &TickInput, dt: f32) {
    state.events.clear();

    for &event in &input.events {
        state.fire(event.into());
        if !state.running {
            return;
        }
    }

    match state.phase() {
        phase if phase.simulates() => simulate(state, input.intent(), dt),
        GamePhase::LevelComplete => state.advance_countdown(dt),
        _ => {}
    }
}

fn simulate<R: UniformSource>(state: &mut GameState<R>, intent: HorizontalIntent, dt: f32) {
    let width = state.config.window_width;
    let height = state.config.window_height;

    state.paddle.update(dt, intent, width);

    if state.phase() == GamePhase::BallOnPaddle {
        // Ball rides along with the paddle until launched
        state.anchor_ball();
        return;
    }

    state.ball.update(dt);

    let walls = resolve_walls(&mut state.ball, width, height, state.ball_speed);
    if walls.bounced {
        state.events.push(GameEvent::WallBounce);
    }
    if walls.fell_out {
        state.lose_life();
        return;
    }

    if resolve_paddle(&mut state.ball, &state.paddle, state.ball_speed) {
        state.events.push(GameEvent::PaddleHit);
    }

    let contact = resolve_bricks(&mut state.ball, &mut state.grid, state.ball_speed);
    for &index in &contact.damaged {
        if contact.destroyed.contains(&index) {
            let points = state.grid.bricks()[index].points();
            state.events.push(GameEvent::BrickDestroyed { points });
        } else {
            state.events.push(GameEvent::BrickHit);
        }
    }
    state.score += contact.points;

    state.check_level_clear();
}
