//! Game phases and the transition table
//!
//! `PhaseMachine::fire` is the only place a phase changes. It returns the
//! side effect the session must carry out; the machine itself owns no
//! entities.

use serde::{Deserialize, Serialize};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen
    #[default]
    MainMenu,
    /// Ball resting on the paddle, waiting for launch input
    BallOnPaddle,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// All bricks cleared, counting down to the next level
    LevelComplete,
    /// Out of lives
    GameOver,
    /// Final level cleared
    Victory,
    /// Controls reference card
    Controls,
}

impl GamePhase {
    /// Phases in which entities move
    pub fn simulates(self) -> bool {
        matches!(self, GamePhase::Playing | GamePhase::BallOnPaddle)
    }

    /// Phases that show score, level and lives
    pub fn shows_hud(self) -> bool {
        !matches!(self, GamePhase::MainMenu | GamePhase::Controls)
    }
}

/// Something that may move the machine to another phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Launch / confirm press
    Launch,
    PauseToggle,
    HelpToggle,
    /// Escape: closes the controls card, quits anywhere else
    Cancel,
    /// Window closed: always quits
    Close,
    /// Ball fell past the bottom edge; lives already decremented
    BallLost { lives_remaining: u32 },
    /// Last standing brick destroyed
    BricksCleared { final_level: bool },
    /// Level-complete timer ran out
    CountdownExpired,
}

/// Side effect the session performs after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Phase change only
    None,
    /// Reset score, lives, level and speed; rebuild the grid; rest the ball
    StartSession,
    /// Give the resting ball its launch velocity
    LaunchBall,
    /// Put the ball back on the paddle
    ReanchorBall,
    /// Arm the level-complete timer
    StartCountdown,
    /// Move to the next level and rest the ball
    AdvanceLevel,
    /// Terminate the session
    Quit,
}

/// Holds the active phase plus the phase to return to from `Controls`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhaseMachine {
    phase: GamePhase,
    previous: GamePhase,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Phase `Controls` returns to
    pub fn previous(&self) -> GamePhase {
        self.previous
    }

    /// Apply `trigger`. Returns `None` when the trigger means nothing in the
    /// current phase, otherwise the action to carry out.
    pub fn fire(&mut self, trigger: Trigger) -> Option<Action> {
        use GamePhase::*;

        let (next, action) = match (self.phase, trigger) {
            (_, Trigger::Close) => (self.phase, Action::Quit),
            (Controls, Trigger::HelpToggle | Trigger::Cancel) => (self.previous, Action::None),
            (_, Trigger::Cancel) => (self.phase, Action::Quit),

            (MainMenu | GameOver | Victory, Trigger::Launch) => (BallOnPaddle, Action::StartSession),
            (BallOnPaddle, Trigger::Launch) => (Playing, Action::LaunchBall),

            (MainMenu | Paused, Trigger::HelpToggle) => {
                self.previous = self.phase;
                (Controls, Action::None)
            }

            (Playing, Trigger::PauseToggle) => (Paused, Action::None),
            (Paused, Trigger::PauseToggle) => (Playing, Action::None),

            (Playing, Trigger::BallLost { lives_remaining: 0 }) => (GameOver, Action::None),
            (Playing, Trigger::BallLost { .. }) => (BallOnPaddle, Action::ReanchorBall),

            (Playing, Trigger::BricksCleared { final_level: true }) => (Victory, Action::None),
            (Playing, Trigger::BricksCleared { final_level: false }) => {
                (LevelComplete, Action::StartCountdown)
            }

            (LevelComplete, Trigger::CountdownExpired) => (BallOnPaddle, Action::AdvanceLevel),

            _ => return None,
        };

        if next != self.phase {
            log::debug!("Phase {:?} -> {:?} ({:?})", self.phase, next, trigger);
        }
        self.phase = next;
        Some(action)
    }
}
