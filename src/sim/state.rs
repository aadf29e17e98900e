//! Session state owned by the controller
//!
//! `GameState` exclusively owns every entity, the phase machine, the score
//! counters and the random source. Nothing outside the frame loop mutates it.

use glam::Vec2;

use super::ball::Ball;
use super::grid::BrickGrid;
use super::paddle::Paddle;
use super::phase::{Action, GamePhase, PhaseMachine, Trigger};
use super::rng::{GameRng, UniformSource};
use crate::config::GameConfig;
use crate::consts::BALL_REST_GAP;

/// Notable things that happened during a tick, for audio and effects layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Launched,
    WallBounce,
    PaddleHit,
    BrickHit,
    BrickDestroyed { points: u32 },
    LifeLost,
    LevelCleared,
    LevelStarted { level: u32 },
    GameOver,
    Victory,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R = GameRng> {
    pub config: GameConfig,
    rng: R,
    machine: PhaseMachine,
    pub ball: Ball,
    pub paddle: Paddle,
    pub grid: BrickGrid,
    /// Monotonic within a session
    pub score: u64,
    pub lives: u32,
    /// 1-based level index
    pub level: u32,
    /// Target ball speed for the current level
    pub ball_speed: f32,
    /// Seconds left in the level-complete phase
    pub level_complete_timer: f32,
    /// Cleared when a quit is processed
    pub running: bool,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState<GameRng> {
    /// Create a session seeded for reproducibility
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_source(config, GameRng::new(seed))
    }
}

impl<R: UniformSource> GameState<R> {
    /// Create a session drawing launch angles from `rng`
    pub fn with_source(config: GameConfig, rng: R) -> Self {
        let config = config.sanitized();
        let paddle = Paddle::new(
            config.paddle_centred_x(),
            config.paddle_y(),
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
        );
        let ball = Ball::new(
            Vec2::new(config.window_width * 0.5, config.window_height * 0.5),
            config.ball_radius,
        );
        let grid = BrickGrid::build(&config, 1);

        let mut state = Self {
            rng,
            machine: PhaseMachine::new(),
            ball,
            paddle,
            grid,
            score: 0,
            lives: config.initial_lives,
            level: 1,
            ball_speed: config.ball_speed_for_level(1),
            level_complete_timer: 0.0,
            running: true,
            events: Vec::new(),
            config,
        };
        state.anchor_ball();
        state
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.machine.phase()
    }

    pub fn machine(&self) -> &PhaseMachine {
        &self.machine
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Where the ball rests: centred on the paddle, just above its top edge
    pub fn rest_position(&self) -> Vec2 {
        Vec2::new(
            self.paddle.centre_x(),
            self.paddle.top_y() - self.ball.radius() - BALL_REST_GAP,
        )
    }

    /// Stop the ball and put it on the paddle
    pub fn anchor_ball(&mut self) {
        let pos = self.rest_position();
        self.ball.reset(pos);
    }

    /// Feed a trigger through the phase machine and carry out its action.
    /// Returns `false` if the trigger was ignored in the current phase.
    pub fn fire(&mut self, trigger: Trigger) -> bool {
        match self.machine.fire(trigger) {
            Some(action) => {
                self.perform(action);
                true
            }
            None => false,
        }
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::StartSession => self.restart(),
            Action::LaunchBall => {
                self.ball.launch(self.ball_speed, &mut self.rng);
                self.events.push(GameEvent::Launched);
            }
            Action::ReanchorBall => self.anchor_ball(),
            Action::StartCountdown => {
                self.level_complete_timer = self.config.level_complete_delay;
                self.events.push(GameEvent::LevelCleared);
                log::info!("Level {} complete, score {}", self.level, self.score);
            }
            Action::AdvanceLevel => self.advance_level(),
            Action::Quit => {
                log::info!("Quit requested in {:?}", self.phase());
                self.running = false;
            }
        }
    }

    /// Full session reset
    fn restart(&mut self) {
        self.score = 0;
        self.lives = self.config.initial_lives;
        self.level = 1;
        self.ball_speed = self.config.ball_speed_for_level(self.level);
        self.level_complete_timer = 0.0;
        self.paddle.set_x(self.config.paddle_centred_x());
        self.grid = BrickGrid::build(&self.config, self.level);
        self.anchor_ball();
        self.events.push(GameEvent::LevelStarted { level: self.level });
        log::info!(
            "New session: {} lives, {} levels, {} bricks",
            self.lives,
            self.config.max_levels,
            self.grid.len()
        );
    }

    fn advance_level(&mut self) {
        self.level += 1;
        self.ball_speed = self.config.ball_speed_for_level(self.level);
        self.paddle.set_x(self.config.paddle_centred_x());
        self.grid = BrickGrid::build(&self.config, self.level);
        self.anchor_ball();
        self.events.push(GameEvent::LevelStarted { level: self.level });
        log::info!("Level {} started, ball speed {}", self.level, self.ball_speed);
    }

    /// Ball fell out: spend a life and re-anchor or end the game
    pub(crate) fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LifeLost);
        self.fire(Trigger::BallLost {
            lives_remaining: self.lives,
        });
        if self.phase() == GamePhase::GameOver {
            self.events.push(GameEvent::GameOver);
            log::info!("Game over at level {} with score {}", self.level, self.score);
        }
    }

    /// Check for a cleared grid after the collision pass
    pub(crate) fn check_level_clear(&mut self) {
        if !self.grid.is_cleared() {
            return;
        }
        let final_level = self.level >= self.config.max_levels;
        self.fire(Trigger::BricksCleared { final_level });
        if self.phase() == GamePhase::Victory {
            self.events.push(GameEvent::Victory);
            log::info!("Victory with score {}", self.score);
        }
    }

    /// Run the level-complete countdown
    pub(crate) fn advance_countdown(&mut self, dt: f32) {
        self.level_complete_timer -= dt;
        if self.level_complete_timer <= 0.0 {
            self.level_complete_timer = 0.0;
            self.fire(Trigger::CountdownExpired);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_BRICK_ROWS;
    use crate::sim::rng::FixedSource;

    fn state() -> GameState<FixedSource> {
        GameState::with_source(GameConfig::default(), FixedSource::constant(0.5))
    }

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(GameConfig::default(), 7);
        assert_eq!(state.phase(), GamePhase::MainMenu);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.grid.remaining(), 60);
        assert!(!state.ball.is_moving());
        assert_eq!(state.ball.pos, Vec2::new(400.0, 555.0 - 8.0 - 1.0));
        assert_eq!(state.rng().seed(), 7);
        assert!(state.running);
    }

    #[test]
    fn test_start_session_resets_everything() {
        let mut state = state();
        state.score = 900;
        state.lives = 1;
        state.level = 4;
        state.ball_speed = 500.0;
        state.paddle.set_x(0.0);
        state.grid.hit(0);

        assert!(state.fire(Trigger::Launch));
        assert_eq!(state.phase(), GamePhase::BallOnPaddle);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.ball_speed, 320.0);
        assert_eq!(state.paddle.x, 340.0);
        assert_eq!(state.grid.remaining(), 60);
        assert_eq!(state.ball.pos, state.rest_position());
    }

    #[test]
    fn test_launch_uses_level_speed() {
        let mut state = state();
        state.fire(Trigger::Launch);
        state.ball_speed = 400.0;
        state.fire(Trigger::Launch);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert!((state.ball.speed() - 400.0).abs() < 1e-3);
        assert!(state.events.contains(&GameEvent::Launched));
    }

    #[test]
    fn test_lose_life_with_lives_left() {
        let mut state = state();
        state.fire(Trigger::Launch);
        state.fire(Trigger::Launch);
        state.paddle.set_x(100.0);
        state.ball.pos = Vec2::new(50.0, 700.0);

        state.lose_life();
        assert_eq!(state.lives, 2);
        assert_eq!(state.phase(), GamePhase::BallOnPaddle);
        assert!(!state.ball.is_moving());
        assert_eq!(state.ball.pos, Vec2::new(160.0, 555.0 - 9.0));
    }

    #[test]
    fn test_lose_last_life_is_game_over() {
        let mut state = state();
        state.fire(Trigger::Launch);
        state.fire(Trigger::Launch);
        state.lives = 1;
        state.lose_life();
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_advance_level_steps_speed() {
        let mut state = state();
        state.fire(Trigger::Launch);
        state.advance_level();
        assert_eq!(state.level, 2);
        assert_eq!(state.ball_speed, 355.0);
        assert!(state.grid.bricks().iter().all(|b| b.hp() == 2));
    }

    #[test]
    fn test_advance_level_caps_speed() {
        let mut state = state();
        state.fire(Trigger::Launch);
        state.level = 8;
        state.advance_level();
        assert_eq!(state.level, 9);
        assert_eq!(state.ball_speed, 600.0);
    }

    #[test]
    fn test_construction_sanitizes_config() {
        let config = GameConfig {
            paddle_y_offset: -100.0,
            brick_rows: 70_000,
            ..GameConfig::default()
        };
        let state = GameState::with_source(config, FixedSource::constant(0.5));
        assert!(state.paddle.top_y() < state.config.window_height);
        assert!(state.rest_position().y < state.config.window_height);
        assert_eq!(state.grid.len(), (MAX_BRICK_ROWS * 10) as usize);
    }
}
