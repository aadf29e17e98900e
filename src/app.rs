//! Cooperative frame loop
//!
//! One iteration: poll input, clamp the frame step, tick the session, build
//! the scene and hand it to the surface. Quitting is only observed at the top
//! of an iteration.

use crate::platform::{InputSource, TimeSource, clamp_step};
use crate::renderer::{RenderSurface, Scene};
use crate::sim::{GameRng, GameState, UniformSource, tick};

pub struct App<I, S, T, R = GameRng> {
    state: GameState<R>,
    input: I,
    surface: S,
    clock: T,
    frames: u64,
}

impl<I, S, T, R> App<I, S, T, R>
where
    I: InputSource,
    S: RenderSurface,
    T: TimeSource,
    R: UniformSource,
{
    pub fn new(state: GameState<R>, input: I, surface: S, clock: T) -> Self {
        Self {
            state,
            input,
            surface,
            clock,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Run one frame. Returns false once the session has quit.
    pub fn frame(&mut self) -> bool {
        if !self.state.running {
            return false;
        }

        let input = self.input.poll(&self.state);
        let dt = clamp_step(self.clock.elapsed(), self.state.config.max_frame_step);
        tick(&mut self.state, &input, dt);

        if !self.state.running {
            log::info!("Quit after {} frames", self.frames);
            return false;
        }

        for event in &self.state.events {
            log::trace!("{event:?}");
        }

        let scene = Scene::build(&self.state);
        self.surface.present(&scene);
        self.frames += 1;
        true
    }

    /// Loop until the session quits
    pub fn run(&mut self) {
        while self.frame() {}
    }

    /// Run at most `limit` frames; returns how many ran
    pub fn run_for(&mut self, limit: u64) -> u64 {
        let start = self.frames;
        for _ in 0..limit {
            if !self.frame() {
                break;
            }
        }
        self.frames - start
    }

    /// Tear the loop down, handing back the session
    pub fn into_state(self) -> GameState<R> {
        self.state
    }
}
