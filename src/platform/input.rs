//! Input polling
//!
//! Sources turn host key state into one [`TickInput`] per frame. Held keys
//! steer the paddle; presses become discrete events.

use std::collections::VecDeque;

use crate::sim::{GameState, InputEvent, TickInput, UniformSource};

/// Per-frame input provider
pub trait InputSource {
    /// Collect input for the next tick. The session is visible so
    /// automated sources can react to it.
    fn poll<R: UniformSource>(&mut self, state: &GameState<R>) -> TickInput;
}

/// Logical keys a host window reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    A,
    D,
    Space,
    P,
    H,
    Escape,
}

impl Key {
    /// Discrete event for a key press, if the key has one
    pub fn event(self) -> Option<InputEvent> {
        match self {
            Key::Space => Some(InputEvent::Launch),
            Key::P => Some(InputEvent::PauseToggle),
            Key::H => Some(InputEvent::HelpToggle),
            Key::Escape => Some(InputEvent::Cancel),
            Key::Left | Key::Right | Key::A | Key::D => None,
        }
    }
}

/// Keyboard state fed by host key-down/key-up callbacks
#[derive(Debug, Default)]
pub struct KeyState {
    left: bool,
    right: bool,
    a: bool,
    d: bool,
    pending: Vec<InputEvent>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::A => self.a = true,
            Key::D => self.d = true,
            _ => {}
        }
        if let Some(event) = key.event() {
            self.pending.push(event);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::A => self.a = false,
            Key::D => self.d = false,
            _ => {}
        }
    }

    /// Window close request
    pub fn close_requested(&mut self) {
        self.pending.push(InputEvent::Close);
    }
}

impl InputSource for KeyState {
    fn poll<R: UniformSource>(&mut self, _state: &GameState<R>) -> TickInput {
        TickInput {
            left: self.left || self.a,
            right: self.right || self.d,
            events: std::mem::take(&mut self.pending),
        }
    }
}

/// Pre-recorded frame inputs, replayed in order
///
/// Frames past the end of the script are empty.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll<R: UniformSource>(&mut self, _state: &GameState<R>) -> TickInput {
        self.frames.pop_front().unwrap_or_default()
    }
}
