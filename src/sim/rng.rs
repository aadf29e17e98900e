//! Injectable uniform random sources
//!
//! The simulation only ever asks for a uniform draw in `[0, 1)`; the source
//! is owned by the session so runs are reproducible from a seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A source of uniformly distributed values in `[0, 1)`
pub trait UniformSource {
    fn next_unit(&mut self) -> f32;
}

/// Seeded PCG generator used in real sessions
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl UniformSource for GameRng {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted
#[derive(Debug, Clone)]
pub struct FixedSource {
    values: Vec<f32>,
    cursor: usize,
}

impl FixedSource {
    /// Always returns `value` (clamped into `[0, 1)`)
    pub fn constant(value: f32) -> Self {
        Self::sequence(vec![value])
    }

    pub fn sequence(values: Vec<f32>) -> Self {
        let values = if values.is_empty() { vec![0.5] } else { values };
        Self { values, cursor: 0 }
    }
}

impl UniformSource for FixedSource {
    fn next_unit(&mut self) -> f32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f32::EPSILON)
    }
}
