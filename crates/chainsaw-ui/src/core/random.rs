//! Uniform random sources behind a small trait seam.
//!
//! # Design
//! - Pickers only need one operation: a draw in `[0, 1)`.
//! - The browser build uses `Math.random`; tests substitute a scripted
//!   sequence or a seeded `rand` generator.

use rand::{Rng, RngCore};

/// Source of independent uniform draws in `[0, 1)`.
pub trait UniformSource {
    /// Next draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Adapter exposing any `rand` generator as a [`UniformSource`].
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    /// Wrap a generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> UniformSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Source that replays `draws` in order. An empty script always yields `0.0`.
    #[must_use]
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }
}

impl UniformSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}

/// Browser `Math.random` source.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRandom;

#[cfg(target_arch = "wasm32")]
impl UniformSource for BrowserRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scripted_source_cycles() {
        let mut source = ScriptedSource::new(vec![0.1, 0.9]);
        assert!((source.next_unit() - 0.1).abs() < f64::EPSILON);
        assert!((source.next_unit() - 0.9).abs() < f64::EPSILON);
        assert!((source.next_unit() - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_script_yields_zero() {
        let mut source = ScriptedSource::new(Vec::new());
        assert!(source.next_unit().abs() < f64::EPSILON);
    }

    #[test]
    fn rng_source_stays_in_unit_interval() {
        let mut source = RngSource::new(StdRng::seed_from_u64(7));
        for _ in 0..1_000 {
            let draw = source.next_unit();
            assert!((0.0..1.0).contains(&draw), "draw {draw} out of range");
        }
    }
}
