//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: Everything that needs randomness takes a `RandomSource`,
//!   so tests can script exact outcomes
//!
//! ```
//! use quiz_battle::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.below(100), b.below(100));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random primitives consumed by the engine.
pub trait RandomSource {
    /// Uniform integer in `0..upper`. `upper` is never zero.
    fn below(&mut self, upper: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Shuffle a slice in place.
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Choose a random element, or `None` for an empty slice.
    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, upper: usize) -> usize {
        (**self).below(upper)
    }

    fn unit(&mut self) -> f64 {
        (**self).unit()
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        (**self).shuffle(slice);
    }

    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        (**self).choose(slice)
    }
}

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn below(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper.max(1))
    }

    fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

/// Scripted random source for tests and replays.
///
/// Hands out the queued values in order, then falls back to `0` / `0.0`.
/// Shuffles and picks consume queued indices too, so a script fixes them
/// exactly.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    indices: std::collections::VecDeque<usize>,
    units: std::collections::VecDeque<f64>,
}

impl ScriptedRng {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue index draws.
    #[must_use]
    pub fn with_indices(mut self, values: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(values);
        self
    }

    /// Queue unit-interval draws.
    #[must_use]
    pub fn with_units(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(values);
        self
    }
}

impl RandomSource for ScriptedRng {
    fn below(&mut self, upper: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % upper.max(1)
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }

    /// Walks from the back, swapping each slot with a scripted index.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.below(i + 1);
            slice.swap(i, j);
        }
    }

    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let index = self.below(slice.len());
        slice.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.below(1000), rng2.below(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.below(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.below(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_unit_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let x = rng.unit();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_scripted_rng() {
        let mut rng = ScriptedRng::new().with_indices([3, 9]).with_units([0.25]);

        assert_eq!(rng.below(5), 3);
        assert_eq!(rng.below(5), 4); // 9 % 5
        assert_eq!(rng.below(5), 0); // exhausted
        assert_eq!(rng.unit(), 0.25);
        assert_eq!(rng.unit(), 0.0);
    }

    #[test]
    fn test_scripted_shuffle_and_choose() {
        let mut rng = ScriptedRng::new().with_indices([0, 0, 2]);
        let mut data = vec![1, 2, 3];

        // i = 2 swaps with 0, then i = 1 swaps with 0
        rng.shuffle(&mut data);
        assert_eq!(data, vec![2, 3, 1]);

        assert_eq!(rng.choose(&data), Some(&1));
        let empty: [i32; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }
}
