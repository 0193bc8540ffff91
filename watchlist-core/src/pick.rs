//! Random selection from the visible list.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::hint::Hint;
use crate::types::MovieRecord;

/// A uniform source of indices.
pub trait RandomSource {
    /// Return an index in `0..len`. Callers guarantee `len > 0`.
    fn index_below(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = ChaCha8Rng> {
    rng: R,
}

impl RngSource<ChaCha8Rng> {
    /// Seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn index_below(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Result of a random pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome<'a> {
    /// The visible list was empty.
    Empty,
    Picked(&'a MovieRecord),
}

impl PickOutcome<'_> {
    /// The message shown to the user for this outcome.
    pub fn hint(&self) -> Hint {
        match self {
            Self::Empty => Hint::info("Nothing to pick. Add a movie or loosen the filters."),
            Self::Picked(record) => Hint::ok(format!("Tonight's pick: {}", record.label())),
        }
    }
}

/// Choose one record uniformly at random. Nothing is mutated.
pub fn pick<'a, R>(visible: &[&'a MovieRecord], rng: &mut R) -> PickOutcome<'a>
where
    R: RandomSource + ?Sized,
{
    if visible.is_empty() {
        return PickOutcome::Empty;
    }
    let index = rng.index_below(visible.len());
    PickOutcome::Picked(visible[index])
}
