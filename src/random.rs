//! Seedable random-generator construction and permutation sampling.
//!
//! The optimizers never reseed or touch global RNG state: a batch driver
//! seeds one generator up front and threads it through every run, making
//! the whole batch reproducible.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// The concrete generator used when a runner builds its own RNG from
/// `config.seed`.
pub type Prng = Xoshiro256PlusPlus;

/// Creates an owned, seeded random generator.
pub fn create_rng(seed: u64) -> Prng {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// Returns a uniformly random permutation of `items`.
pub fn random_permutation<T: Copy, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut permutation = items.to_vec();
    permutation.shuffle(rng);
    permutation
}
