//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for a
//! search run: random words, crossover coin flips and random targets are all
//! drawn from it. Seeding it makes a whole run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use genword::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let letters = rng.fetch_letters(5);
//!
//! assert_eq!(letters.len(), 5);
//! assert!(letters.iter().all(|b| b.is_ascii_lowercase()));
//! ```

use rand::{distributions::Uniform, rngs::StdRng, Rng, SeedableRng};

/// First letter of the genome alphabet.
pub const ALPHABET_START: u8 = b'a';
/// Last letter of the genome alphabet (inclusive).
pub const ALPHABET_END: u8 = b'z';

/// A wrapper around the `rand` crate's `StdRng`.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// Two generators built from the same seed produce the same draws, which is
    /// what makes seeded runs reproducible.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws `num` letters uniformly from `a..=z`.
    pub fn fetch_letters(&mut self, num: usize) -> Vec<u8> {
        let letters = Uniform::new_inclusive(ALPHABET_START, ALPHABET_END);
        (&mut self.rng).sample_iter(letters).take(num).collect()
    }

    /// Flips a fair coin.
    pub fn flip_coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
