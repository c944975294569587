//! # CandidateGenerator
//!
//! Produces fresh random candidates. The search controller uses a generator to
//! seed generation 0 and to top a shrunken population back up to its full size.

use std::fmt::Debug;

use crate::{candidate::Candidate, rng::RandomNumberGenerator};

pub trait CandidateGenerator: Debug + Send + Sync {
    /// Returns an unevaluated, non-child candidate of exactly `length` letters.
    fn generate(&self, length: usize, rng: &mut RandomNumberGenerator) -> Candidate;
}

/// Draws every letter uniformly from `a..=z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomWordGenerator;

impl CandidateGenerator for RandomWordGenerator {
    fn generate(&self, length: usize, rng: &mut RandomNumberGenerator) -> Candidate {
        Candidate::from_genes(rng.fetch_letters(length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_has_requested_length_and_defaults() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        for length in [1, 4, 25, 60] {
            let candidate = RandomWordGenerator.generate(length, &mut rng);
            assert_eq!(candidate.len(), length);
            assert!(candidate.genes().iter().all(u8::is_ascii_lowercase));
            assert_eq!(candidate.score(), 0);
            assert!(!candidate.is_solution());
            assert!(!candidate.is_selected());
            assert!(!candidate.is_child());
        }
    }
}
