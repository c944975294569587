use std::fmt::Debug;

use crate::{
    candidate::Candidate,
    error::{GeneticError, Result},
    target::Target,
};

/// Scores candidates against the target.
pub trait Challenge: Debug + Send + Sync {
    /// Evaluates `candidate` in place, setting its score and solution flag.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidGenomeLength` when the candidate and the
    /// target differ in length.
    fn score(&self, target: &Target, candidate: &mut Candidate) -> Result<()>;
}

/// Counts the positions where the candidate and the target hold the same letter.
///
/// This is positional similarity: a candidate with every right letter in the
/// wrong place scores zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysteryWordChallenge;

impl Challenge for MysteryWordChallenge {
    fn score(&self, target: &Target, candidate: &mut Candidate) -> Result<()> {
        if candidate.len() != target.len() {
            return Err(GeneticError::InvalidGenomeLength {
                expected: target.len(),
                actual: candidate.len(),
            });
        }

        let score = candidate
            .genes()
            .iter()
            .zip(target.as_bytes())
            .filter(|(gene, letter)| gene == letter)
            .count();
        candidate.set_score(score);
        Ok(())
    }
}
