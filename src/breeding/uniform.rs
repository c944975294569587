//! # UniformCrossover
//!
//! For every locus a fair coin decides the order in which the two parents' letters
//! are handed to the two children: heads keeps it, tails swaps it. Each child
//! therefore takes every letter from one parent or the other, and at every locus
//! the two children together hold exactly the two parents' letters.
use super::BreedStrategy;
use crate::{
    candidate::Candidate,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCrossover;

impl BreedStrategy for UniformCrossover {
    fn recombine(
        &self,
        first: &Candidate,
        second: &Candidate,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Candidate, Candidate)> {
        if first.len() != second.len() {
            return Err(GeneticError::InvalidGenomeLength {
                expected: first.len(),
                actual: second.len(),
            });
        }

        let mut genes_a = Vec::with_capacity(first.len());
        let mut genes_b = Vec::with_capacity(second.len());

        for (&a, &b) in first.genes().iter().zip(second.genes()) {
            if rng.flip_coin() {
                genes_a.push(a);
                genes_b.push(b);
            } else {
                genes_a.push(b);
                genes_b.push(a);
            }
        }

        Ok((Candidate::child(genes_a), Candidate::child(genes_b)))
    }
}
