//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines how two parent candidates are recombined into
//! two children.
pub mod uniform;

use std::fmt::Debug;

use crate::{candidate::Candidate, error::Result, rng::RandomNumberGenerator};

pub trait BreedStrategy: Debug + Clone + Send + Sync {
    /// Recombines two parents into two children.
    ///
    /// ## Parameters
    ///
    /// - `first`, `second`: the parents, which must have the same length.
    /// - `rng`: the random source for any draws the strategy needs.
    ///
    /// ## Returns
    ///
    /// Two children flagged as such, with unevaluated score and flags.
    ///
    /// ## Errors
    ///
    /// Returns `GeneticError::InvalidGenomeLength` when the parents differ in length.
    fn recombine(
        &self,
        first: &Candidate,
        second: &Candidate,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Candidate, Candidate)>;
}

pub use uniform::UniformCrossover;
