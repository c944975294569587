//! # Candidate
//!
//! A `Candidate` is one member of the search population: a fixed-length word over
//! the letters `a` to `z` together with the state the current generation derived
//! from it (its score and its solution, selection and child flags).
//!
//! ## Example
//!
//! ```rust
//! use genword::candidate::Candidate;
//!
//! let candidate = Candidate::new("cat").unwrap();
//! assert_eq!(candidate.len(), 3);
//! assert_eq!(candidate.value(), "cat");
//! assert_eq!(candidate.score(), 0);
//! assert!(!candidate.is_child());
//!
//! assert!(Candidate::new("Cat").is_err());
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{GeneticError, Result};
use crate::rng::{ALPHABET_END, ALPHABET_START};

/// Checks that every byte of `word` lies in `a..=z`.
pub(crate) fn validate_letters(word: &[u8]) -> Result<()> {
    match word
        .iter()
        .position(|b| !(ALPHABET_START..=ALPHABET_END).contains(b))
    {
        Some(idx) => Err(GeneticError::InvalidGenome(format!(
            "'{}' has a non-lowercase letter at position {}",
            String::from_utf8_lossy(word),
            idx
        ))),
        None => Ok(()),
    }
}

/// Serializes with its genes as a `value` string. Only `Candidate::new` and the
/// operators build candidates, so there is no `Deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    #[serde(rename = "value", serialize_with = "serialize_genes")]
    genes: Vec<u8>,
    score: usize,
    is_solution: bool,
    is_selected: bool,
    is_child: bool,
}

#[allow(clippy::ptr_arg)]
fn serialize_genes<S: Serializer>(
    genes: &Vec<u8>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let value: String = genes.iter().map(|&b| b as char).collect();
    serializer.serialize_str(&value)
}

impl Candidate {
    /// Builds an unevaluated, non-child candidate from `value`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidGenome` when `value` contains anything but
    /// the letters `a` to `z`.
    pub fn new(value: &str) -> Result<Self> {
        validate_letters(value.as_bytes())?;
        Ok(Self::from_genes(value.as_bytes().to_vec()))
    }

    /// Builds a candidate from genes already known to be lowercase letters.
    pub(crate) fn from_genes(genes: Vec<u8>) -> Self {
        Self {
            genes,
            score: 0,
            is_solution: false,
            is_selected: false,
            is_child: false,
        }
    }

    /// Builds a child of a recombination, flagged as such and unevaluated.
    pub(crate) fn child(genes: Vec<u8>) -> Self {
        Self {
            is_child: true,
            ..Self::from_genes(genes)
        }
    }

    pub fn genes(&self) -> &[u8] {
        &self.genes
    }

    pub fn value(&self) -> String {
        self.genes.iter().map(|&b| b as char).collect()
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_solution(&self) -> bool {
        self.is_solution
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn is_child(&self) -> bool {
        self.is_child
    }

    /// Records an evaluation: the solution flag follows from `score == len()`.
    pub(crate) fn set_score(&mut self, score: usize) {
        self.score = score;
        self.is_solution = score == self.genes.len();
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    /// Clears everything the previous generation derived, keeping the genes and
    /// the child flag.
    pub(crate) fn reset_evaluation(&mut self) {
        self.score = 0;
        self.is_solution = false;
        self.is_selected = false;
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}
