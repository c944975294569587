//! # Target
//!
//! The `Target` is the hidden word the search reconstructs. It is acquired once,
//! before the first generation, through a `TargetSupplier`, and never changes
//! afterwards.
//!
//! Two suppliers are provided:
//!
//! - `DictionaryTarget` returns the dictionary word for the requested length when
//!   the length is in `1..26` and an entry exists, and a random word otherwise.
//! - `RandomTarget` always returns a random word.
//!
//! Any closure `Fn(usize, &mut RandomNumberGenerator) -> Result<Target>` is a
//! supplier as well.
//!
//! ## Example
//!
//! ```rust
//! use genword::rng::RandomNumberGenerator;
//! use genword::target::{Dictionary, DictionaryTarget, TargetSupplier};
//!
//! let mut dictionary = Dictionary::new();
//! dictionary.insert(3, "cat").unwrap();
//!
//! let supplier = DictionaryTarget::new(dictionary);
//! let mut rng = RandomNumberGenerator::new();
//!
//! assert_eq!(supplier.supply(3, &mut rng).unwrap().as_str(), "cat");
//! assert_eq!(supplier.supply(5, &mut rng).unwrap().len(), 5);
//! ```

use std::collections::BTreeMap;
use std::fmt::{self, Debug};

use crate::candidate::validate_letters;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Lengths below this bound may be served from the dictionary.
pub const DICTIONARY_LENGTH_LIMIT: usize = 26;

/// The hidden word. Only lowercase letters, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target(String);

impl Target {
    /// Builds a target and checks it against the run's word length.
    ///
    /// # Errors
    ///
    /// `InvalidGenomeLength` when `word.len() != length`, `InvalidGenome` when the
    /// word holds anything but `a` to `z`.
    pub fn new(word: &str, length: usize) -> Result<Self> {
        if word.len() != length {
            return Err(GeneticError::InvalidGenomeLength {
                expected: length,
                actual: word.len(),
            });
        }
        validate_letters(word.as_bytes())?;
        Ok(Self(word.to_string()))
    }

    /// Draws a uniformly random target of `length` letters.
    pub fn random(length: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self(rng.fetch_letters(length).into_iter().map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Known mystery words, keyed by their length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeMap<usize, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `word` under `length`, lower-casing it first.
    ///
    /// # Errors
    ///
    /// Fails when the word does not have `length` letters or is not alphabetic.
    pub fn insert(&mut self, length: usize, word: &str) -> Result<()> {
        let word = word.to_ascii_lowercase();
        Target::new(&word, length)?;
        self.words.insert(length, word);
        Ok(())
    }

    pub fn get(&self, length: usize) -> Option<&str> {
        self.words.get(&length).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Produces the target for a run. Called exactly once per run.
pub trait TargetSupplier: Debug + Send + Sync {
    fn supply(&self, length: usize, rng: &mut RandomNumberGenerator) -> Result<Target>;
}

/// Serves dictionary words for short lengths and random words otherwise.
#[derive(Debug, Clone, Default)]
pub struct DictionaryTarget {
    dictionary: Dictionary,
}

impl DictionaryTarget {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }
}

impl TargetSupplier for DictionaryTarget {
    fn supply(&self, length: usize, rng: &mut RandomNumberGenerator) -> Result<Target> {
        if length > 0 && length < DICTIONARY_LENGTH_LIMIT {
            if let Some(word) = self.dictionary.get(length) {
                return Target::new(word, length);
            }
        }
        Ok(Target::random(length, rng))
    }
}

/// Always draws a random target.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTarget;

impl TargetSupplier for RandomTarget {
    fn supply(&self, length: usize, rng: &mut RandomNumberGenerator) -> Result<Target> {
        Ok(Target::random(length, rng))
    }
}

/// Adapts a closure into a `TargetSupplier`.
pub struct FnTarget<F>(pub F);

impl<F> Debug for FnTarget<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnTarget")
    }
}

impl<F> TargetSupplier for FnTarget<F>
where
    F: Fn(usize, &mut RandomNumberGenerator) -> Result<Target> + Send + Sync,
{
    fn supply(&self, length: usize, rng: &mut RandomNumberGenerator) -> Result<Target> {
        (self.0)(length, rng)
    }
}
