//! # Error Types
//!
//! This module defines the error type shared by every part of the word search.
//! Conditions the search controller recovers from on its own (such as a
//! degenerate selection) are variants too, so operators can report them with `?`
//! and let the controller decide what to do.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genword::error::{GeneticError, Result};
//!
//! fn check_length(expected: usize, actual: usize) -> Result<()> {
//!     if expected != actual {
//!         return Err(GeneticError::InvalidGenomeLength { expected, actual });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_length(3, 3).is_ok());
//! assert!(check_length(3, 4).is_err());
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use genword::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn open_dictionary(path: &str) -> Result<()> {
//!     File::open(path).context("Failed to open dictionary")?;
//!     Ok(())
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genword::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[usize]) -> genword::error::Result<usize> {
//!     scores.iter().max().cloned().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while searching for the mystery word.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// A candidate or target whose length disagrees with the run's word length.
    #[error("Invalid genome length: expected {expected}, got {actual}")]
    InvalidGenomeLength { expected: usize, actual: usize },

    /// A word containing something other than the letters `a` to `z`.
    #[error("Invalid genome: {0}")]
    InvalidGenome(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Fewer than two candidates passed selection, so no pair can be formed.
    ///
    /// The search controller recovers from this locally; it never ends a run.
    #[error("Degenerate selection: {selected} candidate(s) reached threshold {threshold}")]
    DegenerateSelection { selected: usize, threshold: usize },

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A configuration or dictionary file could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for GeneticError {
    fn from(error: serde_json::Error) -> Self {
        GeneticError::Parse(error.to_string())
    }
}

/// A specialized Result type for word search operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use genword::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> genword::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using `err_fn`
    /// to build the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
