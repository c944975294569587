//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the parameters of one search run: the word
//! length, the population size, the selection threshold and the budget that
//! bounds the search.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use genword::evolution::options::{DegenerateSelectionPolicy, EvolutionOptions, LogLevel};
//!
//! // Word length 5, 50 candidates, parents need at least 1 matching letter
//! let options = EvolutionOptions::new(5, 50, 1);
//! assert!(options.validate().is_ok());
//!
//! let tuned = EvolutionOptions::builder()
//!     .word_length(8)
//!     .population_size(200)
//!     .selection_threshold(2)
//!     .max_generations(5_000)
//!     .time_budget(Duration::from_secs(10))
//!     .degenerate_policy(DegenerateSelectionPolicy::Backfill)
//!     .log_level(LogLevel::Minimal)
//!     .build()
//!     .unwrap();
//! assert_eq!(tuned.get_population_size(), 200);
//! ```
//!
//! ## Structs
//!
//! ### `EvolutionOptions`
//!
//! - `word_length`: length `L` of the target and of every candidate.
//! - `population_size`: number `N` of candidates in every generation.
//! - `selection_threshold`: minimum score a candidate needs to become a parent.
//! - `max_generations`: the most generations a run evaluates before giving up.
//! - `time_budget`: optional wall-clock limit, checked once per generation.
//! - `parallel_threshold`: population size from which evaluation runs in parallel.
//! - `degenerate_policy`: what to do when fewer than two candidates are selected.
//! - `log_level`: how much the search reports through `tracing`.
//!
//! ### `LogLevel`
//!
//! - `Verbose`: every generation and every candidate.
//! - `Minimal`: run start, degenerate selections and the outcome.
//! - `None`: nothing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GeneticError, Result};

pub const DEFAULT_MAX_GENERATIONS: usize = 10_000;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Verbose,
    #[default]
    Minimal,
    None,
}

/// Recovery applied when fewer than two candidates pass selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateSelectionPolicy {
    /// Re-select this generation with the threshold lowered to the second-highest
    /// score present. The configured threshold applies again next generation.
    #[default]
    RelaxThreshold,
    /// Keep the lone selected candidate, if any, and fill the rest of the next
    /// generation with random candidates.
    Backfill,
}

#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    word_length: usize,
    population_size: usize,
    selection_threshold: usize,
    max_generations: usize,
    time_budget: Option<Duration>,
    /// Minimum population size to evaluate in parallel
    parallel_threshold: usize,
    degenerate_policy: DegenerateSelectionPolicy,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn new(word_length: usize, population_size: usize, selection_threshold: usize) -> Self {
        Self {
            word_length,
            population_size,
            selection_threshold,
            ..Self::default()
        }
    }

    /// Checks the options before a run starts.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` when the word length, the population
    /// size or the generation cap is zero, or when the threshold exceeds the word
    /// length (no candidate could ever be selected on merit).
    pub fn validate(&self) -> Result<()> {
        if self.word_length == 0 {
            return Err(GeneticError::Configuration(
                "Word length must be positive".to_string(),
            ));
        }
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if self.selection_threshold > self.word_length {
            return Err(GeneticError::Configuration(format!(
                "Selection threshold {} exceeds word length {}",
                self.selection_threshold, self.word_length
            )));
        }
        if self.max_generations == 0 {
            return Err(GeneticError::Configuration(
                "Generation cap cannot be zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_word_length(&self) -> usize {
        self.word_length
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_selection_threshold(&self) -> usize {
        self.selection_threshold
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_time_budget(&self) -> Option<Duration> {
        self.time_budget
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_degenerate_policy(&self) -> DegenerateSelectionPolicy {
        self.degenerate_policy
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            word_length: 5,
            population_size: 100,
            selection_threshold: 1,
            max_generations: DEFAULT_MAX_GENERATIONS,
            time_budget: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            degenerate_policy: DegenerateSelectionPolicy::default(),
            log_level: LogLevel::default(),
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields take the values of `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    word_length: Option<usize>,
    population_size: Option<usize>,
    selection_threshold: Option<usize>,
    max_generations: Option<usize>,
    time_budget: Option<Duration>,
    parallel_threshold: Option<usize>,
    degenerate_policy: Option<DegenerateSelectionPolicy>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn word_length(mut self, value: usize) -> Self {
        self.word_length = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn selection_threshold(mut self, value: usize) -> Self {
        self.selection_threshold = Some(value);
        self
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn time_budget(mut self, value: Duration) -> Self {
        self.time_budget = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn degenerate_policy(mut self, value: DegenerateSelectionPolicy) -> Self {
        self.degenerate_policy = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds and validates the `EvolutionOptions` instance.
    pub fn build(self) -> Result<EvolutionOptions> {
        let defaults = EvolutionOptions::default();
        let options = EvolutionOptions {
            word_length: self.word_length.unwrap_or(defaults.word_length),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            selection_threshold: self
                .selection_threshold
                .unwrap_or(defaults.selection_threshold),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            time_budget: self.time_budget.or(defaults.time_budget),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
            degenerate_policy: self.degenerate_policy.unwrap_or(defaults.degenerate_policy),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        };
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EvolutionOptions::default().validate().is_ok());
    }

    #[test]
    fn test_builder_fills_defaults() {
        let options = EvolutionOptions::builder().word_length(3).build().unwrap();
        assert_eq!(options.get_word_length(), 3);
        assert_eq!(options.get_population_size(), 100);
        assert_eq!(options.get_max_generations(), DEFAULT_MAX_GENERATIONS);
        assert_eq!(options.get_time_budget(), None);
        assert_eq!(
            options.get_degenerate_policy(),
            DegenerateSelectionPolicy::RelaxThreshold
        );
    }

    #[test]
    fn test_invalid_options() {
        let cases = [
            (EvolutionOptions::new(0, 10, 0), "Word length"),
            (EvolutionOptions::new(4, 0, 1), "Population size"),
            (EvolutionOptions::new(4, 10, 5), "exceeds word length"),
        ];
        for (options, expected) in cases {
            match options.validate() {
                Err(GeneticError::Configuration(msg)) => assert!(msg.contains(expected), "{}", msg),
                other => panic!("Expected Configuration error, got {:?}", other),
            }
        }

        let result = EvolutionOptions::builder().max_generations(0).build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }
}
