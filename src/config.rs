//! # Run configuration
//!
//! File-backed run parameters and the mystery-word dictionary, both JSON.
//!
//! A run file names any subset of the parameters; missing ones keep their
//! defaults:
//!
//! ```json
//! { "word_length": 5, "population_size": 200, "selection_threshold": 2, "seed": 7 }
//! ```
//!
//! A dictionary file maps word lengths to words:
//!
//! ```json
//! { "3": "cat", "5": "house" }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GeneticError, Result, ResultExt};
use crate::evolution::options::{
    DegenerateSelectionPolicy, EvolutionOptions, LogLevel, DEFAULT_MAX_GENERATIONS,
    DEFAULT_PARALLEL_THRESHOLD,
};
use crate::target::Dictionary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub word_length: usize,
    pub population_size: usize,
    pub selection_threshold: usize,
    pub max_generations: usize,
    pub time_budget_secs: Option<u64>,
    pub parallel_threshold: usize,
    pub degenerate_policy: DegenerateSelectionPolicy,
    pub log_level: LogLevel,
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            population_size: 100,
            selection_threshold: 1,
            max_generations: DEFAULT_MAX_GENERATIONS,
            time_budget_secs: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            degenerate_policy: DegenerateSelectionPolicy::default(),
            log_level: LogLevel::default(),
            seed: None,
        }
    }
}

impl RunConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read run configuration {}", path.display()))?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Converts the file values into validated `EvolutionOptions`.
    pub fn to_options(&self) -> Result<EvolutionOptions> {
        let mut builder = EvolutionOptions::builder()
            .word_length(self.word_length)
            .population_size(self.population_size)
            .selection_threshold(self.selection_threshold)
            .max_generations(self.max_generations)
            .parallel_threshold(self.parallel_threshold)
            .degenerate_policy(self.degenerate_policy)
            .log_level(self.log_level);
        if let Some(secs) = self.time_budget_secs {
            builder = builder.time_budget(Duration::from_secs(secs));
        }
        builder.build()
    }
}

/// Reads a `{"<length>": "<word>"}` JSON object into a `Dictionary`.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .context(format!("Failed to read dictionary {}", path.display()))?;
    parse_dictionary(&contents)
}

pub fn parse_dictionary(contents: &str) -> Result<Dictionary> {
    let raw: BTreeMap<String, String> = serde_json::from_str(contents)?;
    let mut dictionary = Dictionary::new();
    for (key, word) in raw {
        let length: usize = key
            .trim()
            .parse()
            .map_err(|_| GeneticError::Parse(format!("Dictionary key '{}' is not a length", key)))?;
        dictionary.insert(length, &word)?;
    }
    Ok(dictionary)
}
