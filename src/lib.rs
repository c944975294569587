pub mod breeding;
pub mod candidate;
pub mod config;
pub mod error;
pub mod evolution;
pub mod generator;
pub mod rng;
pub mod selection;
pub mod target;

// Re-export commonly used types for convenience
pub use candidate::Candidate;
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionLauncher, EvolutionLauncherBuilder, EvolutionOptions, EvolutionResult};
