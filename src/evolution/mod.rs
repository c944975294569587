pub mod builder;
pub mod challenge;
pub mod launcher;
pub mod options;

pub use builder::{EvolutionLauncherBuilder, StandardLauncher};
pub use challenge::{Challenge, MysteryWordChallenge};
pub use launcher::{EvolutionLauncher, EvolutionResult, ExhaustionReason};
pub use options::{DegenerateSelectionPolicy, EvolutionOptions, LogLevel};
